//! Performance snapshot state store
//!
//! One process-wide record of "what to send next", written by gameplay
//! producers and read once per broadcast tick. Each field has exactly one
//! producer responsibility; writes are plain value assignments. The whole
//! snapshot sits behind a single mutex with best-effort freshness semantics:
//! a tick may observe a value up to one tick stale, which is acceptable for
//! a visual lighting feed.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::cues::{CueSlot, LightingEvent};
use crate::queues::InstrumentQueues;
use crate::types::{
    Keyframe, LightingCue, PauseState, Performer, Platform, PostProcessing, Scene, SongSection,
    StrobeState, VenueSize,
};

/// Everything a datagram carries except the per-instrument note counts,
/// which are sourced from the queues at tick time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    // Identity / context
    pub platform: Platform,
    pub scene: Scene,
    pub pause: PauseState,
    pub venue_size: VenueSize,

    // Musical context
    pub bpm: f32,
    pub song_section: SongSection,

    // Vocal pitch, in semitones. Level-triggered.
    pub lead_pitch: f32,
    pub harmony_pitch: [f32; 3],

    // Lighting / show state
    pub lighting_cue: LightingCue,
    pub post_processing: PostProcessing,
    pub fog: bool,
    pub strobe: StrobeState,
    /// Beat-of-measure indicator. Edge-triggered; `None` is "off", which is
    /// distinct from beat index 0.
    pub beat: Option<u8>,
    /// Edge-triggered; reset after every send.
    pub keyframe: Keyframe,
    /// Edge-triggered; reset after every send.
    pub bonus_effect: bool,
    /// Whether the lighting track was auto-generated rather than authored.
    /// Set once per chart load.
    pub auto_lighting: bool,
    pub spotlight: Performer,
    pub singalong: Performer,
}

impl PerformanceSnapshot {
    /// Restore scene-change defaults.
    ///
    /// The platform is host identity, not show state, and survives resets;
    /// it is resolved once when broadcasting is enabled.
    pub fn reset(&mut self) {
        *self = Self {
            platform: self.platform,
            ..Self::default()
        };
    }

    /// Reset the edge-triggered fields to "off". Called after every
    /// successful transmission so receivers see pulses, not levels.
    pub fn clear_edge_triggers(&mut self) {
        self.keyframe = Keyframe::Off;
        self.beat = None;
        self.bonus_effect = false;
    }

    /// Route a lighting event into exactly one of the three cue slots.
    pub fn apply_lighting_event(&mut self, event: &LightingEvent) {
        match event.kind.classify() {
            CueSlot::Keyframe(keyframe) => self.keyframe = keyframe,
            CueSlot::Section(section) => self.song_section = section,
            CueSlot::Cue(cue) => self.lighting_cue = cue,
        }
        tracing::debug!(
            kind = ?event.kind,
            position = event.position_seconds,
            "lighting event applied"
        );
    }
}

/// Shared hand-off point between gameplay producers and the broadcast tick.
///
/// Producers call the mutation entry points below from the gameplay context;
/// the broadcast thread copies the snapshot out once per tick and drains one
/// batch from the queues.
pub struct ShowState {
    snapshot: Mutex<PerformanceSnapshot>,
    queues: InstrumentQueues,
}

impl ShowState {
    /// Create the state store with queues sized for the broadcast rate.
    pub fn new(broadcast_hz: u32) -> Self {
        Self {
            snapshot: Mutex::new(PerformanceSnapshot::default()),
            queues: InstrumentQueues::with_rate(broadcast_hz),
        }
    }

    /// Copy out the current snapshot.
    pub fn snapshot(&self) -> PerformanceSnapshot {
        *self.snapshot.lock()
    }

    pub fn queues(&self) -> &InstrumentQueues {
        &self.queues
    }

    /// Scene-transition reset: snapshot back to defaults, queues emptied.
    pub fn reset(&self) {
        self.snapshot.lock().reset();
        self.queues.clear_all();
    }

    pub fn clear_edge_triggers(&self) {
        self.snapshot.lock().clear_edge_triggers();
    }

    // --- Producer mutation entry points ---

    pub fn set_platform(&self, platform: Platform) {
        self.snapshot.lock().platform = platform;
    }

    /// Plain scene write, without the scene-change reset.
    pub fn set_scene(&self, scene: Scene) {
        self.snapshot.lock().scene = scene;
    }

    /// Scene-change notification: reset everything, then record the new
    /// scene.
    pub fn scene_changed(&self, scene: Scene) {
        {
            let mut snapshot = self.snapshot.lock();
            snapshot.reset();
            snapshot.scene = scene;
        }
        self.queues.clear_all();
        tracing::debug!(?scene, "scene changed, state reset");
    }

    pub fn set_tempo(&self, bpm: f32) {
        self.snapshot.lock().bpm = bpm;
    }

    pub fn set_pause(&self, pause: PauseState) {
        self.snapshot.lock().pause = pause;
    }

    pub fn set_venue_size(&self, venue_size: VenueSize) {
        self.snapshot.lock().venue_size = venue_size;
    }

    pub fn set_song_section(&self, section: SongSection) {
        self.snapshot.lock().song_section = section;
    }

    pub fn set_vocal_pitches(&self, lead: f32, harmonies: [f32; 3]) {
        let mut snapshot = self.snapshot.lock();
        snapshot.lead_pitch = lead;
        snapshot.harmony_pitch = harmonies;
    }

    /// Queue one note-activity sample per instrument.
    pub fn enqueue_notes(&self, drums: u32, guitar: u32, bass: u32, keys: u32) {
        self.queues.enqueue(drums, guitar, bass, keys);
    }

    pub fn apply_lighting_event(&self, event: LightingEvent) {
        self.snapshot.lock().apply_lighting_event(&event);
    }

    /// Pulse the beat-of-measure indicator for the next datagram.
    pub fn pulse_beat(&self, index: u8) {
        self.snapshot.lock().beat = Some(index);
    }

    /// Pulse the bonus-effect flag for the next datagram.
    pub fn trigger_bonus_effect(&self) {
        self.snapshot.lock().bonus_effect = true;
    }

    pub fn set_fog(&self, fog: bool) {
        self.snapshot.lock().fog = fog;
    }

    pub fn set_strobe(&self, strobe: StrobeState) {
        self.snapshot.lock().strobe = strobe;
    }

    pub fn set_post_processing(&self, style: PostProcessing) {
        self.snapshot.lock().post_processing = style;
    }

    pub fn set_spotlight(&self, target: Performer) {
        self.snapshot.lock().spotlight = target;
    }

    pub fn set_singalong(&self, target: Performer) {
        self.snapshot.lock().singalong = target;
    }

    pub fn set_auto_lighting(&self, auto: bool) {
        self.snapshot.lock().auto_lighting = auto;
    }
}
