//! Lighting event classification
//!
//! Chart lighting events arrive as a single tagged stream. Each event is
//! routed into exactly one of three snapshot slots: keyframe markers drive
//! the edge-triggered keyframe indicator, structural section markers drive
//! the song-section field, and everything else (including "no cue") becomes
//! the level-triggered lighting cue. The slots are independent memory cells;
//! writing one never clears the other two.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::types::{Keyframe, LightingCue, SongSection};

/// Type tag carried by an incoming lighting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum LightingType {
    // Keyframe markers
    KeyframeNext,
    KeyframePrevious,
    KeyframeFirst,

    // Structural section markers
    Verse,
    Chorus,

    // Everything else maps 1:1 onto a lighting cue
    NoCue,
    Menu,
    Score,
    Intro,
    Harmony,
    Frenzy,
    Silhouettes,
    SilhouettesSpotlight,
    Searchlights,
    Sweep,
    Stomp,
    Dischord,
    Default,
    WarmManual,
    CoolManual,
    WarmAutomatic,
    CoolAutomatic,
    BigRockEnding,
    BlackoutFast,
    BlackoutSlow,
    BlackoutSpotlight,
    FlareSlow,
    FlareFast,
}

/// An external lighting event: a type tag plus timing metadata.
///
/// Events are consumed by the classifier and never stored; the position is
/// only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingEvent {
    pub kind: LightingType,
    /// Chart position of the event, in seconds from song start.
    pub position_seconds: f64,
}

impl LightingEvent {
    pub fn new(kind: LightingType, position_seconds: f64) -> Self {
        Self {
            kind,
            position_seconds,
        }
    }
}

/// The single snapshot slot an event resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueSlot {
    Cue(LightingCue),
    Keyframe(Keyframe),
    Section(SongSection),
}

impl LightingType {
    /// Three-way dispatch into exactly one slot.
    ///
    /// The match is exhaustive and each tag appears in one arm, so no type
    /// can resolve to more than one slot.
    pub fn classify(self) -> CueSlot {
        match self {
            LightingType::KeyframeNext => CueSlot::Keyframe(Keyframe::Next),
            LightingType::KeyframePrevious => CueSlot::Keyframe(Keyframe::Previous),
            LightingType::KeyframeFirst => CueSlot::Keyframe(Keyframe::First),

            LightingType::Verse => CueSlot::Section(SongSection::Verse),
            LightingType::Chorus => CueSlot::Section(SongSection::Chorus),

            LightingType::NoCue => CueSlot::Cue(LightingCue::NoCue),
            LightingType::Menu => CueSlot::Cue(LightingCue::Menu),
            LightingType::Score => CueSlot::Cue(LightingCue::Score),
            LightingType::Intro => CueSlot::Cue(LightingCue::Intro),
            LightingType::Harmony => CueSlot::Cue(LightingCue::Harmony),
            LightingType::Frenzy => CueSlot::Cue(LightingCue::Frenzy),
            LightingType::Silhouettes => CueSlot::Cue(LightingCue::Silhouettes),
            LightingType::SilhouettesSpotlight => CueSlot::Cue(LightingCue::SilhouettesSpotlight),
            LightingType::Searchlights => CueSlot::Cue(LightingCue::Searchlights),
            LightingType::Sweep => CueSlot::Cue(LightingCue::Sweep),
            LightingType::Stomp => CueSlot::Cue(LightingCue::Stomp),
            LightingType::Dischord => CueSlot::Cue(LightingCue::Dischord),
            LightingType::Default => CueSlot::Cue(LightingCue::Default),
            LightingType::WarmManual => CueSlot::Cue(LightingCue::WarmManual),
            LightingType::CoolManual => CueSlot::Cue(LightingCue::CoolManual),
            LightingType::WarmAutomatic => CueSlot::Cue(LightingCue::WarmAutomatic),
            LightingType::CoolAutomatic => CueSlot::Cue(LightingCue::CoolAutomatic),
            LightingType::BigRockEnding => CueSlot::Cue(LightingCue::BigRockEnding),
            LightingType::BlackoutFast => CueSlot::Cue(LightingCue::BlackoutFast),
            LightingType::BlackoutSlow => CueSlot::Cue(LightingCue::BlackoutSlow),
            LightingType::BlackoutSpotlight => CueSlot::Cue(LightingCue::BlackoutSpotlight),
            LightingType::FlareSlow => CueSlot::Cue(LightingCue::FlareSlow),
            LightingType::FlareFast => CueSlot::Cue(LightingCue::FlareFast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keyframe_markers_route_to_keyframe_slot() {
        assert_eq!(
            LightingType::KeyframeNext.classify(),
            CueSlot::Keyframe(Keyframe::Next)
        );
        assert_eq!(
            LightingType::KeyframePrevious.classify(),
            CueSlot::Keyframe(Keyframe::Previous)
        );
        assert_eq!(
            LightingType::KeyframeFirst.classify(),
            CueSlot::Keyframe(Keyframe::First)
        );
    }

    #[test]
    fn test_section_markers_route_to_section_slot() {
        assert_eq!(
            LightingType::Verse.classify(),
            CueSlot::Section(SongSection::Verse)
        );
        assert_eq!(
            LightingType::Chorus.classify(),
            CueSlot::Section(SongSection::Chorus)
        );
    }

    #[test]
    fn test_off_falls_through_to_cue_slot() {
        assert_eq!(
            LightingType::NoCue.classify(),
            CueSlot::Cue(LightingCue::NoCue)
        );
    }

    #[test]
    fn test_every_type_resolves_to_exactly_one_slot() {
        let mut keyframes = 0;
        let mut sections = 0;
        let mut cues = 0;

        for kind in LightingType::iter() {
            match kind.classify() {
                CueSlot::Keyframe(_) => keyframes += 1,
                CueSlot::Section(_) => sections += 1,
                CueSlot::Cue(_) => cues += 1,
            }
        }

        assert_eq!(keyframes, 3);
        assert_eq!(sections, 2);
        // Every remaining tag maps onto a distinct lighting cue.
        assert_eq!(cues, LightingType::iter().count() - 5);
    }

    #[test]
    fn test_cue_tags_map_to_matching_cues() {
        // Spot-check the 1:1 mapping at both ends of the range.
        assert_eq!(
            LightingType::Menu.classify(),
            CueSlot::Cue(LightingCue::Menu)
        );
        assert_eq!(
            LightingType::FlareFast.classify(),
            CueSlot::Cue(LightingCue::FlareFast)
        );
    }
}
