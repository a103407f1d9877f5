//! Stagecast datagram codec
//!
//! One datagram carries one encoded performance snapshot. The layout is
//! fixed-width (44 bytes), versioned, and byte-stable: every multi-byte
//! numeric field is little-endian, every enumerated field is the single raw
//! byte documented on its enum in `stagecast-core`. Encoding cannot fail;
//! transport failures are the scheduler's concern.

use stagecast_core::{
    Keyframe, LightingCue, NoteCounts, PauseState, Performer, PerformanceSnapshot, Platform,
    PostProcessing, Scene, SongSection, StrobeState, VenueSize,
};

use crate::{error::ControlError, Result};

/// Constant header magic, first four bytes of every datagram.
pub const MAGIC: [u8; 4] = *b"STGC";
/// Datagram layout revision. Bump on any layout change.
pub const PROTOCOL_VERSION: u8 = 1;
/// Fixed datagram size for protocol version 1.
pub const DATAGRAM_LEN: usize = 44;
/// Wire sentinel for "no beat this tick", distinct from beat index 0.
pub const BEAT_OFF: u8 = 0xFF;

/// Build a version-1 datagram from a snapshot plus the note counts dequeued
/// for this tick.
///
/// Note-activity values are truncated to their low 8 bits; values >= 256
/// wrap. Real note activity fits in 5-8 bits, so the wrap is never hit in
/// practice and keeps the field a single byte.
pub fn encode(snapshot: &PerformanceSnapshot, counts: &NoteCounts) -> [u8; DATAGRAM_LEN] {
    let mut packet = [0u8; DATAGRAM_LEN];

    // Header: magic + version
    packet[0..4].copy_from_slice(&MAGIC);
    packet[4] = PROTOCOL_VERSION;

    // Identity / context
    packet[5] = snapshot.platform as u8;
    packet[6] = snapshot.scene as u8;
    packet[7] = snapshot.pause as u8;
    packet[8] = snapshot.venue_size as u8;

    // Tempo (f32, little-endian)
    packet[9..13].copy_from_slice(&snapshot.bpm.to_le_bytes());
    packet[13] = snapshot.song_section as u8;

    // Instrument note activity, truncated to 8 bits
    packet[14] = counts.guitar as u8;
    packet[15] = counts.bass as u8;
    packet[16] = counts.drums as u8;
    packet[17] = counts.keys as u8;

    // Vocal pitches (f32, little-endian)
    packet[18..22].copy_from_slice(&snapshot.lead_pitch.to_le_bytes());
    packet[22..26].copy_from_slice(&snapshot.harmony_pitch[0].to_le_bytes());
    packet[26..30].copy_from_slice(&snapshot.harmony_pitch[1].to_le_bytes());
    packet[30..34].copy_from_slice(&snapshot.harmony_pitch[2].to_le_bytes());

    // Lighting / show state
    packet[34] = snapshot.lighting_cue as u8;
    packet[35] = snapshot.post_processing as u8;
    packet[36] = snapshot.fog as u8;
    packet[37] = snapshot.strobe as u8;
    // Beat index, pinned below the off sentinel so no index aliases it
    packet[38] = match snapshot.beat {
        Some(index) => index.min(BEAT_OFF - 1),
        None => BEAT_OFF,
    };
    packet[39] = snapshot.keyframe as u8;
    packet[40] = snapshot.bonus_effect as u8;
    packet[41] = snapshot.auto_lighting as u8;
    packet[42] = snapshot.spotlight as u8;
    packet[43] = snapshot.singalong as u8;

    packet
}

/// A decoded version-1 datagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datagram {
    pub version: u8,
    pub snapshot: PerformanceSnapshot,
    pub counts: NoteCounts,
}

fn decode_enum<T>(byte: u8, field: &str, from_repr: fn(u8) -> Option<T>) -> Result<T> {
    from_repr(byte)
        .ok_or_else(|| ControlError::InvalidMessage(format!("bad {} byte: {:#04x}", field, byte)))
}

fn decode_bool(byte: u8, field: &str) -> Result<bool> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ControlError::InvalidMessage(format!(
            "bad {} byte: {:#04x}",
            field, other
        ))),
    }
}

fn decode_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes(bytes.try_into().expect("slice is 4 bytes"))
}

/// Reference decoder for receivers and round-trip tests.
///
/// Strict: the datagram must be exactly [`DATAGRAM_LEN`] bytes, carry the
/// magic and a known version, and every enumerated byte must be a documented
/// value.
pub fn decode(data: &[u8]) -> Result<Datagram> {
    if data.len() != DATAGRAM_LEN {
        return Err(ControlError::InvalidMessage(format!(
            "expected {} bytes, got {}",
            DATAGRAM_LEN,
            data.len()
        )));
    }
    if data[0..4] != MAGIC {
        return Err(ControlError::InvalidMessage("bad magic".to_string()));
    }
    let version = data[4];
    if version != PROTOCOL_VERSION {
        return Err(ControlError::InvalidMessage(format!(
            "unsupported datagram version {}",
            version
        )));
    }

    let snapshot = PerformanceSnapshot {
        platform: decode_enum(data[5], "platform", Platform::from_repr)?,
        scene: decode_enum(data[6], "scene", Scene::from_repr)?,
        pause: decode_enum(data[7], "pause", PauseState::from_repr)?,
        venue_size: decode_enum(data[8], "venue size", VenueSize::from_repr)?,
        bpm: decode_f32(&data[9..13]),
        song_section: decode_enum(data[13], "song section", SongSection::from_repr)?,
        lead_pitch: decode_f32(&data[18..22]),
        harmony_pitch: [
            decode_f32(&data[22..26]),
            decode_f32(&data[26..30]),
            decode_f32(&data[30..34]),
        ],
        lighting_cue: decode_enum(data[34], "lighting cue", LightingCue::from_repr)?,
        post_processing: decode_enum(data[35], "post-processing", PostProcessing::from_repr)?,
        fog: decode_bool(data[36], "fog")?,
        strobe: decode_enum(data[37], "strobe", StrobeState::from_repr)?,
        beat: match data[38] {
            BEAT_OFF => None,
            index => Some(index),
        },
        keyframe: decode_enum(data[39], "keyframe", Keyframe::from_repr)?,
        bonus_effect: decode_bool(data[40], "bonus effect")?,
        auto_lighting: decode_bool(data[41], "auto lighting")?,
        spotlight: decode_enum(data[42], "spotlight", Performer::from_repr)?,
        singalong: decode_enum(data[43], "singalong", Performer::from_repr)?,
    };

    let counts = NoteCounts {
        guitar: data[14] as u32,
        bass: data[15] as u32,
        drums: data[16] as u32,
        keys: data[17] as u32,
    };

    Ok(Datagram {
        version,
        snapshot,
        counts,
    })
}
