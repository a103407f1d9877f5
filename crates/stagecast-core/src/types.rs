//! Wire-stable enumerations
//!
//! Every enumerated datagram field is a `#[repr(u8)]` enum with an explicit
//! discriminant. The numeric values ARE the wire format: receivers match on
//! the raw byte, so discriminants must never be renumbered within a protocol
//! version. `strum::FromRepr` provides the byte-to-enum direction for the
//! reference decoder.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Host platform identifier, resolved once when broadcasting is enabled.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum Platform {
    /// Unrecognized or not yet resolved
    #[default]
    Unknown = 0,
    Windows = 1,
    Linux = 2,
    Mac = 3,
}

impl Platform {
    /// Resolve the platform of the running host.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }
}

/// Active scene reported by the game layer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum Scene {
    #[default]
    Unknown = 0,
    Menu = 1,
    Gameplay = 2,
    Score = 3,
    Calibration = 4,
}

/// Pause state of the performance.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum PauseState {
    #[default]
    AtMenu = 0,
    Unpaused = 1,
    Paused = 2,
}

/// Venue-size classification of the loaded chart.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum VenueSize {
    #[default]
    NoVenue = 0,
    Small = 1,
    Large = 2,
}

/// Structural song section. Level-triggered: persists until changed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum SongSection {
    #[default]
    None = 0,
    Verse = 1,
    Chorus = 2,
}

/// Current lighting cue. Level-triggered: persists until a non-transient
/// lighting event replaces it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum LightingCue {
    #[default]
    NoCue = 0,
    Menu = 1,
    Score = 2,
    Intro = 3,
    Harmony = 4,
    Frenzy = 5,
    Silhouettes = 6,
    SilhouettesSpotlight = 7,
    Searchlights = 8,
    Sweep = 9,
    Stomp = 10,
    Dischord = 11,
    Default = 12,
    WarmManual = 13,
    CoolManual = 14,
    WarmAutomatic = 15,
    CoolAutomatic = 16,
    BigRockEnding = 17,
    BlackoutFast = 18,
    BlackoutSlow = 19,
    BlackoutSpotlight = 20,
    FlareSlow = 21,
    FlareFast = 22,
}

/// Keyframe indicator. Edge-triggered: reset to `Off` after every send.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum Keyframe {
    #[default]
    Off = 0,
    Next = 1,
    Previous = 2,
    First = 3,
}

/// Strobe speed. Level-triggered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum StrobeState {
    #[default]
    Off = 0,
    Slow = 1,
    Medium = 2,
    Fast = 3,
    Fastest = 4,
}

/// Post-processing style applied by the venue renderer. Level-triggered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum PostProcessing {
    #[default]
    Default = 0,
    Bloom = 1,
    Posterize = 2,
    BlackAndWhite = 3,
    Sepia = 4,
    Photocopy = 5,
    Mirror = 6,
    VideoFeed = 7,
    Grainy = 8,
    Psychedelic = 9,
}

/// Spotlight / singalong performer target. Level-triggered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromRepr)]
pub enum Performer {
    #[default]
    None = 0,
    Guitar = 1,
    Bass = 2,
    Drums = 3,
    Keys = 4,
    Vocals = 5,
}
