//! Stagecast Core - Performance Telemetry Domain Model
//!
//! This crate contains the domain model for Stagecast, including:
//! - Wire-stable enumerations for every datagram field
//! - The performance snapshot state store and its producer entry points
//! - Per-instrument note-activity queues
//! - The lighting-event classifier
//!
//! No I/O lives here; encoding and transport are in `stagecast-control`.

#![allow(missing_docs)]

/// Lighting event classification
pub mod cues;
/// Instrument note-activity queues
pub mod queues;
/// Snapshot state store
pub mod state;
/// Wire-stable enumerations
pub mod types;

// Re-exports
pub use cues::{CueSlot, LightingEvent, LightingType};
pub use queues::{Instrument, InstrumentQueues, NoteCounts};
pub use state::{PerformanceSnapshot, ShowState};
pub use types::{
    Keyframe, LightingCue, PauseState, Performer, Platform, PostProcessing, Scene, SongSection,
    StrobeState, VenueSize,
};
