//! Stagecast Control - Stage Telemetry Broadcasting
//!
//! This crate turns the `stagecast-core` performance snapshot into a live
//! UDP telemetry feed for stage-lighting and show-control hardware:
//! - **Wire codec**: the fixed 44-byte versioned datagram layout
//! - **Broadcast scheduler**: fixed-rate tick thread and enable/disable
//!   lifecycle
//! - **Configuration**: destination address/port and broadcast frequency
//!
//! Fire-and-forget by design: no acknowledgements, no retries, no
//! persistence. A lost frame costs one lighting update at 88 Hz.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stagecast_core::{PauseState, ShowState};
//! use stagecast_control::{BroadcastConfig, Broadcaster};
//!
//! # fn main() -> stagecast_control::Result<()> {
//! let config = BroadcastConfig::default();
//! let state = Arc::new(ShowState::new(config.frequency_hz));
//! let mut broadcaster = Broadcaster::new(Arc::clone(&state), config);
//!
//! broadcaster.set_enabled(true)?;
//!
//! // Gameplay producers feed the shared state from their own threads:
//! state.set_tempo(128.0);
//! state.set_pause(PauseState::Unpaused);
//! state.enqueue_notes(2, 1, 0, 0);
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]

/// Fixed-rate broadcast scheduler
pub mod broadcaster;
/// Broadcast configuration
pub mod config;
/// Error types
pub mod error;
/// Datagram encoder/decoder
pub mod wire;

// Re-exports
pub use broadcaster::Broadcaster;
pub use config::{BroadcastConfig, DEFAULT_ADDRESS, DEFAULT_FREQUENCY_HZ, DEFAULT_PORT};
pub use error::{ControlError, Result};
pub use wire::{Datagram, BEAT_OFF, DATAGRAM_LEN, MAGIC, PROTOCOL_VERSION};
