//! Fixed-rate broadcast scheduler
//!
//! Owns the timer thread, the UDP socket, and the enable/disable lifecycle.
//! The tick loop runs on its own OS thread, decoupled from the variable-rate
//! gameplay loop: each fire drains one batch from the instrument queues,
//! copies the snapshot, encodes one datagram, and sends it. Transport
//! failures are logged and swallowed; the next tick proceeds independently.

use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, select, tick, Sender};
use stagecast_core::{NoteCounts, PerformanceSnapshot, Platform, ShowState};

use crate::config::BroadcastConfig;
use crate::wire;
use crate::Result;

/// Fixed-rate telemetry broadcaster.
///
/// Lifecycle: Disabled -> Enabled -> Disabled, driven by an external
/// settings toggle. Disabling stops the timer and flushes the queues but
/// keeps the socket so the final "lights off" datagram can still go out at
/// process exit.
pub struct Broadcaster {
    state: Arc<ShowState>,
    config: BroadcastConfig,
    socket: Option<Arc<UdpSocket>>,
    worker: Option<Worker>,
}

struct Worker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl Broadcaster {
    /// Create a disabled broadcaster over the shared show state.
    pub fn new(state: Arc<ShowState>, config: BroadcastConfig) -> Self {
        Self {
            state,
            config,
            socket: None,
            worker: None,
        }
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.worker.is_some()
    }

    /// Drive the lifecycle from the external settings toggle.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            self.enable()
        } else {
            self.disable();
            Ok(())
        }
    }

    /// Start broadcasting: reset the state store, open the socket, and spawn
    /// the fixed-rate tick thread. Any prior timer is cancelled and joined
    /// first.
    pub fn enable(&mut self) -> Result<()> {
        self.disable();
        self.config.validate()?;

        self.state.reset();
        self.state.set_platform(Platform::current());

        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_broadcast(true)?;
        let socket = Arc::new(socket);

        let target = self.config.socket_addr();
        let interval = self.config.interval();
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = {
            let state = Arc::clone(&self.state);
            let socket = Arc::clone(&socket);
            std::thread::Builder::new()
                .name("stagecast-broadcast".to_string())
                .spawn(move || {
                    let ticker = tick(interval);
                    // Carried across ticks for the last-known-value fallback.
                    let mut counts = NoteCounts::default();
                    loop {
                        select! {
                            recv(ticker) -> _ => {
                                broadcast_tick(&state, &socket, target, &mut counts);
                            }
                            recv(stop_rx) -> _ => break,
                        }
                    }
                })?
        };

        self.socket = Some(socket);
        self.worker = Some(Worker {
            stop: stop_tx,
            handle,
        });

        tracing::info!(
            destination = %target,
            frequency_hz = self.config.frequency_hz,
            "telemetry broadcast enabled"
        );
        Ok(())
    }

    /// Stop broadcasting: cancel and join the tick thread, flush the queues.
    /// The socket stays open until [`Broadcaster::shutdown`].
    pub fn disable(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop.send(());
            let _ = worker.handle.join();
            self.state.queues().clear_all();
            tracing::info!("telemetry broadcast disabled");
        }
    }

    /// Process-exit hand-off: stop the timer, then force one all-off
    /// datagram so external rigs return to idle, then release the socket.
    ///
    /// The final send is attempted unconditionally; its failure is logged
    /// and never propagated. Idempotent, and also run from `Drop`.
    pub fn shutdown(&mut self) {
        self.disable();
        if let Some(socket) = self.socket.take() {
            let blackout = wire::encode(&PerformanceSnapshot::default(), &NoteCounts::default());
            match socket.send_to(&blackout, self.config.socket_addr()) {
                Ok(_) => tracing::info!("lights-off datagram sent"),
                Err(e) => tracing::warn!("lights-off datagram failed: {}", e),
            }
        }
    }
}

impl Drop for Broadcaster {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One broadcast tick: dequeue, assemble, encode, transmit, reset edges.
fn broadcast_tick(
    state: &ShowState,
    socket: &UdpSocket,
    target: SocketAddr,
    counts: &mut NoteCounts,
) {
    // Single lock acquisition covering all four dequeues, so one datagram
    // never mixes samples from different gameplay batches.
    state.queues().dequeue_into(counts);
    let snapshot = state.snapshot();
    let packet = wire::encode(&snapshot, counts);

    match socket.send_to(&packet, target) {
        Ok(_) => {
            state.clear_edge_triggers();
            tracing::trace!(bytes = packet.len(), "telemetry datagram sent");
        }
        Err(e) => {
            // Best-effort feed: drop the frame, keep the schedule.
            tracing::warn!("telemetry send failed: {}", e);
        }
    }
}
