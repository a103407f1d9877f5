//! Instrument note-activity queues
//!
//! Gameplay emits note-activity updates at frame rate; the broadcaster
//! consumes them at its own fixed rate. These FIFOs bridge the two cadences
//! without dropping samples. All four queues share a single mutex so that a
//! broadcast tick dequeues one consistent batch across instruments.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Instrument lanes, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Guitar = 0,
    Bass = 1,
    Drums = 2,
    Keys = 3,
}

impl Instrument {
    /// All lanes, in wire order.
    pub const ALL: [Instrument; 4] = [
        Instrument::Guitar,
        Instrument::Bass,
        Instrument::Drums,
        Instrument::Keys,
    ];
}

/// One note-activity value per instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteCounts {
    pub guitar: u32,
    pub bass: u32,
    pub drums: u32,
    pub keys: u32,
}

/// Thread-safe FIFO hand-off between gameplay producers and the broadcast
/// tick.
///
/// Growth is unbounded: if producers outpace the broadcast rate for long
/// enough, the backlog grows and the emitted values lag real time. That
/// matches the consuming hardware's expectation of a gap-free sample stream.
pub struct InstrumentQueues {
    inner: Mutex<[VecDeque<u32>; 4]>,
    initial_capacity: usize,
}

impl InstrumentQueues {
    /// Create queues sized for the given broadcast rate.
    ///
    /// Initial capacity is roughly 1/20th of a second of samples at that
    /// rate; the queues grow past it freely.
    pub fn with_rate(broadcast_hz: u32) -> Self {
        let capacity = (broadcast_hz as usize / 20).max(1);
        Self {
            inner: Mutex::new(std::array::from_fn(|_| VecDeque::with_capacity(capacity))),
            initial_capacity: capacity,
        }
    }

    /// Append one sample per instrument.
    ///
    /// Safe to call concurrently with the broadcast tick's dequeues.
    pub fn enqueue(&self, drums: u32, guitar: u32, bass: u32, keys: u32) {
        let mut queues = self.inner.lock();
        queues[Instrument::Guitar as usize].push_back(guitar);
        queues[Instrument::Bass as usize].push_back(bass);
        queues[Instrument::Drums as usize].push_back(drums);
        queues[Instrument::Keys as usize].push_back(keys);
    }

    /// Remove and return the oldest sample for one instrument, if any.
    pub fn try_dequeue(&self, instrument: Instrument) -> Option<u32> {
        self.inner.lock()[instrument as usize].pop_front()
    }

    /// Dequeue at most one sample per instrument as a single atomic batch.
    ///
    /// Fields of `counts` are overwritten only where a sample was queued;
    /// instruments with an empty queue keep the caller's last-known value.
    pub fn dequeue_into(&self, counts: &mut NoteCounts) {
        let mut queues = self.inner.lock();
        if let Some(value) = queues[Instrument::Guitar as usize].pop_front() {
            counts.guitar = value;
        }
        if let Some(value) = queues[Instrument::Bass as usize].pop_front() {
            counts.bass = value;
        }
        if let Some(value) = queues[Instrument::Drums as usize].pop_front() {
            counts.drums = value;
        }
        if let Some(value) = queues[Instrument::Keys as usize].pop_front() {
            counts.keys = value;
        }
    }

    /// Empty every queue. Used on scene change and on disable.
    pub fn clear_all(&self) {
        let mut queues = self.inner.lock();
        for queue in queues.iter_mut() {
            queue.clear();
        }
    }

    /// Number of pending samples for one instrument.
    pub fn len(&self, instrument: Instrument) -> usize {
        self.inner.lock()[instrument as usize].len()
    }

    /// True when no instrument has pending samples.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().iter().all(VecDeque::is_empty)
    }

    /// Capacity each queue was created with.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}
