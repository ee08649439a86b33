//! pipeline/sink.rs
//! Terminal node that records the final payload.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;

use crate::pipeline::types::Node;
use crate::types::TransformError;

#[derive(Default)]
struct SinkSlot {
    latest: Option<Bytes>,
    deliveries: u64,
}

/// Records the last payload that reached the end of a chain.
///
/// Clones share one slot: keep a clone before handing the sink to a
/// pipeline and read results through it. Each write overwrites the previous
/// value under the slot lock.
#[derive(Clone, Default)]
pub struct Sink {
    slot: Arc<Mutex<SinkSlot>>,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic elsewhere while holding the lock leaves the slot itself
    // consistent (single assignment), so poison is ignored.
    fn slot(&self) -> MutexGuard<'_, SinkSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn record(&self, payload: Bytes) {
        let mut slot = self.slot();
        slot.latest = Some(payload);
        slot.deliveries += 1;
    }

    /// Last recorded payload, if any.
    pub fn latest(&self) -> Option<Bytes> {
        self.slot().latest.clone()
    }

    /// Move the recorded payload out, leaving the slot empty.
    pub fn take(&self) -> Option<Bytes> {
        self.slot().latest.take()
    }

    /// Number of payloads recorded since construction.
    pub fn deliveries(&self) -> u64 {
        self.slot().deliveries
    }

    pub fn is_empty(&self) -> bool {
        self.slot().latest.is_none()
    }
}

impl Node for Sink {
    fn process(&self, payload: &[u8]) -> Result<Bytes, TransformError> {
        let payload = Bytes::copy_from_slice(payload);
        self.record(payload.clone());
        Ok(payload)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot();
        f.debug_struct("Sink")
            .field("latest_len", &slot.latest.as_ref().map(Bytes::len))
            .field("deliveries", &slot.deliveries)
            .finish()
    }
}
