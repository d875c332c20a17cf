use std::collections::HashMap;
use std::sync::Mutex;

use cdpilot_types::CallId;
use futures::channel::oneshot;

use crate::error::CdpError;

type Payload = std::result::Result<serde_json::Value, cdpilot_types::Error>;

/// Maps outgoing `CommandId`s to the oneshot sender the waiting caller is
/// blocked on. One table per `Transport`; the counter backing `CallId`
/// allocation lives here too so ids stay unique for the Transport's whole
/// lifetime.
#[derive(Debug, Default)]
pub(crate) struct CorrelationTable {
    next_id: Mutex<usize>,
    pending: Mutex<HashMap<CallId, oneshot::Sender<Payload>>>,
}

impl CorrelationTable {
    /// Allocates a fresh id and a receiver the caller can await.
    pub(crate) fn allocate(&self) -> (CallId, oneshot::Receiver<Payload>) {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = CallId::new(*next_id);
            *next_id = next_id.wrapping_add(1);
            id
        };
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().insert(id, tx);
        (id, rx)
    }

    /// Drops a slot without resolving it, used when a caller's wait is
    /// cancelled or times out. A late response for this id is simply
    /// dropped by the receive task (send on a closed channel is a no-op).
    pub(crate) fn forget(&self, id: CallId) {
        self.pending.lock().unwrap().remove(&id);
    }

    pub(crate) fn resolve(&self, id: CallId, result: Option<serde_json::Value>, error: Option<cdpilot_types::Error>) {
        let slot = self.pending.lock().unwrap().remove(&id);
        if let Some(tx) = slot {
            let payload = match error {
                Some(err) => Err(err),
                None => Ok(result.unwrap_or(serde_json::Value::Null)),
            };
            let _ = tx.send(payload);
        } else {
            tracing::warn!(call_id = id.value(), "no pending slot for response");
        }
    }

    /// Rejects every outstanding slot, e.g. after the socket has closed.
    /// Drops the senders rather than sending a payload through them: the
    /// awaiting `Transport::send_and_await` then observes `oneshot::Canceled`
    /// and maps that to `CdpError::Disconnected`, so every in-flight command
    /// surfaces the same way regardless of which slot it held.
    pub(crate) fn drain(&self, err: &CdpError) {
        let mut pending = self.pending.lock().unwrap();
        let count = pending.len();
        pending.clear();
        if count > 0 {
            tracing::debug!(count, %err, "rejected pending commands on transport close");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_unique_increasing_ids() {
        let table = CorrelationTable::default();
        let (a, _) = table.allocate();
        let (b, _) = table.allocate();
        assert!(b.value() > a.value());
    }

    #[test]
    fn drain_empties_the_table() {
        let table = CorrelationTable::default();
        let (id, rx) = table.allocate();
        table.drain(&CdpError::Disconnected);
        assert!(table.is_empty());
        drop(id);
        drop(rx);
    }

    #[test]
    fn forget_removes_slot_without_resolving() {
        let table = CorrelationTable::default();
        let (id, _rx) = table.allocate();
        table.forget(id);
        assert!(table.is_empty());
    }
}
