use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

pub(crate) type SubscriptionId = usize;

type Callback = Box<dyn FnMut(&Value) + Send>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
    one_shot: bool,
}

/// Per-session table of `event name -> ordered subscriber list`.
///
/// Subscribers fire in registration order; a `one_shot` subscriber is
/// removed after it has been invoked once. A callback that panics would
/// poison the router's mutex, so callbacks are expected to handle their
/// own errors instead of unwinding.
#[derive(Default)]
pub(crate) struct EventRouter {
    next_id: Mutex<SubscriptionId>,
    subscribers: Mutex<HashMap<String, Vec<Subscriber>>>,
}

impl EventRouter {
    pub(crate) fn register(
        &self,
        event_name: impl Into<String>,
        one_shot: bool,
        callback: impl FnMut(&Value) + Send + 'static,
    ) -> SubscriptionId {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.subscribers
            .lock()
            .unwrap()
            .entry(event_name.into())
            .or_default()
            .push(Subscriber {
                id,
                callback: Box::new(callback),
                one_shot,
            });
        id
    }

    pub(crate) fn unregister(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().unwrap();
        for list in subscribers.values_mut() {
            list.retain(|s| s.id != id);
        }
    }

    /// Invokes every subscriber registered for `event_name`, in registration
    /// order, dropping any `one_shot` entries that fired.
    pub(crate) fn dispatch(&self, event_name: &str, payload: &Value) {
        let mut subscribers = self.subscribers.lock().unwrap();
        if let Some(list) = subscribers.get_mut(event_name) {
            for subscriber in list.iter_mut() {
                (subscriber.callback)(payload);
            }
            list.retain(|s| !s.one_shot);
        }
    }
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn dispatches_in_registration_order() {
        let router = EventRouter::default();
        let order = Arc::new(Mutex::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();
        router.register("Page.loadEventFired", false, move |_| o1.lock().unwrap().push(1));
        router.register("Page.loadEventFired", false, move |_| o2.lock().unwrap().push(2));
        router.dispatch("Page.loadEventFired", &Value::Null);
        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn one_shot_subscriber_fires_once() {
        let router = EventRouter::default();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        router.register("Page.fileChooserOpened", true, move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        router.dispatch("Page.fileChooserOpened", &Value::Null);
        router.dispatch("Page.fileChooserOpened", &Value::Null);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregister_removes_subscriber() {
        let router = EventRouter::default();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let id = router.register("Page.loadEventFired", false, move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        router.unregister(id);
        router.dispatch("Page.loadEventFired", &Value::Null);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
