//! Cancellable one-shot delays on the local executor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scroll guard fallback, banner auto-dismiss and the fake submit latency all
//! schedule a callback after a fixed delay. Each schedule returns a
//! [`DelayHandle`]; components cancel it when superseded and on cleanup.
//! Outside the browser nothing is scheduled and the callback is dropped.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a pending delayed callback.
#[derive(Clone, Debug)]
pub struct DelayHandle {
    pending: Arc<AtomicBool>,
}

impl DelayHandle {
    /// Stop the callback from running. No-op once it has fired.
    pub fn cancel(&self) {
        self.pending.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }
}

/// Run `f` after `ms` milliseconds unless the returned handle is cancelled.
pub fn after(ms: u64, f: impl FnOnce() + 'static) -> DelayHandle {
    let handle = DelayHandle { pending: Arc::new(AtomicBool::new(true)) };
    #[cfg(feature = "hydrate")]
    {
        let pending = handle.pending.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
            if pending.swap(false, Ordering::Relaxed) {
                f();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        drop(f);
    }
    handle
}

/// At most one pending delay; scheduling a new one cancels the previous.
///
/// Clones share the same slot, so a component can hand one clone to its event
/// handlers and another to `on_cleanup`.
#[derive(Clone, Debug, Default)]
pub struct DelaySlot {
    current: Arc<Mutex<Option<DelayHandle>>>,
}

impl DelaySlot {
    pub fn schedule(&self, ms: u64, f: impl FnOnce() + 'static) {
        let next = after(ms, f);
        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(next)
        {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Ok(mut current) = self.current.lock()
            && let Some(handle) = current.take()
        {
            handle.cancel();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.current
            .lock()
            .map(|current| current.as_ref().is_some_and(DelayHandle::is_pending))
            .unwrap_or(false)
    }

    #[cfg(test)]
    fn current_handle(&self) -> Option<DelayHandle> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}
