//! Delayed post-success transition
//!
//! After a verified capture the shell waits a fixed delay before moving on
//! (the original UI navigated back to the reports page after 3 seconds). The
//! timer is owned by the shell, not the capture core: the core only emits the
//! verified outcome. The timer must be cancellable, and a cancelled or torn
//! down timer must never fire its action.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A scheduled one-shot action that can be cancelled before it fires
///
/// Dropping the handle cancels the action. The hosting shell must not accept
/// a second capture submission while a transition is pending.
#[derive(Debug)]
pub struct DelayedTransition {
    cancel: mpsc::Sender<()>,
    handle: Option<JoinHandle<bool>>,
}

impl DelayedTransition {
    /// Schedule `action` to run after `delay` unless cancelled first
    #[must_use]
    pub fn schedule<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel();
        let handle = thread::spawn(move || match cancelled.recv_timeout(delay) {
            // Nothing arrived within the delay: the transition fires.
            Err(RecvTimeoutError::Timeout) => {
                action();
                true
            },
            // Cancelled explicitly or the handle was dropped.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Cancel the pending transition; the action will not run
    pub fn cancel(mut self) {
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Block until the transition fires or is cancelled
    ///
    /// Returns `true` when the action ran.
    pub fn wait(mut self) -> bool {
        self.handle.take().is_some_and(|handle| handle.join().unwrap_or(false))
    }
}

impl Drop for DelayedTransition {
    fn drop(&mut self) {
        // Teardown before the delay elapses counts as cancellation.
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
