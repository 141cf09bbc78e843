//! Polling subscription handles.

use tokio::task::JoinHandle;

/// Handle to a polling subscription.
///
/// The subscription periodically pushes the full current dataset to its
/// callback; there is no diffing and no backpressure. Dropping the handle
/// stops the timer, as does calling [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    /// Stop the polling timer.
    pub fn unsubscribe(self) {
        self.handle.abort();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
