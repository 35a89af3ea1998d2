use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A flag to abort a running search from the outside.
///
/// Clones share the same flag, so one clone can be handed to the search while another one
/// stays with whoever decides to cancel it.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use campus_routing::CancelToken;
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// creates a new token that is not cancelled
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// requests every search holding this token (or a clone of it) to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// `true` once [`cancel`](CancelToken::cancel) was called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
