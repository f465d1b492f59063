//! Timers for the success-screen redirect.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How long the success screen stays up before returning home.
pub const SUCCESS_REDIRECT_MS: u64 = 4000;

/// Async sleep that works on both targets.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

/// Async sleep that works on both targets.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Guard around a delayed one-shot action (the auto-redirect).
///
/// Invariants:
/// - `fire()` returns `true` at most once.
/// - after `cancel()` (view unmounted), `fire()` never returns `true`.
///
/// The guard is cheap to clone; clones share state so the sleeping future and
/// the component's drop hook observe each other.
#[derive(Debug, Clone, Default)]
pub struct RedirectGuard {
    inner: Arc<GuardState>,
}

#[derive(Debug, Default)]
struct GuardState {
    fired: AtomicBool,
    cancelled: AtomicBool,
}

impl RedirectGuard {
    pub fn arm() -> Self {
        Self::default()
    }

    /// Mark the guard dead; a pending `fire()` becomes a no-op.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    /// Claim the one-shot. Returns `true` exactly once, and never after
    /// `cancel()`.
    pub fn fire(&self) -> bool {
        if self.inner.cancelled.load(Ordering::SeqCst) {
            return false;
        }
        !self.inner.fired.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let guard = RedirectGuard::arm();
        assert!(guard.fire());
        assert!(!guard.fire());
        assert!(!guard.fire());
    }

    #[test]
    fn never_fires_after_cancel() {
        let guard = RedirectGuard::arm();
        guard.cancel();
        assert!(!guard.fire());
    }

    #[test]
    fn clones_share_state() {
        let guard = RedirectGuard::arm();
        let held_by_future = guard.clone();
        guard.cancel(); // component unmounted
        assert!(!held_by_future.fire());

        let guard = RedirectGuard::arm();
        let held_by_future = guard.clone();
        assert!(held_by_future.fire());
        assert!(!guard.fire());
    }
}
