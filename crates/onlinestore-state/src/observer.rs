//! # State Observers
//!
//! How a host learns about [`LoadingState`] transitions.
//!
//! The store calls [`LoadingStateObserver::on_state_change`] for every
//! transition, in order, after the new state is published. A host that renders on
//! a dedicated context (a UI thread, an event loop) forwards the state there
//! from this callback.

use crate::product::LoadingState;

// =============================================================================
// Observer Trait
// =============================================================================

/// Trait for receiving loading state transitions (implemented by the host).
///
/// Implementations should return quickly. They may read the same
/// [`ProductStore`](crate::ProductStore) but must not start a fetch on it
/// from inside the callback: the next transition waits for this call.
pub trait LoadingStateObserver: Send + Sync {
    /// Called once per transition with the new state.
    fn on_state_change(&self, state: &LoadingState);
}

/// No-op observer for hosts that only poll or use `subscribe()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl LoadingStateObserver for NoOpObserver {
    fn on_state_change(&self, _state: &LoadingState) {}
}
