use std::sync::Arc;

use tokio::sync::Mutex;
use ts_core::registration::RegistrationState;

/// Registration wizard state plus the lock that serializes dispatches.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole dispatch (transition + actions).
/// - `state`: short reads and writes.
pub(crate) struct RegistrationContext {
    state: Mutex<RegistrationState>,
    dispatch_lock: Mutex<()>,
}

impl RegistrationContext {
    pub(crate) fn new(initial_state: RegistrationState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the current state. Does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> RegistrationState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub(crate) async fn set_state(&self, state: RegistrationState) {
        *self.state.lock().await = state;
    }
}
