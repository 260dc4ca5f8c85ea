use super::vehicle_state::VehicleState;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Exclusive-access handle to the shared [`VehicleState`].
///
/// Cloning the guard clones the handle, not the state. Every read and every
/// read-modify-write goes through [`StateGuard::lock`]; callers must drop the
/// returned lock before any timed suspension.
#[derive(Clone, Debug)]
pub struct StateGuard {
    state: Arc<Mutex<VehicleState>>,
}

impl StateGuard {
    pub fn new(state: VehicleState) -> Self { Self { state: Arc::new(Mutex::new(state)) } }

    /// Waits for exclusive access to the vehicle state.
    pub async fn lock(&self) -> MutexGuard<'_, VehicleState> { self.state.lock().await }

    /// Takes a consistent copy of the whole state.
    pub async fn snapshot(&self) -> VehicleState { self.state.lock().await.clone() }

    /// Whether the controllers should keep ticking.
    pub async fn is_active(&self) -> bool { self.state.lock().await.system_active }
}
