use crate::vehicle::TimeScale;
use async_trait::async_trait;
use std::time::Duration;

/// Outcome of a single controller tick, read after the state lock was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Value of the system-active flag as observed during the tick.
    pub system_active: bool,
    /// Time scale observed during the tick, used to derive the following sleep.
    pub time_scale: TimeScale,
}

impl TickReport {
    pub fn new(system_active: bool, time_scale: TimeScale) -> Self {
        Self { system_active, time_scale }
    }

    /// Report for a tick that found the system already halted.
    pub fn halted(time_scale: TimeScale) -> Self { Self::new(false, time_scale) }
}

/// A subsystem controller driven on its own fixed cadence.
///
/// Implementors acquire the shared state once per tick, perform their whole
/// read-modify-write under that acquisition and release it before returning.
#[async_trait]
pub trait Controller: Send {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Nominal wall-clock tick period at time scale 1.
    fn period(&self) -> Duration;

    /// Runs one update. Must return without mutating anything if the system is halted.
    async fn tick(&mut self) -> TickReport;
}
