use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Simulation speed multiplier, always within `1..=TimeScale::MAX`.
///
/// The factor shortens each controller's wall-clock sleep *and* stretches the
/// simulated delta applied per tick, so simulated throughput grows with the
/// square of the factor.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize)]
pub struct TimeScale(u32);

impl TimeScale {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    /// Creates a time scale, clamping `factor` into the valid range.
    pub fn new(factor: u32) -> Self { Self(factor.clamp(Self::MIN, Self::MAX)) }

    pub fn factor(self) -> u32 { self.0 }

    pub fn doubled(self) -> Self { Self::new(self.0.saturating_mul(2)) }

    pub fn halved(self) -> Self { Self::new(self.0 / 2) }

    /// Wall-clock time a controller sleeps after a tick of nominal length `period`.
    pub fn sleep_for(self, period: Duration) -> Duration { period / self.0 }

    /// Simulated seconds covered by a tick of nominal length `period`.
    pub fn sim_dt(self, period: Duration) -> f64 { period.as_secs_f64() * f64::from(self.0) }
}

impl Default for TimeScale {
    fn default() -> Self { Self(Self::MIN) }
}

impl Display for TimeScale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}x", self.0) }
}
