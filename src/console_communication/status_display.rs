use crate::config::TelemetryMode;
use crate::vehicle::{StateGuard, VehicleState};
use crate::{error, info, phase};
use chrono::TimeDelta;
use std::time::Duration;

/// Periodically prints snapshots of the vehicle state.
pub struct StatusDisplay {
    guard: StateGuard,
    mode: TelemetryMode,
    period: Duration,
}

impl StatusDisplay {
    pub fn new(guard: StateGuard, mode: TelemetryMode, period: Duration) -> Self {
        Self { guard, mode, period }
    }

    /// Formats mission time as `T+HH:MM:SS`.
    pub fn mission_clock(mission_time_s: f64) -> String {
        #[allow(clippy::cast_possible_truncation)]
        let t = TimeDelta::milliseconds((mission_time_s.max(0.0) * 1000.0) as i64);
        format!("T+{:02}:{:02}:{:02}", t.num_hours(), t.num_minutes() % 60, t.num_seconds() % 60)
    }

    /// One-line text summary of a snapshot.
    pub fn summary(state: &VehicleState) -> String {
        format!(
            "{} {:<12} x{:<3} r {:>10.1} km | v {:>9.1} m/s | main {:>11.1} kg rcs {:>6.1} kg | \
             thrust {:>10.0} N | energy {:>8.1}+{:>7.1} Wh @ {:>5.0} W | {:>5.1} C {:>5.3} mSv/h | link {} {:>7.1} dBW",
            Self::mission_clock(state.mission_time_s),
            state.phase.to_string(),
            state.time_scale.factor(),
            state.position.abs() / 1000.0,
            state.velocity.abs(),
            state.main_propellant_kg,
            state.rcs_propellant_kg,
            state.main_thrust_n + state.rcs_thrust_n,
            state.main_energy_wh,
            state.reserve_energy_wh,
            state.power_draw_w,
            state.temperature_c,
            state.radiation_msv_h,
            if state.link_active { "up" } else { "down" },
            state.signal_strength_db,
        )
    }

    fn print(&self, state: &VehicleState) {
        match self.mode {
            TelemetryMode::Text => info!("{}", Self::summary(state)),
            TelemetryMode::Json => match serde_json::to_string(state) {
                Ok(line) => println!("{line}"),
                Err(e) => error!("Failed to serialize snapshot: {e}"),
            },
        }
    }

    /// Prints a snapshot every period until the system halts, then prints the final state.
    pub async fn run(self) {
        let mut anomaly_reported = false;
        let mut interval = tokio::time::interval(self.period);
        loop {
            interval.tick().await;
            let snapshot = self.guard.snapshot().await;
            if let (false, Some(reason)) = (anomaly_reported, &snapshot.anomaly_reason) {
                phase!("Vehicle in ANOMALY: {reason}");
                anomaly_reported = true;
            }
            self.print(&snapshot);
            if !snapshot.system_active {
                break;
            }
        }
    }
}
