use crate::vehicle::{EARTH_RADIUS_M, MissionPhase, VehicleState};
use std::f64::consts::PI;

/// Unified S-band downlink between the vehicle and a ground dish at the origin.
#[derive(Debug, Clone, Copy)]
pub struct CommLink {
    pub tx_power_dbw: f64,
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub frequency_hz: f64,
    /// Minimum received power for a usable link.
    pub threshold_dbw: f64,
}

const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

impl Default for CommLink {
    fn default() -> Self {
        Self {
            tx_power_dbw: 13.0,
            tx_gain_dbi: 20.0,
            rx_gain_dbi: 62.0,
            frequency_hz: 2.287e9,
            threshold_dbw: -150.0,
        }
    }
}

impl CommLink {
    /// Friis free-space path loss over `distance_m`.
    pub fn path_loss_db(&self, distance_m: f64) -> f64 {
        20.0 * (4.0 * PI * distance_m * self.frequency_hz / SPEED_OF_LIGHT_M_S).log10()
    }

    /// Received power at the ground station for a vehicle `distance_m` from the origin.
    pub fn received_power_dbw(&self, distance_m: f64) -> f64 {
        // never closer than the ground station itself
        let d = distance_m.max(EARTH_RADIUS_M);
        self.tx_power_dbw + self.tx_gain_dbi + self.rx_gain_dbi - self.path_loss_db(d)
    }

    /// Refreshes signal strength and link status from the current position and phase.
    pub fn update(&self, state: &mut VehicleState) {
        let signal = self.received_power_dbw(state.position.abs());
        state.signal_strength_db = signal;
        // plasma sheath during reentry blocks the downlink
        state.link_active = signal >= self.threshold_dbw && state.phase != MissionPhase::Reentry;
    }
}
