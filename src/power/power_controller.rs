use crate::config::PowerConfig;
use crate::flight_control::MissionPhaseMachine;
use crate::scheduling::{Controller, TickReport};
use crate::vehicle::{AnomalyReason, MissionPhase, StateGuard, VehicleState};
use crate::event;
use async_trait::async_trait;
use rand::{Rng, rngs::StdRng};
use std::time::Duration;

/// Periodic electrical power, thermal and radiation task.
pub struct PowerController {
    guard: StateGuard,
    config: PowerConfig,
    rng: StdRng,
}

impl PowerController {
    pub fn new(guard: StateGuard, config: PowerConfig, rng: StdRng) -> Self {
        Self { guard, config, rng }
    }

    /// Sum of all electrical loads for the current actuator state, excluding thermal control.
    pub fn subsystem_load_w(&self, state: &VehicleState) -> f64 {
        let cfg = &self.config;
        let mut load = cfg.base_load_w + cfg.avionics_load_w + cfg.life_support_load_w;
        if state.main_engine_active() {
            load += cfg.propulsion_load_w;
        }
        if state.rcs_active() {
            load += cfg.rcs_load_w;
        }
        load
    }

    /// Applies random drift and a proportional correction towards the target band.
    /// Returns the extra electrical load spent on correcting.
    fn regulate_temperature(&mut self, state: &mut VehicleState) -> f64 {
        let drift = self.config.thermal_drift_c;
        state.temperature_c += self.rng.random_range(-drift..=drift);

        let (low, high) = self.config.target_band_c;
        let error = if state.temperature_c > high {
            high - state.temperature_c
        } else if state.temperature_c < low {
            low - state.temperature_c
        } else {
            return 0.0;
        };
        state.temperature_c += self.config.thermal_gain * error;
        self.config.thermal_control_load_w
    }

    fn update_radiation(&mut self, state: &mut VehicleState) {
        let (low, high) = if state.phase.is_deep_space() {
            self.config.radiation_deep_space
        } else {
            self.config.radiation_near_earth
        };
        state.radiation_msv_h = self.rng.random_range(low..high);
    }

    /// Updates loads, energy pools and environment over `dt` simulated seconds.
    /// The caller holds the state lock.
    pub fn step(&mut self, state: &mut VehicleState, dt: f64) {
        let thermal_load = self.regulate_temperature(state);
        state.power_draw_w = self.subsystem_load_w(state) + thermal_load;

        let consumed_wh = state.power_draw_w * dt / 3600.0;
        let exhausted = state.drain_energy(consumed_wh);
        if exhausted && state.phase != MissionPhase::Anomaly {
            MissionPhaseMachine::trigger_anomaly(state, AnomalyReason::PowerExhausted);
        }
        event!(
            "Power draw {:.0} W, main {:.2} Wh, reserve {:.2} Wh",
            state.power_draw_w,
            state.main_energy_wh,
            state.reserve_energy_wh
        );

        self.update_radiation(state);
    }
}

#[async_trait]
impl Controller for PowerController {
    fn name(&self) -> &'static str { "power" }

    fn period(&self) -> Duration { self.config.period }

    async fn tick(&mut self) -> TickReport {
        let guard = self.guard.clone();
        let mut state = guard.lock().await;
        if !state.system_active {
            return TickReport::halted(state.time_scale);
        }
        let time_scale = state.time_scale;
        self.step(&mut state, time_scale.sim_dt(self.config.period));
        debug_assert!(state.invariants_hold());
        TickReport::new(state.system_active, time_scale)
    }
}
