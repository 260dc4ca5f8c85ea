use crate::config::PropulsionConfig;
use crate::scheduling::{Controller, TickReport};
use crate::vehicle::{MissionPhase, StateGuard, VehicleState};
use crate::event;
use async_trait::async_trait;
use rand::{Rng, rngs::StdRng};
use std::time::Duration;

/// Periodic engine and attitude thruster task.
pub struct PropulsionController {
    guard: StateGuard,
    config: PropulsionConfig,
    rng: StdRng,
}

impl PropulsionController {
    pub fn new(guard: StateGuard, config: PropulsionConfig, rng: StdRng) -> Self {
        Self { guard, config, rng }
    }

    /// Vehicle mass with the current main propellant load.
    pub fn vehicle_mass_kg(&self, state: &VehicleState) -> f64 {
        let consumed = self.config.initial_propellant_kg - state.main_propellant_kg;
        self.config.dry_mass_kg + self.config.initial_propellant_kg - consumed
    }

    /// Sets thrust and burns propellant for `dt` simulated seconds according to
    /// the current phase. The caller holds the state lock.
    pub fn step(&mut self, state: &mut VehicleState, dt: f64) {
        let cfg = self.config;
        match state.phase {
            MissionPhase::Launch => {
                state.main_thrust_n = cfg.launch_thrust_n;
                state.rcs_thrust_n = 0.0;
                state.main_propellant_kg = (state.main_propellant_kg - cfg.launch_burn_rate * dt).max(0.0);
                let mass = self.vehicle_mass_kg(state);
                state.acceleration.set_y(state.main_thrust_n / mass - cfg.standard_gravity);
            }
            phase if phase.is_rcs_coast() => {
                state.main_thrust_n = 0.0;
                if self.rng.random_bool(cfg.rcs_fire_probability) {
                    state.rcs_thrust_n = cfg.rcs_thrust_n;
                    state.rcs_propellant_kg -= cfg.rcs_burn_rate * dt;
                    event!("RCS correction burn in {phase}");
                } else {
                    state.rcs_thrust_n = 0.0;
                }
            }
            MissionPhase::LunarDescent => {
                state.main_thrust_n = cfg.descent_thrust_n;
                state.rcs_thrust_n = 0.0;
                state.main_propellant_kg -= cfg.descent_burn_rate * dt;
            }
            _ => {
                state.main_thrust_n = 0.0;
                state.rcs_thrust_n = 0.0;
            }
        }
        state.clamp_propellants();
    }
}

#[async_trait]
impl Controller for PropulsionController {
    fn name(&self) -> &'static str { "propulsion" }

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
