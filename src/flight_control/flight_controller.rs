use super::{CommLink, MissionPhaseMachine, PhysicsIntegrator};
use crate::config::FlightConfig;
use crate::scheduling::{Controller, TickReport};
use crate::vehicle::{AnomalyReason, MissionPhase, StateGuard, VehicleState};
use async_trait::async_trait;
use std::time::Duration;

/// Periodic trajectory, safety and mission sequencing task.
pub struct FlightController {
    guard: StateGuard,
    config: FlightConfig,
    link: CommLink,
    /// Simulated seconds left until the next automatic phase advance.
    phase_countdown_s: f64,
}

impl FlightController {
    pub fn new(guard: StateGuard, config: FlightConfig) -> Self {
        Self { guard, config, link: CommLink::default(), phase_countdown_s: config.phase_interval_s }
    }

    pub fn phase_countdown_s(&self) -> f64 { self.phase_countdown_s }

    /// One full update over `dt` simulated seconds. The caller holds the state lock.
    pub fn step(&mut self, state: &mut VehicleState, dt: f64) {
        PhysicsIntegrator::integrate(state, dt);
        self.link.update(state);
        Self::safety_check(state, self.config.thermal_limit_c);

        self.phase_countdown_s -= dt;
        if self.phase_countdown_s <= 0.0 && !state.phase.is_terminal() {
            MissionPhaseMachine::advance(state);
            self.phase_countdown_s = self.config.phase_interval_s;
        }
    }

    /// Raises an anomaly on thermal excursion or main propellant depletion
    /// during a phase that needs it. Returns the reason if one was raised.
    pub fn safety_check(state: &mut VehicleState, thermal_limit_c: f64) -> Option<AnomalyReason> {
        if state.phase == MissionPhase::Anomaly {
            return None;
        }
        let reason = if state.temperature_c > thermal_limit_c {
            AnomalyReason::Thermal
        } else if state.main_propellant_kg <= 0.0 && state.phase.needs_main_propellant() {
            AnomalyReason::PropellantDepletion
        } else {
            return None;
        };
        MissionPhaseMachine::trigger_anomaly(state, reason.clone()).then_some(reason)
    }
}

#[async_trait]
impl Controller for FlightController {
    fn name(&self) -> &'static str { "flight" }

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
