use super::flight_controller::FlightController;
use crate::config::SimConfig;
use crate::power::PowerController;
use crate::propulsion::PropulsionController;
use crate::scheduling::{Controller, run_periodic};
use crate::vehicle::StateGuard;
use crate::{error, info};
use futures::future::join_all;
use rand::{SeedableRng, rngs::StdRng};
use tokio::task::JoinHandle;

/// Owns the controller tasks of one simulation run.
pub struct Supervisor {
    handles: Vec<(&'static str, JoinHandle<u64>)>,
}

impl Supervisor {
    /// Seed offsets so each controller draws from its own stream.
    const PROPULSION_STREAM: u64 = 0x5052_4f50;
    const POWER_STREAM: u64 = 0x504f_5752;

    /// Builds the three subsystem controllers for `guard`.
    pub fn controllers(guard: &StateGuard, config: &SimConfig) -> Vec<Box<dyn Controller>> {
        vec![
            Box::new(FlightController::new(guard.clone(), config.flight)),
            Box::new(PropulsionController::new(
                guard.clone(),
                config.propulsion,
                StdRng::seed_from_u64(config.seed ^ Self::PROPULSION_STREAM),
            )),
            Box::new(PowerController::new(
                guard.clone(),
                config.power,
                StdRng::seed_from_u64(config.seed ^ Self::POWER_STREAM),
            )),
        ]
    }

    /// Spawns every controller onto the runtime.
    pub fn start(guard: &StateGuard, config: &SimConfig) -> Self {
        let handles = Self::controllers(guard, config)
            .into_iter()
            .map(|controller| (controller.name(), tokio::spawn(run_periodic(controller))))
            .collect();
        Self { handles }
    }

    /// Waits until every controller has observed the halt. Returns the tick
    /// count per controller; a panicked controller is logged and omitted.
    pub async fn join(self) -> Vec<(&'static str, u64)> {
        let (names, handles): (Vec<_>, Vec<_>) = self.handles.into_iter().unzip();
        let results = join_all(handles).await;
        let mut ticks = Vec::with_capacity(names.len());
        for (name, result) in names.into_iter().zip(results) {
            match result {
                Ok(count) => ticks.push((name, count)),
                Err(e) => error!("{name} controller task failed: {e}"),
            }
        }
        info!("All controllers halted");
        ticks
    }
}
