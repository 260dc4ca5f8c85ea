#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod console_communication;
mod flight_control;
mod logger;
mod power;
mod propulsion;
mod scheduling;
mod vehicle;

use crate::config::SimConfig;
use crate::console_communication::{ConsoleEndpoint, StatusDisplay};
use crate::flight_control::Supervisor;
use crate::vehicle::{StateGuard, VehicleState};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = SimConfig::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e}"));
    info!(
        "Starting flight computer simulation (seed {:#x}, time scale {})",
        config.seed, config.time_scale
    );

    let guard = StateGuard::new(VehicleState::on_launch_pad(config.time_scale));
    let supervisor = Supervisor::start(&guard, &config);

    let display = StatusDisplay::new(guard.clone(), config.telemetry, config.status_period);
    let display_handle = tokio::spawn(display.run());
    let console = ConsoleEndpoint::new(guard.clone());
    tokio::spawn(console.run(ConsoleEndpoint::spawn_stdin_reader()));

    for (name, ticks) in supervisor.join().await {
        log!("{name} controller ran {ticks} ticks");
    }
    if let Err(e) = display_handle.await {
        error!("Status display failed: {e}");
    }

    let final_state = guard.snapshot().await;
    match &final_state.anomaly_reason {
        Some(reason) => phase!(
            "Mission ended in ANOMALY ({reason}) at {}",
            StatusDisplay::mission_clock(final_state.mission_time_s)
        ),
        None => info!(
            "Mission ended in {} at {}",
            final_state.phase,
            StatusDisplay::mission_clock(final_state.mission_time_s)
        ),
    }
}
