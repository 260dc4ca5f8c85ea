use super::controller::Controller;
use crate::{event, info};

/// Drives `controller` until it reports the system as halted.
///
/// Each iteration ticks the controller and then sleeps for the nominal period
/// divided by the time scale observed during that tick. Returns the number of
/// ticks that performed an update.
pub async fn run_periodic(mut controller: Box<dyn Controller>) -> u64 {
    let name = controller.name();
    info!("Starting {name} controller, period {:?}", controller.period());
    let mut ticks = 0u64;
    loop {
        let report = controller.tick().await;
        if !report.system_active {
            break;
        }
        ticks += 1;
        let nap = report.time_scale.sleep_for(controller.period());
        event!("{name} tick {ticks} done, sleeping {nap:?}");
        tokio::time::sleep(nap).await;
    }
    info!("{name} controller halted after {ticks} ticks");
    ticks
}
