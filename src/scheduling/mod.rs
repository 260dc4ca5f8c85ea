mod controller;
mod periodic_task;

pub use controller::{Controller, TickReport};
pub use periodic_task::run_periodic;
