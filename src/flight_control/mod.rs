mod comm_link;
mod flight_controller;
mod phase_machine;
mod physics;
mod supervisor;

pub use comm_link::CommLink;
pub use flight_controller::FlightController;
pub use phase_machine::MissionPhaseMachine;
pub use physics::PhysicsIntegrator;
pub use supervisor::Supervisor;
