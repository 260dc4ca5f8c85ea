mod propulsion_controller;

pub use propulsion_controller::PropulsionController;
