mod power_controller;

pub use power_controller::PowerController;
