mod mission_phase;
mod state_guard;
mod time_scale;
mod vec3d;
mod vehicle_state;
#[cfg(test)]
mod tests;

pub use mission_phase::{AnomalyReason, MissionPhase};
pub use state_guard::StateGuard;
pub use time_scale::TimeScale;
pub use vec3d::Vec3D;
pub use vehicle_state::{EARTH_RADIUS_M, VehicleState};
