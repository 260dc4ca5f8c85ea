use crate::vehicle::{Vec3D, VehicleState};

/// Explicit Euler integrator with a single central gravity source at the origin.
pub struct PhysicsIntegrator;

impl PhysicsIntegrator {
    /// Gravitational constant in m³/(kg·s²).
    pub const G: f64 = 6.674_30e-11;
    /// Mass of the central body in kg.
    pub const CENTRAL_MASS_KG: f64 = 5.972e24;

    /// Advances kinematics and mission time by `dt` seconds.
    ///
    /// Position uses the pre-update velocity and velocity the pre-update
    /// acceleration. The acceleration is then replaced by the gravitational
    /// pull at the new position.
    pub fn integrate(state: &mut VehicleState, dt: f64) {
        let velocity = state.velocity;
        let acceleration = state.acceleration;
        state.position += velocity * dt;
        state.velocity += acceleration * dt;
        if let Some(gravity) = Self::gravity_at(state.position) {
            state.acceleration = gravity;
        }
        state.mission_time_s += dt;
    }

    /// Gravitational acceleration at `position`, pointing towards the origin.
    /// Returns `None` at the origin itself.
    pub fn gravity_at(position: Vec3D<f64>) -> Option<Vec3D<f64>> {
        let r = position.abs();
        if r == 0.0 {
            return None;
        }
        let magnitude = Self::G * Self::CENTRAL_MASS_KG / (r * r);
        Some(-position * (magnitude / r))
    }
}
