use super::{
    mission_phase::{AnomalyReason, MissionPhase},
    time_scale::TimeScale,
    vec3d::Vec3D,
};
use serde::Serialize;

/// Radius of the launch body, used for the launch site position.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The complete physical and logical state of the vehicle.
///
/// A `VehicleState` only ever lives behind a [`StateGuard`](super::StateGuard);
/// controllers receive `&mut VehicleState` while holding exclusive access and must
/// leave it with all invariants restored (see [`VehicleState::invariants_hold`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleState {
    // Kinematics, SI units
    pub position: Vec3D<f64>,
    pub velocity: Vec3D<f64>,
    pub acceleration: Vec3D<f64>,
    pub orientation: Vec3D<f64>,

    // Mission
    pub phase: MissionPhase,
    pub mission_time_s: f64,
    pub anomaly_reason: Option<AnomalyReason>,

    // Propulsion
    pub main_propellant_kg: f64,
    pub rcs_propellant_kg: f64,
    pub main_thrust_n: f64,
    pub rcs_thrust_n: f64,

    // Power
    pub main_energy_wh: f64,
    pub reserve_energy_wh: f64,
    pub power_draw_w: f64,

    // Environment
    pub temperature_c: f64,
    pub pressure_kpa: f64,
    pub radiation_msv_h: f64,

    // Communication
    pub link_active: bool,
    pub signal_strength_db: f64,

    // Control flags
    pub system_active: bool,
    pub anomaly_active: bool,
    pub time_scale: TimeScale,
}

impl VehicleState {
    pub const INITIAL_MAIN_PROPELLANT_KG: f64 = 1_924_000.0;
    pub const INITIAL_RCS_PROPELLANT_KG: f64 = 600.0;
    pub const INITIAL_MAIN_ENERGY_WH: f64 = 30_000.0;
    pub const INITIAL_RESERVE_ENERGY_WH: f64 = 5_000.0;
    pub const NOMINAL_CABIN_PRESSURE_KPA: f64 = 34.5;

    /// Vehicle on the launch pad, fully fuelled and charged.
    pub fn on_launch_pad(time_scale: TimeScale) -> Self {
        Self {
            position: Vec3D::new(0.0, EARTH_RADIUS_M, 0.0),
            velocity: Vec3D::zero(),
            acceleration: Vec3D::zero(),
            orientation: Vec3D::zero(),
            phase: MissionPhase::Preparation,
            mission_time_s: 0.0,
            anomaly_reason: None,
            main_propellant_kg: Self::INITIAL_MAIN_PROPELLANT_KG,
            rcs_propellant_kg: Self::INITIAL_RCS_PROPELLANT_KG,
            main_thrust_n: 0.0,
            rcs_thrust_n: 0.0,
            main_energy_wh: Self::INITIAL_MAIN_ENERGY_WH,
            reserve_energy_wh: Self::INITIAL_RESERVE_ENERGY_WH,
            power_draw_w: 0.0,
            temperature_c: 22.0,
            pressure_kpa: Self::NOMINAL_CABIN_PRESSURE_KPA,
            radiation_msv_h: 0.01,
            link_active: true,
            signal_strength_db: 0.0,
            system_active: true,
            anomaly_active: false,
            time_scale,
        }
    }

    /// Clamps both propellant masses at zero.
    pub fn clamp_propellants(&mut self) {
        self.main_propellant_kg = self.main_propellant_kg.max(0.0);
        self.rcs_propellant_kg = self.rcs_propellant_kg.max(0.0);
    }

    /// Draws `energy_wh` from the main pool, letting the reserve absorb any deficit.
    ///
    /// Both pools are clamped at zero afterwards. Returns `true` if the reserve
    /// could not cover the deficit, i.e. power is exhausted.
    pub fn drain_energy(&mut self, energy_wh: f64) -> bool {
        self.main_energy_wh -= energy_wh;
        if self.main_energy_wh < 0.0 {
            self.reserve_energy_wh += self.main_energy_wh;
            self.main_energy_wh = 0.0;
        }
        if self.reserve_energy_wh < 0.0 {
            self.reserve_energy_wh = 0.0;
            return true;
        }
        false
    }

    pub fn main_engine_active(&self) -> bool { self.main_thrust_n > 0.0 }

    pub fn rcs_active(&self) -> bool { self.rcs_thrust_n > 0.0 }

    /// Checks the invariants every controller restores before releasing the guard.
    pub fn invariants_hold(&self) -> bool {
        let resources_ok = self.main_propellant_kg >= 0.0
            && self.rcs_propellant_kg >= 0.0
            && self.main_energy_wh >= 0.0
            && self.reserve_energy_wh >= 0.0;
        let completion_ok = self.phase != MissionPhase::Completion || !self.system_active;
        let anomaly_ok = (self.phase == MissionPhase::Anomaly) == self.anomaly_active;
        resources_ok && completion_ok && anomaly_ok && self.time_scale.factor() >= TimeScale::MIN
    }
}

impl Default for VehicleState {
    fn default() -> Self { Self::on_launch_pad(TimeScale::default()) }
}
