use crate::vehicle::TimeScale;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{Display as StrumDisplay, EnumString};

/// Tuning of the flight controller.
#[derive(Debug, Clone, Copy)]
pub struct FlightConfig {
    pub period: Duration,
    /// Simulated seconds spent in each phase before the next automatic advance.
    pub phase_interval_s: f64,
    /// Cabin temperature above which the thermal anomaly is raised.
    pub thermal_limit_c: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self { period: Duration::from_millis(100), phase_interval_s: 30.0, thermal_limit_c: 50.0 }
    }
}

/// Tuning of the propulsion controller. Thrust in N, rates in kg/s.
#[derive(Debug, Clone, Copy)]
pub struct PropulsionConfig {
    pub period: Duration,
    pub launch_thrust_n: f64,
    pub launch_burn_rate: f64,
    pub dry_mass_kg: f64,
    /// Main propellant load at liftoff, reference for the consumed mass.
    pub initial_propellant_kg: f64,
    pub standard_gravity: f64,
    pub rcs_thrust_n: f64,
    pub rcs_fire_probability: f64,
    pub rcs_burn_rate: f64,
    pub descent_thrust_n: f64,
    pub descent_burn_rate: f64,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(100),
            launch_thrust_n: 34_020_000.0,
            launch_burn_rate: 12_890.0,
            dry_mass_kg: 1_046_000.0,
            initial_propellant_kg: 1_924_000.0,
            standard_gravity: 9.81,
            rcs_thrust_n: 445.0,
            rcs_fire_probability: 0.1,
            rcs_burn_rate: 0.5,
            descent_thrust_n: 45_040.0,
            descent_burn_rate: 14.7,
        }
    }
}

/// Tuning of the power and environment controller. Loads in W.
#[derive(Debug, Clone, Copy)]
pub struct PowerConfig {
    pub period: Duration,
    pub base_load_w: f64,
    pub propulsion_load_w: f64,
    pub rcs_load_w: f64,
    pub avionics_load_w: f64,
    pub life_support_load_w: f64,
    pub thermal_control_load_w: f64,
    /// Maximum random temperature change per tick in °C.
    pub thermal_drift_c: f64,
    pub thermal_gain: f64,
    pub target_band_c: (f64, f64),
    pub radiation_deep_space: (f64, f64),
    pub radiation_near_earth: (f64, f64),
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(100),
            base_load_w: 1_500.0,
            propulsion_load_w: 2_500.0,
            rcs_load_w: 400.0,
            avionics_load_w: 800.0,
            life_support_load_w: 1_200.0,
            thermal_control_load_w: 300.0,
            thermal_drift_c: 0.5,
            thermal_gain: 0.1,
            target_band_c: (20.0, 24.0),
            radiation_deep_space: (0.5, 1.5),
            radiation_near_earth: (0.01, 0.05),
        }
    }
}

/// Output format of the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TelemetryMode {
    #[default]
    Text,
    Json,
}

/// Complete configuration of a simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub flight: FlightConfig,
    pub propulsion: PropulsionConfig,
    pub power: PowerConfig,
    pub time_scale: TimeScale,
    /// Base seed from which every controller derives its own generator.
    pub seed: u64,
    pub telemetry: TelemetryMode,
    pub status_period: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            propulsion: PropulsionConfig::default(),
            power: PowerConfig::default(),
            time_scale: TimeScale::default(),
            seed: 0x0A90_1969,
            telemetry: TelemetryMode::default(),
            status_period: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    ZeroPeriod { key: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => write!(f, "invalid value '{value}' for {key}"),
            ConfigError::ZeroPeriod { key } => write!(f, "{key} must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Builds the configuration from defaults, a `.env` file and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // a missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from defaults overridden by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let mut config = Self::default();
        if let Some(p) = parse_period(&lookup, "AGC_FLIGHT_PERIOD_MS")? {
            config.flight.period = p;
        }
        if let Some(p) = parse_period(&lookup, "AGC_PROPULSION_PERIOD_MS")? {
            config.propulsion.period = p;
        }
        if let Some(p) = parse_period(&lookup, "AGC_POWER_PERIOD_MS")? {
            config.power.period = p;
        }
        if let Some(p) = parse_period(&lookup, "AGC_STATUS_PERIOD_MS")? {
            config.status_period = p;
        }
        if let Some(interval) = parse::<f64, _>(&lookup, "AGC_PHASE_INTERVAL_S")? {
            if interval <= 0.0 {
                return Err(ConfigError::ZeroPeriod { key: "AGC_PHASE_INTERVAL_S" });
            }
            config.flight.phase_interval_s = interval;
        }
        if let Some(factor) = parse::<u32, _>(&lookup, "AGC_TIME_SCALE")? {
            config.time_scale = TimeScale::new(factor);
        }
        if let Some(seed) = parse(&lookup, "AGC_SEED")? {
            config.seed = seed;
        }
        if let Some(mode) = parse(&lookup, "AGC_TELEMETRY")? {
            config.telemetry = mode;
        }
        Ok(config)
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_period<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where F: Fn(&str) -> Option<String> {
    match parse::<u64, _>(lookup, key)? {
        Some(0) => Err(ConfigError::ZeroPeriod { key }),
        other => Ok(other.map(Duration::from_millis)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SimConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.flight.period, Duration::from_millis(100));
        assert_eq!(config.propulsion.period, Duration::from_millis(100));
        assert_eq!(config.power.period, Duration::from_millis(100));
        assert_eq!(config.flight.phase_interval_s, 30.0);
        assert_eq!(config.time_scale.factor(), 1);
        assert_eq!(config.telemetry, TelemetryMode::Text);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SimConfig::from_lookup(lookup_from(&[
            ("AGC_FLIGHT_PERIOD_MS", "50"),
            ("AGC_POWER_PERIOD_MS", " 200 "),
            ("AGC_PHASE_INTERVAL_S", "5.5"),
            ("AGC_TIME_SCALE", "250"),
            ("AGC_SEED", "42"),
            ("AGC_TELEMETRY", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.flight.period, Duration::from_millis(50));
        assert_eq!(config.power.period, Duration::from_millis(200));
        assert_eq!(config.flight.phase_interval_s, 5.5);
        assert_eq!(config.time_scale.factor(), TimeScale::MAX);
        assert_eq!(config.seed, 42);
        assert_eq!(config.telemetry, TelemetryMode::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SimConfig::from_lookup(lookup_from(&[("AGC_SEED", "apollo")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue { key: "AGC_SEED", value: "apollo".into() });

        let err =
            SimConfig::from_lookup(lookup_from(&[("AGC_PROPULSION_PERIOD_MS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPeriod { key: "AGC_PROPULSION_PERIOD_MS" });
        assert_eq!(err.to_string(), "AGC_PROPULSION_PERIOD_MS must be greater than zero");

        let err = SimConfig::from_lookup(lookup_from(&[("AGC_PHASE_INTERVAL_S", "-1")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroPeriod { key: "AGC_PHASE_INTERVAL_S" });
    }
}
