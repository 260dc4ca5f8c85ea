use crate::flight_control::MissionPhaseMachine;
use crate::vehicle::{AnomalyReason, StateGuard, VehicleState};
use crate::{info, warn};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Operator commands accepted by the flight computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    AdvancePhase,
    Emergency(String),
    Shutdown,
}

impl Command {
    const DEFAULT_EMERGENCY_REASON: &'static str = "manual";

    /// Applies the command. The caller holds the state lock.
    pub fn apply(self, state: &mut VehicleState) {
        match self {
            Command::SpeedUp => {
                state.time_scale = state.time_scale.doubled();
                info!("Time scale set to {}", state.time_scale);
            }
            Command::SlowDown => {
                state.time_scale = state.time_scale.halved();
                info!("Time scale set to {}", state.time_scale);
            }
            Command::AdvancePhase => {
                if MissionPhaseMachine::advance(state).is_none() {
                    warn!("Phase {} cannot be advanced", state.phase);
                }
            }
            Command::Emergency(reason) => {
                if !MissionPhaseMachine::trigger_anomaly(state, AnomalyReason::Manual(reason)) {
                    warn!("Emergency ignored in phase {}", state.phase);
                }
            }
            Command::Shutdown => {
                info!("Shutdown requested at T+{:.1}s", state.mission_time_s);
                state.system_active = false;
            }
        }
    }

    /// Acquires exclusive access and applies the command.
    pub async fn apply_to(self, guard: &StateGuard) { self.apply(&mut *guard.lock().await); }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    Unknown(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::Empty => write!(f, "empty command"),
            CommandParseError::Unknown(word) => write!(f, "unknown command '{word}'"),
        }
    }
}

impl std::error::Error for CommandParseError {}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (word, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        match word.to_lowercase().as_str() {
            "" => Err(CommandParseError::Empty),
            "+" | "faster" => Ok(Command::SpeedUp),
            "-" | "slower" => Ok(Command::SlowDown),
            "n" | "next" => Ok(Command::AdvancePhase),
            "e" | "emergency" => {
                let text = rest.trim();
                let reason = if text.is_empty() { Self::DEFAULT_EMERGENCY_REASON } else { text };
                Ok(Command::Emergency(reason.to_string()))
            }
            "q" | "quit" => Ok(Command::Shutdown),
            _ => Err(CommandParseError::Unknown(word.to_string())),
        }
    }
}
