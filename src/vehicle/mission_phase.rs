use serde::Serialize;
use std::fmt::{Display, Formatter};
use strum_macros::{Display as StrumDisplay, EnumIter};

/// Stages of the mission in flight order, followed by the absorbing `Anomaly` phase.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, StrumDisplay, Serialize)]
pub enum MissionPhase {
    Preparation,
    Launch,
    EarthOrbit,
    LunarTransit,
    LunarOrbit,
    LunarDescent,
    LunarSurface,
    EarthReturn,
    Reentry,
    Splashdown,
    Completion,
    Anomaly,
}

impl MissionPhase {
    /// Position of the phase in the nominal flight sequence. `Anomaly` sorts last.
    pub fn index(self) -> usize { self as usize }

    /// The phase following `self` in the nominal sequence.
    /// `Completion` and `Anomaly` map onto themselves.
    pub fn successor(self) -> Self {
        match self {
            MissionPhase::Preparation => MissionPhase::Launch,
            MissionPhase::Launch => MissionPhase::EarthOrbit,
            MissionPhase::EarthOrbit => MissionPhase::LunarTransit,
            MissionPhase::LunarTransit => MissionPhase::LunarOrbit,
            MissionPhase::LunarOrbit => MissionPhase::LunarDescent,
            MissionPhase::LunarDescent => MissionPhase::LunarSurface,
            MissionPhase::LunarSurface => MissionPhase::EarthReturn,
            MissionPhase::EarthReturn => MissionPhase::Reentry,
            MissionPhase::Reentry => MissionPhase::Splashdown,
            MissionPhase::Splashdown | MissionPhase::Completion => MissionPhase::Completion,
            MissionPhase::Anomaly => MissionPhase::Anomaly,
        }
    }

    /// Whether the phase stops forward progression.
    pub fn is_terminal(self) -> bool { matches!(self, MissionPhase::Completion | MissionPhase::Anomaly) }

    /// Phases spent beyond the Van Allen belts.
    pub fn is_deep_space(self) -> bool {
        matches!(
            self,
            MissionPhase::LunarTransit
                | MissionPhase::LunarOrbit
                | MissionPhase::LunarDescent
                | MissionPhase::LunarSurface
                | MissionPhase::EarthReturn
        )
    }

    /// Coast phases in which the attitude thrusters may fire.
    pub fn is_rcs_coast(self) -> bool {
        matches!(
            self,
            MissionPhase::EarthOrbit
                | MissionPhase::LunarTransit
                | MissionPhase::LunarOrbit
                | MissionPhase::EarthReturn
        )
    }

    /// Phases that fail the mission when main propellant runs out.
    pub fn needs_main_propellant(self) -> bool {
        matches!(self, MissionPhase::Launch | MissionPhase::LunarTransit)
    }
}

/// Cause recorded when the vehicle enters `MissionPhase::Anomaly`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum AnomalyReason {
    Thermal,
    PropellantDepletion,
    PowerExhausted,
    Manual(String),
}

impl Display for AnomalyReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalyReason::Thermal => write!(f, "thermal"),
            AnomalyReason::PropellantDepletion => write!(f, "propellant depletion"),
            AnomalyReason::PowerExhausted => write!(f, "power exhausted"),
            AnomalyReason::Manual(reason) => write!(f, "{reason}"),
        }
    }
}
