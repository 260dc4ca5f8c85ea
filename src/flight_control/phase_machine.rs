use crate::phase;
use crate::vehicle::{AnomalyReason, MissionPhase, VehicleState};

/// The mission phase state machine.
///
/// These two functions are the only code paths that change
/// `VehicleState::phase`. Both expect the caller to hold exclusive access.
pub struct MissionPhaseMachine;

impl MissionPhaseMachine {
    /// Moves the mission one step along the nominal sequence.
    ///
    /// Entering `Completion` halts the system. `Completion` and `Anomaly` are
    /// self-loops. Returns the new phase if a transition happened.
    pub fn advance(state: &mut VehicleState) -> Option<MissionPhase> {
        let from = state.phase;
        let to = from.successor();
        if to == from {
            return None;
        }
        state.phase = to;
        if to == MissionPhase::Completion {
            state.system_active = false;
        }
        phase!("T+{:.1}s: {from} -> {to}", state.mission_time_s);
        Some(to)
    }

    /// Puts the vehicle into the absorbing `Anomaly` phase.
    ///
    /// Has no effect if the vehicle is already in `Anomaly` (the first recorded
    /// reason is kept) or the mission has completed. Returns whether the anomaly
    /// was newly raised.
    pub fn trigger_anomaly(state: &mut VehicleState, reason: AnomalyReason) -> bool {
        if state.phase.is_terminal() {
            return false;
        }
        phase!(
            "T+{:.1}s: ANOMALY during {} ({reason})",
            state.mission_time_s,
            state.phase
        );
        state.phase = MissionPhase::Anomaly;
        state.anomaly_active = true;
        state.anomaly_reason = Some(reason);
        true
    }
}
