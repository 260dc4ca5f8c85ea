use super::{Command, CommandParseError, ConsoleEndpoint, StatusDisplay};
use crate::vehicle::{AnomalyReason, MissionPhase, StateGuard, TimeScale, VehicleState};
use tokio::sync::mpsc;

#[test]
fn test_parse_commands() {
    assert_eq!("+".parse(), Ok(Command::SpeedUp));
    assert_eq!(" Faster \n".parse(), Ok(Command::SpeedUp));
    assert_eq!("-".parse(), Ok(Command::SlowDown));
    assert_eq!("slower".parse(), Ok(Command::SlowDown));
    assert_eq!("n".parse(), Ok(Command::AdvancePhase));
    assert_eq!("NEXT".parse(), Ok(Command::AdvancePhase));
    assert_eq!("q".parse(), Ok(Command::Shutdown));
    assert_eq!("quit".parse(), Ok(Command::Shutdown));
    assert_eq!("e".parse(), Ok(Command::Emergency("manual".to_string())));
    assert_eq!(
        "emergency  fire in cabin ".parse(),
        Ok(Command::Emergency("fire in cabin".to_string()))
    );
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!("".parse::<Command>(), Err(CommandParseError::Empty));
    assert_eq!("   ".parse::<Command>(), Err(CommandParseError::Empty));
    assert_eq!("abort now".parse::<Command>(), Err(CommandParseError::Unknown("abort".to_string())));
    assert_eq!(
        CommandParseError::Unknown("x".to_string()).to_string(),
        "unknown command 'x'"
    );
}

#[test]
fn test_time_scale_commands_are_bounded() {
    let mut state = VehicleState::default();
    Command::SlowDown.apply(&mut state);
    assert_eq!(state.time_scale, TimeScale::new(1));

    for expected in [2, 4, 8, 16, 32, 64, 100, 100] {
        Command::SpeedUp.apply(&mut state);
        assert_eq!(state.time_scale.factor(), expected);
    }
    Command::SlowDown.apply(&mut state);
    assert_eq!(state.time_scale.factor(), 50);
}

#[test]
fn test_advance_and_emergency_commands() {
    let mut state = VehicleState::default();
    Command::AdvancePhase.apply(&mut state);
    assert_eq!(state.phase, MissionPhase::Launch);

    Command::Emergency("manual".to_string()).apply(&mut state);
    assert_eq!(state.phase, MissionPhase::Anomaly);
    assert!(state.anomaly_active);
    assert_eq!(state.anomaly_reason, Some(AnomalyReason::Manual("manual".to_string())));
    assert!(state.system_active);

    // anomaly is absorbing
    Command::AdvancePhase.apply(&mut state);
    Command::Emergency("second".to_string()).apply(&mut state);
    assert_eq!(state.phase, MissionPhase::Anomaly);
    assert_eq!(state.anomaly_reason, Some(AnomalyReason::Manual("manual".to_string())));
}

#[test]
fn test_emergency_ignored_after_completion() {
    let mut state = VehicleState::default();
    state.phase = MissionPhase::Splashdown;
    Command::AdvancePhase.apply(&mut state);
    assert_eq!(state.phase, MissionPhase::Completion);
    assert!(!state.system_active);

    Command::Emergency("late".to_string()).apply(&mut state);
    assert_eq!(state.phase, MissionPhase::Completion);
    assert!(!state.anomaly_active);
    assert!(state.invariants_hold());
}

#[tokio::test]
async fn test_shutdown_command_halts() {
    let guard = StateGuard::new(VehicleState::default());
    Command::Shutdown.apply_to(&guard).await;
    assert!(!guard.is_active().await);
}

#[tokio::test]
async fn test_console_endpoint_applies_lines() {
    let guard = StateGuard::new(VehicleState::default());
    let (tx, rx) = mpsc::channel(8);
    for line in ["+", "bogus", "", "e fire in cabin", "q", "+"] {
        tx.send(line.to_string()).await.unwrap();
    }

    ConsoleEndpoint::new(guard.clone()).run(rx).await;

    let state = guard.snapshot().await;
    // the trailing "+" is never read because "q" halted the system
    assert_eq!(state.time_scale.factor(), 2);
    assert_eq!(state.anomaly_reason, Some(AnomalyReason::Manual("fire in cabin".to_string())));
    assert!(!state.system_active);
}

#[tokio::test]
async fn test_console_endpoint_ends_when_input_closes() {
    let guard = StateGuard::new(VehicleState::default());
    let (tx, rx) = mpsc::channel(8);
    tx.send("n".to_string()).await.unwrap();
    drop(tx);

    ConsoleEndpoint::new(guard.clone()).run(rx).await;

    let state = guard.snapshot().await;
    assert_eq!(state.phase, MissionPhase::Launch);
    assert!(state.system_active);
}

#[test]
fn test_mission_clock_format() {
    assert_eq!(StatusDisplay::mission_clock(0.0), "T+00:00:00");
    assert_eq!(StatusDisplay::mission_clock(3723.5), "T+01:02:03");
    assert_eq!(StatusDisplay::mission_clock(-5.0), "T+00:00:00");
    assert_eq!(StatusDisplay::mission_clock(100.0 * 3600.0), "T+100:00:00");
}

#[test]
fn test_snapshot_rendering() {
    let mut state = VehicleState::default();
    state.phase = MissionPhase::LunarTransit;
    state.mission_time_s = 61.0;
    let line = StatusDisplay::summary(&state);
    assert!(line.starts_with("T+00:01:01"));
    assert!(line.contains("LunarTransit"));
    assert!(line.contains("link up"));

    let json = serde_json::to_string(&VehicleState::default()).unwrap();
    assert!(json.contains("\"phase\":\"Preparation\""));
    assert!(json.contains("\"system_active\":true"));
    assert!(json.contains("\"time_scale\":1"));
}
