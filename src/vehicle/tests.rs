use super::{MissionPhase, StateGuard, TimeScale, Vec3D, VehicleState};
use std::time::Duration;
use strum::IntoEnumIterator;

#[test]
fn test_vec3d_arithmetic() {
    let a = Vec3D::new(3.0, 4.0, 12.0);
    let b = Vec3D::new(1.0, -1.0, 0.5);
    assert_eq!(a.abs(), 13.0);
    assert_eq!(a + b, Vec3D::new(4.0, 3.0, 12.5));
    assert_eq!(a - b, Vec3D::new(2.0, 5.0, 11.5));
    assert_eq!(a * 2.0, Vec3D::new(6.0, 8.0, 24.0));
    assert_eq!(-b, Vec3D::new(-1.0, 1.0, -0.5));
    assert_eq!(a.dot(b), 5.0);
    assert_eq!(Vec3D::<f64>::zero().abs(), 0.0);
    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
}

#[test]
fn test_time_scale_bounds() {
    assert_eq!(TimeScale::new(0).factor(), 1);
    assert_eq!(TimeScale::new(500).factor(), TimeScale::MAX);
    assert_eq!(TimeScale::new(1).halved().factor(), 1);
    assert_eq!(TimeScale::new(64).doubled().factor(), TimeScale::MAX);

    let mut scale = TimeScale::default();
    for _ in 0..20 {
        scale = scale.doubled();
        assert!((TimeScale::MIN..=TimeScale::MAX).contains(&scale.factor()));
    }
    for _ in 0..20 {
        scale = scale.halved();
        assert!(scale.factor() >= TimeScale::MIN);
    }
    assert_eq!(scale.factor(), 1);
}

#[test]
fn test_time_scale_compounds_sleep_and_delta() {
    let period = Duration::from_millis(100);
    let scale = TimeScale::new(4);
    assert_eq!(scale.sleep_for(period), Duration::from_millis(25));
    assert!((scale.sim_dt(period) - 0.4).abs() < 1e-12);
    // simulated seconds per wall second: dt / sleep = 0.4 / 0.025 = 16 = 4^2
    let throughput = scale.sim_dt(period) / scale.sleep_for(period).as_secs_f64();
    assert!((throughput - 16.0).abs() < 1e-9);
}

#[test]
fn test_phase_sequence_is_ordered() {
    let nominal: Vec<MissionPhase> =
        MissionPhase::iter().filter(|p| *p != MissionPhase::Anomaly).collect();
    assert_eq!(nominal.len(), 11);
    for pair in nominal.windows(2) {
        assert_eq!(pair[0].successor(), pair[1]);
        assert!(pair[0].index() < pair[1].index());
    }
    assert_eq!(MissionPhase::Completion.successor(), MissionPhase::Completion);
    assert_eq!(MissionPhase::Anomaly.successor(), MissionPhase::Anomaly);
    assert!(MissionPhase::Completion.is_terminal());
    assert!(MissionPhase::Anomaly.is_terminal());
    assert!(!MissionPhase::Splashdown.is_terminal());
}

#[test]
fn test_drain_energy_spills_into_reserve() {
    let mut state = VehicleState::default();
    state.main_energy_wh = 1.0;
    state.reserve_energy_wh = 2.0;

    assert!(!state.drain_energy(1.5));
    assert_eq!(state.main_energy_wh, 0.0);
    assert!((state.reserve_energy_wh - 1.5).abs() < 1e-12);

    assert!(state.drain_energy(4.0));
    assert_eq!(state.main_energy_wh, 0.0);
    assert_eq!(state.reserve_energy_wh, 0.0);
    assert!(state.invariants_hold());
}

#[test]
fn test_clamp_propellants() {
    let mut state = VehicleState::default();
    state.main_propellant_kg = -3.0;
    state.rcs_propellant_kg = -0.1;
    assert!(!state.invariants_hold());
    state.clamp_propellants();
    assert_eq!(state.main_propellant_kg, 0.0);
    assert_eq!(state.rcs_propellant_kg, 0.0);
    assert!(state.invariants_hold());
}

#[test]
fn test_launch_pad_state() {
    let state = VehicleState::default();
    assert_eq!(state.phase, MissionPhase::Preparation);
    assert!(state.system_active);
    assert!(!state.anomaly_active);
    assert_eq!(state.time_scale.factor(), 1);
    assert_eq!(state.main_propellant_kg, 1_924_000.0);
    assert!(state.invariants_hold());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_guard_serializes_concurrent_updates() {
    let guard = StateGuard::new(VehicleState::default());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let g = guard.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..1000 {
                let mut state = g.lock().await;
                // a torn read-modify-write would lose updates here
                let before = state.mission_time_s;
                tokio::task::yield_now().await;
                state.mission_time_s = before + 1.0;
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(guard.snapshot().await.mission_time_s, 8000.0);
    assert!(guard.is_active().await);
}
