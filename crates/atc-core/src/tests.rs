use crate::actions::Action;
use crate::components::{Flight, FlightId, Runway};
use crate::config::SimConfig;
use crate::constants::*;
use crate::enums::*;
use crate::error::EngineError;
use crate::events::StepEvent;
use crate::state::{Observation, SceneSnapshot};

// ---- Action decoding ----

#[test]
fn test_decode_all_landing_actions() {
    let expected = [
        (0, 0, RunwayId::One),
        (1, 0, RunwayId::Two),
        (2, 1, RunwayId::One),
        (3, 1, RunwayId::Two),
        (4, 2, RunwayId::One),
        (5, 2, RunwayId::Two),
        (6, 3, RunwayId::One),
        (7, 3, RunwayId::Two),
        (8, 4, RunwayId::One),
        (9, 4, RunwayId::Two),
    ];
    for (raw, slot, runway) in expected {
        assert_eq!(
            Action::decode(raw).unwrap(),
            Action::Land { slot, runway },
            "action {raw}"
        );
    }
}

#[test]
fn test_decode_do_nothing() {
    assert_eq!(Action::decode(10).unwrap(), Action::DoNothing);
    assert_eq!(Action::decode(ACTION_DO_NOTHING).unwrap(), Action::DoNothing);
}

#[test]
fn test_decode_covers_grid_exactly_once() {
    let mut seen = std::collections::HashSet::new();
    for raw in 0..ACTION_COUNT as i64 {
        assert!(seen.insert(Action::decode(raw).unwrap()));
    }
    assert_eq!(seen.len(), TOP_FLIGHTS * RUNWAY_COUNT + 1);
}

#[test]
fn test_decode_rejects_out_of_range() {
    for raw in [-1, 11, 12, 100, i64::MIN, i64::MAX] {
        match Action::decode(raw) {
            Err(EngineError::InvalidAction(v)) => assert_eq!(v, raw),
            other => panic!("expected InvalidAction for {raw}, got {other:?}"),
        }
    }
}

#[test]
fn test_encode_inverts_decode() {
    for raw in 0..ACTION_COUNT as i64 {
        assert_eq!(Action::decode(raw).unwrap().encode(), Some(raw));
    }
    let off_window = Action::Land {
        slot: TOP_FLIGHTS,
        runway: RunwayId::One,
    };
    assert_eq!(off_window.encode(), None);
}

// ---- Components ----

#[test]
fn test_new_flight_is_waiting() {
    let flight = Flight::new(FlightId(3), 12, Priority::Emergency);
    assert!(flight.is_waiting());
    assert!(flight.is_emergency());
    assert_eq!(flight.wait_time, 0);
    assert!(!flight.status.is_terminal());
    assert!(FlightStatus::Landed.is_terminal());
    assert!(FlightStatus::Crashed.is_terminal());
}

#[test]
fn test_runway_availability() {
    let mut runway = Runway::new(RunwayId::Two);
    assert!(runway.is_available());
    runway.cooldown = 4;
    assert!(!runway.is_available());
    assert_eq!(RunwayId::Two.number(), 2);
    assert_eq!(RunwayId::from_index(0), Some(RunwayId::One));
    assert_eq!(RunwayId::from_index(2), None);
}

// ---- Observation ----

#[test]
fn test_observation_layout_accessors() {
    let mut values = [0.0; OBSERVATION_LEN];
    values[0] = 1.0;
    values[2] = 7.0;
    values[3] = 2.0;
    values[4] = 1.0;
    let obs = Observation(values);

    assert_eq!(OBSERVATION_LEN, 17);
    assert!(obs.runway_available(RunwayId::One));
    assert!(!obs.runway_available(RunwayId::Two));
    assert_eq!(obs.slot(0), Some([7.0, 2.0, 1.0]));
    assert!(obs.slot_occupied(0));
    assert!(!obs.slot_occupied(1));
    assert_eq!(obs.slot(TOP_FLIGHTS), None);
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = SimConfig::default();
    config.validate().unwrap();
    assert_eq!(config.fuel_range, (5, 20));
    assert_eq!(config.cooldown_range, (3, 5));
    assert_eq!(config.max_steps, 2000);
    assert_eq!(config.max_flights_served, 200);
    assert_eq!(config.rewards.low_wait_bonus, 0.0);
}

#[test]
fn test_partial_json_config_uses_defaults() {
    let config = SimConfig::from_json(r#"{ "seed": 7, "rewards": { "low_wait_bonus": 0.1 } }"#)
        .unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.rewards.low_wait_bonus, 0.1);
    assert_eq!(config.rewards.landing, REWARD_LANDING);
    assert_eq!(config.spawn_interval, SPAWN_INTERVAL_STEPS);
}

#[test]
fn test_invalid_configs_rejected() {
    let bad = [
        r#"{ "fuel_range": [20, 5] }"#,
        r#"{ "fuel_range": [0, 5] }"#,
        r#"{ "cooldown_range": [0, 5] }"#,
        r#"{ "spawn_batch": [0, 3] }"#,
        r#"{ "emergency_probability": 1.5 }"#,
        r#"{ "spawn_interval": 0 }"#,
        r#"{ "max_steps": 0 }"#,
    ];
    for json in bad {
        assert!(
            matches!(SimConfig::from_json(json), Err(EngineError::InvalidConfig(_))),
            "{json} should be rejected"
        );
    }
    assert!(matches!(
        SimConfig::from_json("{ not json"),
        Err(EngineError::ConfigParse(_))
    ));
}

// ---- Serde ----

#[test]
fn test_step_event_serde_tagged() {
    let event = StepEvent::Landed {
        flight: FlightId(4),
        runway: RunwayId::Two,
        priority: Priority::Normal,
        cooldown: 3,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"Landed""#));
    let back: StepEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_empty_snapshot_serializes() {
    let json = serde_json::to_string(&SceneSnapshot::default()).unwrap();
    let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SceneSnapshot::default());
}
