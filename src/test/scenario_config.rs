use super::assert_close;
use crate::flow::FlowProfile;
use crate::scenario::{AlightModel, ConfigError, ScenarioConfig, ScenarioError, presets};

const MINIMAL: &str = r#"
{
    "horizon_s": 120,
    "platform": { "width_ft": 15, "length_ft": 900 },
    "trains": [ { "arriving_pax": 1600, "door_capacity_pax_s": 48, "arrival_s": 0 } ],
    "vce": { "total_width_ft": 41.67, "queue_length_ft": 20 }
}
"#;

fn minimal() -> ScenarioConfig {
    ScenarioConfig::from_json_str(MINIMAL).expect("parse minimal scenario")
}

#[test]
fn scenario_parses_minimal_json_with_defaults() {
    let cfg = minimal();
    assert!(cfg.name.is_none());
    assert_eq!(cfg.horizon_s, 120);
    assert_eq!(cfg.platform.area_multiplier, 0.75);
    assert_eq!(cfg.concourse_area_sqft, 5000.0);
    assert_eq!(cfg.flow, FlowProfile::default());
    assert_eq!(cfg.vce.queue_space_per_pax_sqft, 5.0);
    assert!(cfg.vce.elements.is_empty());
    let train = &cfg.trains[0];
    assert_eq!(train.departing_pax, 0.0);
    assert_eq!(train.preloaded_boarders, 0.0);
    assert!(train.departure_s.is_none());
    assert_eq!(train.alighting, AlightModel::DoorThroughput);
    assert_eq!(cfg.departure_s(train), 120);
    assert_close(cfg.usable_area(), 10_125.0, 1e-9);
}

#[test]
fn scenario_parses_bidirectional_alighting_and_vce_elements() {
    let raw = r#"
    {
        "name": "fine",
        "horizon_s": 60,
        "platform": { "width_ft": 15, "length_ft": 900, "area_multiplier": 0.5 },
        "trains": [ {
            "arriving_pax": 1600, "door_capacity_pax_s": 48, "arrival_s": 5,
            "departure_s": 50,
            "alighting": { "kind": "bidirectional", "interior_area_sqft": 7650, "door_width_ft": 80 }
        } ],
        "vce": {
            "total_width_ft": 10, "queue_length_ft": 20,
            "elements": [ { "width_ft": 5, "weight": 0.6 }, { "width_ft": 5 } ]
        }
    }
    "#;
    let cfg = ScenarioConfig::from_json_str(raw).expect("parse scenario");
    assert_eq!(cfg.name.as_deref(), Some("fine"));
    assert_eq!(
        cfg.trains[0].alighting,
        AlightModel::Bidirectional {
            interior_area_sqft: 7650.0,
            door_width_ft: 80.0
        }
    );
    assert_eq!(cfg.departure_s(&cfg.trains[0]), 50);
    assert_eq!(cfg.vce.elements[1].weight, 1.0);
    // Σ width·weight = 3 + 5
    assert_close(cfg.weighted_vce_width(), 8.0, 1e-12);
    // 20 ft · 8 / 5 sqft
    assert_close(cfg.queue_capacity(), 32.0, 1e-12);
    let shares = cfg.vce_shares();
    assert_close(shares[0], 3.0 / 8.0, 1e-12);
    assert_close(shares.iter().sum::<f64>(), 1.0, 1e-12);
}

#[test]
fn queue_capacity_falls_back_to_total_width() {
    let cfg = presets::one_train_1600();
    assert_close(cfg.weighted_vce_width(), 500.0 / 12.0, 1e-12);
    assert_close(cfg.queue_capacity(), 20.0 * 500.0 / 12.0 / 5.0, 1e-9);
    assert!(cfg.vce_shares().is_empty());
}

#[test]
fn validation_rejects_non_positive_dimensions() {
    let mut cfg = minimal();
    cfg.platform.width_ft = 0.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            field: "platform.width_ft",
            value: 0.0
        })
    );

    let mut cfg = minimal();
    cfg.platform.area_multiplier = -0.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            field: "platform.area_multiplier",
            ..
        })
    ));

    let mut cfg = minimal();
    cfg.platform.length_ft = f64::INFINITY;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite {
            field: "platform.length_ft",
            ..
        })
    ));
}

#[test]
fn validation_rejects_empty_horizon_and_bad_train_count() {
    let mut cfg = minimal();
    cfg.horizon_s = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyHorizon));

    let mut cfg = minimal();
    cfg.trains.clear();
    assert_eq!(cfg.validate(), Err(ConfigError::TrainCount(0)));

    let mut cfg = minimal();
    let t = cfg.trains[0].clone();
    cfg.trains.push(t.clone());
    assert_eq!(cfg.validate(), Ok(()));
    cfg.trains.push(t);
    assert_eq!(cfg.validate(), Err(ConfigError::TrainCount(3)));
}

#[test]
fn validation_rejects_inconsistent_trains() {
    let mut cfg = minimal();
    cfg.trains[0].door_capacity_pax_s = -1.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Negative {
            field: "trains.door_capacity_pax_s",
            ..
        })
    ));

    let mut cfg = minimal();
    cfg.trains[0].departing_pax = 100.0;
    cfg.trains[0].preloaded_boarders = 150.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::PreloadedExceedsDeparting { train: 0, .. })
    ));

    let mut cfg = minimal();
    cfg.trains[0].arrival_s = 30;
    cfg.trains[0].departure_s = Some(30);
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::DepartureBeforeArrival {
            train: 0,
            arrival_s: 30,
            departure_s: 30
        })
    ));

    let mut cfg = minimal();
    cfg.trains[0].alighting = AlightModel::Bidirectional {
        interior_area_sqft: 0.0,
        door_width_ft: 80.0,
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));
}

#[test]
fn validation_rejects_bad_vce_and_flow_curves() {
    let mut cfg = minimal();
    cfg.vce.total_width_ft = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive {
            field: "vce.total_width_ft",
            ..
        })
    ));

    let mut cfg = presets::by_name("platform3-120s").expect("preset");
    cfg.vce.elements[3].width_ft = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::VceElement { index: 3 }));

    let mut cfg = presets::by_name("platform3-120s").expect("preset");
    for el in &mut cfg.vce.elements {
        el.weight = 0.0;
    }
    assert_eq!(cfg.validate(), Err(ConfigError::VceWeightsVanish));

    let mut cfg = minimal();
    cfg.flow.upstairs.ceiling_per_ft = 1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::FlowCurve("upstairs")));
}

#[test]
fn from_json_str_reports_parse_and_validation_errors() {
    let err = ScenarioConfig::from_json_str("{ not json").expect_err("should fail");
    assert!(matches!(err, ScenarioError::Parse(_)));

    let raw = MINIMAL.replace("\"horizon_s\": 120", "\"horizon_s\": 0");
    let err = ScenarioConfig::from_json_str(&raw).expect_err("should fail");
    assert!(matches!(err, ScenarioError::Invalid(ConfigError::EmptyHorizon)));
}

#[test]
fn presets_are_valid_and_named() {
    let all = presets::all().expect("every preset resolves");
    assert_eq!(all.len(), presets::NAMES.len());
    for (cfg, name) in all.iter().zip(presets::NAMES) {
        assert_eq!(cfg, &presets::by_name(name).expect("known preset"));
    }
    for name in presets::NAMES {
        let cfg = presets::by_name(name).expect("known preset");
        cfg.validate().expect("preset validates");
        assert!(cfg.name.is_some());
    }
    assert!(matches!(
        presets::by_name("platform99"),
        Err(ScenarioError::UnknownPreset(_))
    ));
}

#[test]
fn platform_study_preset_uses_inch_widths() {
    let cfg = presets::by_name("platform3-120s").expect("preset");
    assert_eq!(cfg.trains.len(), 2);
    assert_eq!(cfg.trains[1].arrival_s, 120);
    assert_eq!(cfg.vce.elements.len(), 11);
    assert_close(cfg.weighted_vce_width(), 578.0 / 12.0, 1e-9);
    assert_close(cfg.usable_area(), 18.0 * 900.0 * 0.75, 1e-9);
    assert_close(cfg.total_departing_pax(), 800.0, 1e-12);
}

#[test]
fn scenario_roundtrips_through_json() {
    let cfg = presets::fine_rate_two_trains();
    let raw = serde_json::to_string(&cfg).expect("encode");
    let back = ScenarioConfig::from_json_str(&raw).expect("decode");
    assert_eq!(back.name, cfg.name);
    assert_eq!(back.trains[1].alighting, cfg.trains[1].alighting);
    assert_eq!(back.trains[1].arrival_s, 120);
    assert_close(back.vce.total_width_ft, cfg.vce.total_width_ft, 1e-12);
}
