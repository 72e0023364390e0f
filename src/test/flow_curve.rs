use super::assert_close;
use crate::flow::{FlowCurve, FlowProfile, space_per_pax_for_flow};

#[test]
fn capacity_per_foot_width_follows_empirical_form() {
    let up = FlowCurve::UPSTAIRS;
    // (111·2 − 162) / 4
    assert_close(up.capacity_per_foot_width(2.0), 15.0, 1e-12);
    let door = FlowCurve::BIDIRECTIONAL_DOOR;
    // (267·4 − 722) / 16
    assert_close(door.capacity_per_foot_width(4.0), 21.625, 1e-12);
}

#[test]
fn raw_rate_converts_per_minute_per_foot_to_per_second() {
    let up = FlowCurve::UPSTAIRS;
    // space = 100 / 50 = 2 sqft → 15 pax/ft/min; 60 ft → 15 pax/s
    assert_close(up.raw_rate(100.0, 50.0, 60.0), 15.0, 1e-12);
    assert_close(up.raw_rate(100.0, 50.0, 30.0), 7.5, 1e-12);
}

#[test]
fn zero_count_uses_single_pax_density() {
    assert_eq!(space_per_pax_for_flow(100.0, 0.0), 100.0);
    assert_eq!(space_per_pax_for_flow(100.0, 0.5), 100.0);
    let up = FlowCurve::UPSTAIRS;
    let expected = (111.0 * 100.0 - 162.0) / 10_000.0;
    assert_close(up.raw_rate(100.0, 0.0, 60.0), expected, 1e-12);
    assert!(up.raw_rate(100.0, 0.0, 60.0).is_finite());
}

#[test]
fn bounded_rate_clamps_negative_and_peak_values() {
    let up = FlowCurve::UPSTAIRS;
    // space = 1 sqft gives a negative raw curve value
    assert!(up.raw_rate(10.0, 10.0, 60.0) < 0.0);
    assert_eq!(up.bounded_rate(10.0, 10.0, 60.0), 0.0);

    // the curve peaks just above 19 pax/ft/min near 2.92 sqft/pax
    let count = 100.0 / 2.919;
    assert!(up.raw_rate(100.0, count, 60.0) > 19.0);
    assert_close(up.bounded_rate(100.0, count, 60.0), 19.0, 1e-12);
}

#[test]
fn rate_applies_floor_for_sparse_crowds() {
    let up = FlowCurve::UPSTAIRS;
    assert_close(up.floor(60.0), 10.0, 1e-12);
    assert_close(up.ceiling(60.0), 19.0, 1e-12);
    assert_close(up.rate(100.0, 0.0, 60.0), 10.0, 1e-12);
    assert_close(up.rate(100.0, 50.0, 60.0), 15.0, 1e-12);
}

#[test]
fn door_curve_stays_between_floor_and_ceiling() {
    let door = FlowCurve::BIDIRECTIONAL_DOOR;
    for count in [0.0, 1.0, 50.0, 500.0, 1600.0, 5000.0, 20_000.0] {
        let r = door.rate(7650.0, count, 80.0);
        assert!(r >= door.floor(80.0) - 1e-12, "count={count} r={r}");
        assert!(r <= door.ceiling(80.0) + 1e-12, "count={count} r={r}");
    }
}

#[test]
fn well_formed_rejects_inverted_bounds() {
    assert!(FlowCurve::UPSTAIRS.is_well_formed());
    assert!(FlowCurve::DOWNSTAIRS.is_well_formed());
    assert!(FlowCurve::BIDIRECTIONAL_DOOR.is_well_formed());
    let inverted = FlowCurve {
        floor_per_ft: 20.0,
        ..FlowCurve::UPSTAIRS
    };
    assert!(!inverted.is_well_formed());
    let nan = FlowCurve {
        a: f64::NAN,
        ..FlowCurve::UPSTAIRS
    };
    assert!(!nan.is_well_formed());
}

#[test]
fn profile_defaults_match_presets() {
    let p = FlowProfile::default();
    assert_eq!(p.upstairs, FlowCurve::UPSTAIRS);
    assert_eq!(p.downstairs, FlowCurve::DOWNSTAIRS);
    assert_eq!(p.door, FlowCurve::BIDIRECTIONAL_DOOR);
    assert_close(p.ingress_capacity(60.0), 12.0, 1e-12);
}

#[test]
fn profile_parses_partial_json_with_defaults() {
    let raw = r#"{ "upstairs": { "a": 111, "b": 162, "floor_per_ft": 7, "ceiling_per_ft": 19 } }"#;
    let p: FlowProfile = serde_json::from_str(raw).expect("parse profile");
    assert_eq!(p.upstairs.floor_per_ft, 7.0);
    assert_eq!(p.downstairs, FlowCurve::DOWNSTAIRS);
    assert_eq!(p.ingress_capacity_per_ft, 12.0);
}
