//! 内置场景
//!
//! 历次站台研究使用的参数组合，可通过名称加载。

use super::config::{AlightModel, PlatformSpec, ScenarioConfig, TrainConfig, VceElement, VceSpec};
use super::error::ScenarioError;
use crate::flow::FlowProfile;

/// 站台研究中各楼梯口宽度（英寸）。
const STUDY_VCE_INCHES: [f64; 11] = [
    60.0, 60.0, 40.0, 54.0, 40.0, 54.0, 54.0, 54.0, 54.0, 54.0, 54.0,
];

pub const NAMES: &[&str] = &[
    "one-train-1600",
    "two-trains-1600-120s",
    "platform3-120s",
    "platform3-300s",
    "platform3-recon-120s",
    "platform3-recon-300s",
    "platform6",
    "platform10-120s",
    "platform11-120s",
    "fine-rate-two-trains",
];

pub fn by_name(name: &str) -> Result<ScenarioConfig, ScenarioError> {
    let cfg = match name {
        "one-train-1600" => one_train_1600(),
        "two-trains-1600-120s" => two_trains_1600(120),
        "platform3-120s" => platform_study("platform3", 18.0, 900.0, 42.5, 120),
        "platform3-300s" => platform_study("platform3", 18.0, 900.0, 42.5, 300),
        "platform3-recon-120s" => platform_study("platform3_recon", 18.0, 900.0, 44.75, 120),
        "platform3-recon-300s" => platform_study("platform3_recon", 18.0, 900.0, 44.75, 300),
        "platform6" => platform_study("platform6", 15.0, 1100.0, 48.168, 0),
        "platform10-120s" => platform_study("platform10", 42.0, 1100.0, 70.58, 120),
        "platform11-120s" => platform_study("platform11", 18.0, 1100.0, 43.58, 120),
        "fine-rate-two-trains" => fine_rate_two_trains(),
        other => return Err(ScenarioError::UnknownPreset(other.to_string())),
    };
    Ok(cfg)
}

/// 所有内置场景，顺序与 [`NAMES`] 一致。
pub fn all() -> Result<Vec<ScenarioConfig>, ScenarioError> {
    NAMES.iter().map(|n| by_name(n)).collect()
}

fn alight_only(arriving_pax: f64, door_capacity_pax_s: f64, arrival_s: u64) -> TrainConfig {
    TrainConfig {
        arriving_pax,
        departing_pax: 0.0,
        preloaded_boarders: 0.0,
        door_capacity_pax_s,
        arrival_s,
        departure_s: None,
        alighting: AlightModel::DoorThroughput,
    }
}

/// 单列车 1600 人，15×900 ft 站台，VCE 总宽 500 in。
pub fn one_train_1600() -> ScenarioConfig {
    ScenarioConfig {
        name: Some("one-train-1600".into()),
        horizon_s: 600,
        platform: PlatformSpec {
            width_ft: 15.0,
            length_ft: 900.0,
            area_multiplier: 0.75,
        },
        trains: vec![alight_only(1600.0, 48.0, 0)],
        vce: VceSpec {
            total_width_ft: 500.0 / 12.0,
            elements: Vec::new(),
            queue_length_ft: 20.0,
            queue_space_per_pax_sqft: 5.0,
        },
        concourse_area_sqft: 5000.0,
        flow: FlowProfile::default(),
    }
}

/// 两列对称列车，第二列晚到 `headway_s` 秒。
pub fn two_trains_1600(headway_s: u64) -> ScenarioConfig {
    let mut cfg = one_train_1600();
    cfg.name = Some(format!("two-trains-1600-{headway_s}s"));
    cfg.trains.push(alight_only(1600.0, 48.0, headway_s));
    cfg
}

fn platform_study(
    prefix: &str,
    width_ft: f64,
    length_ft: f64,
    total_vce_width_ft: f64,
    second_arrival_s: u64,
) -> ScenarioConfig {
    let train = |arrival_s| TrainConfig {
        arriving_pax: 1620.0,
        departing_pax: 400.0,
        preloaded_boarders: 200.0,
        door_capacity_pax_s: 40.0,
        arrival_s,
        departure_s: None,
        alighting: AlightModel::DoorThroughput,
    };
    ScenarioConfig {
        name: Some(format!("{prefix}_1620_1620_{second_arrival_s}s")),
        horizon_s: 600,
        platform: PlatformSpec {
            width_ft,
            length_ft,
            area_multiplier: 0.75,
        },
        trains: vec![train(0), train(second_arrival_s)],
        vce: VceSpec {
            total_width_ft: total_vce_width_ft,
            elements: STUDY_VCE_INCHES
                .iter()
                .map(|inches| VceElement {
                    width_ft: inches / 12.0,
                    weight: 1.0,
                })
                .collect(),
            queue_length_ft: 20.0,
            queue_space_per_pax_sqft: 5.0,
        },
        concourse_area_sqft: 5000.0,
        flow: FlowProfile::default(),
    }
}

/// 车门按车厢密度双向流公式下车（10 节车厢，每节 85×9 ft，车门总宽 80 ft）。
pub fn fine_rate_two_trains() -> ScenarioConfig {
    let train = |arrival_s| TrainConfig {
        alighting: AlightModel::Bidirectional {
            interior_area_sqft: 85.0 * 9.0 * 10.0,
            door_width_ft: 80.0,
        },
        ..alight_only(1600.0, 48.0, arrival_s)
    };
    let mut cfg = one_train_1600();
    cfg.name = Some("fine-rate-two-trains".into());
    cfg.trains = vec![train(0), train(120)];
    cfg
}
