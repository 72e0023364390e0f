use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ScenarioError};
use crate::flow::{FlowCurve, FlowProfile};

/// 固定拓扑下最多支持的列车数（站台两侧各一列）。
pub const MAX_TRAINS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// 仿真时长（秒），tick 为 `0..horizon_s`
    pub horizon_s: u64,
    pub platform: PlatformSpec,
    pub trains: Vec<TrainConfig>,
    pub vce: VceSpec,
    /// 站厅可用面积（sqft），下行流量公式的密度基准
    #[serde(default = "default_concourse_area")]
    pub concourse_area_sqft: f64,
    #[serde(default)]
    pub flow: FlowProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub width_ft: f64,
    pub length_ft: f64,
    /// 扣除楼梯、柱子等障碍物后的可用面积系数
    #[serde(default = "default_area_multiplier")]
    pub area_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub arriving_pax: f64,
    /// 乘坐本列车离开的总人数；0 表示只下不上
    #[serde(default)]
    pub departing_pax: f64,
    /// t=0 时已在站台等候上本列车的人数（计入 `departing_pax`）
    #[serde(default)]
    pub preloaded_boarders: f64,
    /// 车门等效通过能力（pax/s），上下车共用
    pub door_capacity_pax_s: f64,
    pub arrival_s: u64,
    /// 上车窗口结束时间；缺省为仿真时长
    #[serde(default)]
    pub departure_s: Option<u64>,
    #[serde(default)]
    pub alighting: AlightModel,
}

/// 下车流率模型。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlightModel {
    /// 以车门等效通过能力为恒定流率
    #[default]
    DoorThroughput,
    /// 按车厢内密度代入车门双向流公式
    Bidirectional {
        interior_area_sqft: f64,
        door_width_ft: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VceSpec {
    /// 所有上行 VCE 的总宽度（ft）
    pub total_width_ft: f64,
    /// 单个 VCE 的宽度与权重；为空时以总宽度、权重 1 代替
    #[serde(default)]
    pub elements: Vec<VceElement>,
    /// 楼梯口前推动最大流量的排队长度（ft）
    pub queue_length_ft: f64,
    /// 排队区每人占用面积（sqft）
    #[serde(default = "default_queue_space")]
    pub queue_space_per_pax_sqft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VceElement {
    pub width_ft: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_concourse_area() -> f64 {
    5000.0
}

fn default_area_multiplier() -> f64 {
    0.75
}

fn default_queue_space() -> f64 {
    5.0
}

fn default_weight() -> f64 {
    1.0
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn curve(name: &'static str, c: &FlowCurve) -> Result<(), ConfigError> {
    if c.is_well_formed() {
        Ok(())
    } else {
        Err(ConfigError::FlowCurve(name))
    }
}

impl ScenarioConfig {
    /// 解析并校验。
    pub fn from_json_str(raw: &str) -> Result<Self, ScenarioError> {
        let cfg: ScenarioConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 读取并校验。
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let cfg = Self::read_path(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 只读取与解析，不校验；调用方覆盖字段后自行调用 [`Self::validate`]。
    pub fn read_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 校验所有字段；任何一条不满足即返回错误。
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("platform.width_ft", self.platform.width_ft)?;
        positive("platform.length_ft", self.platform.length_ft)?;
        positive("platform.area_multiplier", self.platform.area_multiplier)?;
        if self.horizon_s == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        if self.trains.is_empty() || self.trains.len() > MAX_TRAINS {
            return Err(ConfigError::TrainCount(self.trains.len()));
        }
        for (idx, train) in self.trains.iter().enumerate() {
            non_negative("trains.arriving_pax", train.arriving_pax)?;
            non_negative("trains.departing_pax", train.departing_pax)?;
            non_negative("trains.preloaded_boarders", train.preloaded_boarders)?;
            non_negative("trains.door_capacity_pax_s", train.door_capacity_pax_s)?;
            if train.preloaded_boarders > train.departing_pax {
                return Err(ConfigError::PreloadedExceedsDeparting {
                    train: idx,
                    preloaded: train.preloaded_boarders,
                    departing: train.departing_pax,
                });
            }
            if let Some(departure_s) = train.departure_s {
                if departure_s <= train.arrival_s {
                    return Err(ConfigError::DepartureBeforeArrival {
                        train: idx,
                        arrival_s: train.arrival_s,
                        departure_s,
                    });
                }
            }
            if let AlightModel::Bidirectional {
                interior_area_sqft,
                door_width_ft,
            } = train.alighting
            {
                positive("trains.alighting.interior_area_sqft", interior_area_sqft)?;
                positive("trains.alighting.door_width_ft", door_width_ft)?;
            }
        }
        positive("vce.total_width_ft", self.vce.total_width_ft)?;
        positive("vce.queue_length_ft", self.vce.queue_length_ft)?;
        positive(
            "vce.queue_space_per_pax_sqft",
            self.vce.queue_space_per_pax_sqft,
        )?;
        for (index, el) in self.vce.elements.iter().enumerate() {
            let ok = el.width_ft.is_finite()
                && el.width_ft > 0.0
                && el.weight.is_finite()
                && el.weight >= 0.0;
            if !ok {
                return Err(ConfigError::VceElement { index });
            }
        }
        if !self.vce.elements.is_empty() && self.weighted_vce_width() <= 0.0 {
            return Err(ConfigError::VceWeightsVanish);
        }
        positive("concourse_area_sqft", self.concourse_area_sqft)?;
        curve("upstairs", &self.flow.upstairs)?;
        curve("downstairs", &self.flow.downstairs)?;
        curve("door", &self.flow.door)?;
        non_negative("flow.ingress_capacity_per_ft", self.flow.ingress_capacity_per_ft)?;
        Ok(())
    }

    /// 可用站台面积 = 宽 × 长 × 系数（sqft）。
    pub fn usable_area(&self) -> f64 {
        self.platform.width_ft * self.platform.length_ft * self.platform.area_multiplier
    }

    /// Σ(width × weight)；未列出单个 VCE 时取总宽度。
    pub fn weighted_vce_width(&self) -> f64 {
        if self.vce.elements.is_empty() {
            return self.vce.total_width_ft;
        }
        self.vce
            .elements
            .iter()
            .map(|el| el.width_ft * el.weight)
            .sum()
    }

    /// 拥堵阈值 qmax（pax）：楼梯口排队区能容纳的人数。
    pub fn queue_capacity(&self) -> f64 {
        self.vce.queue_length_ft * self.weighted_vce_width() / self.vce.queue_space_per_pax_sqft
    }

    /// 各 VCE 分担上行流量的比例，顺序与 `vce.elements` 一致。
    pub fn vce_shares(&self) -> Vec<f64> {
        let total = self.weighted_vce_width();
        self.vce
            .elements
            .iter()
            .map(|el| el.width_ft * el.weight / total)
            .collect()
    }

    /// 上车窗口的结束时刻。
    pub fn departure_s(&self, train: &TrainConfig) -> u64 {
        train.departure_s.unwrap_or(self.horizon_s)
    }

    pub fn total_arriving_pax(&self) -> f64 {
        self.trains.iter().map(|t| t.arriving_pax).sum()
    }

    pub fn total_departing_pax(&self) -> f64 {
        self.trains.iter().map(|t| t.departing_pax).sum()
    }
}
