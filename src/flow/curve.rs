//! 流量曲线与曲线组合

use serde::{Deserialize, Serialize};

/// 计算流量曲线使用的人均面积：人数按 `max(1, count)` 代入，避免除零。
pub fn space_per_pax_for_flow(area_sqft: f64, count: f64) -> f64 {
    area_sqft / count.max(1.0)
}

/// 一条经验流量曲线（单位：pax/ft/min）。
///
/// `floor_per_ft`/`ceiling_per_ft` 为钳制区间；换算成 pax/s 时乘以 `width / 60`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowCurve {
    pub a: f64,
    pub b: f64,
    pub floor_per_ft: f64,
    pub ceiling_per_ft: f64,
}

impl FlowCurve {
    /// 上行楼梯（单向）。下限是拥堵时维持的 LOS C/D 附近最低流量。
    pub const UPSTAIRS: FlowCurve = FlowCurve {
        a: 111.0,
        b: 162.0,
        floor_per_ft: 10.0,
        ceiling_per_ft: 19.0,
    };

    /// 下行楼梯（单向）。
    pub const DOWNSTAIRS: FlowCurve = FlowCurve {
        a: 111.0,
        b: 162.0,
        floor_per_ft: 5.0,
        ceiling_per_ft: 19.0,
    };

    /// 车门双向流。
    pub const BIDIRECTIONAL_DOOR: FlowCurve = FlowCurve {
        a: 267.0,
        b: 722.0,
        floor_per_ft: 5.0,
        ceiling_per_ft: 25.0,
    };

    /// 每英尺宽度每分钟的通过能力；`space` 很小时可能为负。
    pub fn capacity_per_foot_width(&self, space: f64) -> f64 {
        (self.a * space - self.b) / (space * space)
    }

    /// 未钳制的流率（pax/s）。
    pub fn raw_rate(&self, area_sqft: f64, count: f64, width_ft: f64) -> f64 {
        let space = space_per_pax_for_flow(area_sqft, count);
        self.capacity_per_foot_width(space) * width_ft / 60.0
    }

    pub fn floor(&self, width_ft: f64) -> f64 {
        self.floor_per_ft * width_ft / 60.0
    }

    pub fn ceiling(&self, width_ft: f64) -> f64 {
        self.ceiling_per_ft * width_ft / 60.0
    }

    /// `[0, ceiling]` 区间内的密度流率，不施加下限。
    pub fn bounded_rate(&self, area_sqft: f64, count: f64, width_ft: f64) -> f64 {
        self.raw_rate(area_sqft, count, width_ft)
            .clamp(0.0, self.ceiling(width_ft).max(0.0))
    }

    /// `[floor, ceiling]` 区间内的流率。
    pub fn rate(&self, area_sqft: f64, count: f64, width_ft: f64) -> f64 {
        let floor = self.floor(width_ft).max(0.0);
        let ceiling = self.ceiling(width_ft).max(floor);
        self.raw_rate(area_sqft, count, width_ft).clamp(floor, ceiling)
    }

    /// 系数与区间是否可用（有限、非负、floor ≤ ceiling、a > 0）。
    pub fn is_well_formed(&self) -> bool {
        let finite = [self.a, self.b, self.floor_per_ft, self.ceiling_per_ft]
            .iter()
            .all(|v| v.is_finite());
        finite
            && self.a > 0.0
            && self.b >= 0.0
            && self.floor_per_ft >= 0.0
            && self.floor_per_ft <= self.ceiling_per_ft
    }
}

/// 一个场景使用的全部流量曲线。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowProfile {
    #[serde(default = "default_upstairs")]
    pub upstairs: FlowCurve,
    #[serde(default = "default_downstairs")]
    pub downstairs: FlowCurve,
    #[serde(default = "default_door")]
    pub door: FlowCurve,
    /// 下行方向可用的宽度预算（pax/ft/min），需扣除同一时刻上行已占用的流率
    #[serde(default = "default_ingress_capacity")]
    pub ingress_capacity_per_ft: f64,
}

fn default_upstairs() -> FlowCurve {
    FlowCurve::UPSTAIRS
}

fn default_downstairs() -> FlowCurve {
    FlowCurve::DOWNSTAIRS
}

fn default_door() -> FlowCurve {
    FlowCurve::BIDIRECTIONAL_DOOR
}

fn default_ingress_capacity() -> f64 {
    12.0
}

impl Default for FlowProfile {
    fn default() -> Self {
        Self {
            upstairs: FlowCurve::UPSTAIRS,
            downstairs: FlowCurve::DOWNSTAIRS,
            door: FlowCurve::BIDIRECTIONAL_DOOR,
            ingress_capacity_per_ft: default_ingress_capacity(),
        }
    }
}

impl FlowProfile {
    pub fn ingress_capacity(&self, width_ft: f64) -> f64 {
        self.ingress_capacity_per_ft * width_ft / 60.0
    }
}
