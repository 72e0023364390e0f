//! 楼梯流量控制
//!
//! 上行（疏散）与下行（进站）两股客流共用同一组 VCE 的物理宽度。
//! 调用顺序是契约：先 [`StairwellFlowController::egress`]，再把得到的
//! [`EgressFlow`] 交给 [`StairwellFlowController::ingress`]，下行只能使用
//! 上行占用后剩余的宽度预算。

use crate::flow::FlowProfile;
use crate::scenario::ScenarioConfig;
use crate::train::boarder_fraction;

/// 本 tick 的上行结果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EgressFlow {
    pub rate: f64,
    /// 等待人数超过 qmax，下限抬升到拥堵下限
    pub congested: bool,
}

/// 本 tick 的下行结果，按列车索引。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngressFlow {
    pub rates: Vec<f64>,
    pub congested: Vec<bool>,
}

impl IngressFlow {
    pub fn total(&self) -> f64 {
        self.rates.iter().sum()
    }
}

#[derive(Debug, Clone)]
pub struct StairwellFlowController {
    profile: FlowProfile,
    platform_area: f64,
    concourse_area: f64,
    width: f64,
    queue_capacity: f64,
    shares: Vec<f64>,
}

impl StairwellFlowController {
    pub fn new(cfg: &ScenarioConfig) -> Self {
        Self {
            profile: cfg.flow,
            platform_area: cfg.usable_area(),
            concourse_area: cfg.concourse_area_sqft,
            width: cfg.vce.total_width_ft,
            queue_capacity: cfg.queue_capacity(),
            shares: cfg.vce_shares(),
        }
    }

    /// qmax（pax）
    pub fn queue_capacity(&self) -> f64 {
        self.queue_capacity
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// 上行流率上限（pax/s）。
    pub fn egress_ceiling(&self) -> f64 {
        self.profile.upstairs.ceiling(self.width)
    }

    /// 拥堵时的上行最低流率（pax/s）。
    pub fn congestion_floor(&self) -> f64 {
        self.profile.upstairs.floor(self.width)
    }

    /// 上行流率：`karr` 为已下车、等待上楼的人数。
    ///
    /// 拥堵只抬高下限而不压低上限；结果不超过 `karr`。
    pub fn egress(&self, karr: f64) -> EgressFlow {
        let curve = &self.profile.upstairs;
        let density = curve.bounded_rate(self.platform_area, karr, self.width);
        let congested = karr > self.queue_capacity;
        let rate = if congested {
            density.max(curve.floor(self.width))
        } else {
            density
        };
        EgressFlow {
            rate: rate.min(karr.max(0.0)),
            congested,
        }
    }

    /// 下行流率：`upstairs[i]` 为尚在站厅、要乘第 i 列车的人数。
    ///
    /// 下行宽度按两列车的站厅需求比例分配；每列车的可用预算都先扣除
    /// `claimed.rate`。
    pub fn ingress(&self, claimed: &EgressFlow, upstairs: &[f64]) -> IngressFlow {
        let curve = &self.profile.downstairs;
        let r_up = claimed.rate;
        let mut out = IngressFlow::default();
        for (idx, &kdep) in upstairs.iter().enumerate() {
            let others: f64 = upstairs
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != idx)
                .map(|(_, k)| *k)
                .sum();
            let congested = kdep > self.queue_capacity;
            if kdep <= 0.0 {
                out.rates.push(0.0);
                out.congested.push(false);
                continue;
            }
            let width = self.width * boarder_fraction(kdep, others);
            let density = curve.bounded_rate(self.concourse_area, kdep, width);
            let demand = if congested {
                density.max(curve.floor(width))
            } else {
                density
            };
            let budget = (self.profile.ingress_capacity(width) - r_up).max(0.0);
            let rate = (demand - r_up).clamp(0.0, budget).min(kdep);
            out.rates.push(rate);
            out.congested.push(congested);
        }
        out
    }

    /// 按 width × weight 比例把上行流率分摊到各 VCE。
    pub fn attribute(&self, egress_rate: f64) -> Vec<f64> {
        self.shares.iter().map(|s| s * egress_rate).collect()
    }
}
