//! 仿真输出：逐秒记录与汇总

use serde::{Deserialize, Serialize};

use crate::platform::LosGrade;
use crate::scenario::ScenarioConfig;

/// LOS F 对应的上行流量（pax/ft/min），用于应急疏散估算。
pub const LOS_F_FLOW_PER_FT: f64 = 19.0;

/// 判定站台"已清空"的残余人数阈值。
pub const CLEAR_EPSILON: f64 = 1e-9;

/// 单列车在某一 tick 的快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSample {
    pub onboard: f64,
    pub remaining_to_alight: f64,
    pub alight_rate: f64,
    pub board_rate: f64,
    pub boarders_on_platform: f64,
    pub boarders_upstairs: f64,
    pub boarded: f64,
    /// 站厅候车人数超过 qmax，下行下限抬升
    pub ingress_congested: bool,
}

/// 一个 tick 结束时的完整快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub t_s: u64,
    pub trains: Vec<TrainSample>,
    /// 上行（疏散）流率，pax/s
    pub up_rate: f64,
    /// 下行（进站）流率，pax/s
    pub down_rate: f64,
    pub arrived_on_platform: f64,
    pub total_on_platform: f64,
    pub space_per_pax: f64,
    /// 下车 + 下行 − 上行 − 上车
    pub net_flow_rate: f64,
    pub departed_total: f64,
    pub congested: bool,
    pub platform_los: LosGrade,
    pub egress_los: LosGrade,
    /// 各 VCE 分担的上行流率，顺序与配置一致
    pub vce_egress: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub name: Option<String>,
    pub horizon_s: u64,
    /// LOS F 上行流率（pax/s）
    pub los_f_egress_rate: f64,
    /// 到站总人数 / LOS F 流率（s）
    pub emergency_egress_s: f64,
    pub peak_on_platform: f64,
    pub peak_at_s: u64,
    pub min_space_per_pax: f64,
    pub worst_platform_los: LosGrade,
    pub worst_egress_los: LosGrade,
    /// 所有列车下车完毕且站台到达池清空的首个 tick
    pub clearance_s: Option<u64>,
    pub total_departed: f64,
    pub total_boarded: f64,
}

impl RunSummary {
    pub fn from_records(cfg: &ScenarioConfig, records: &[TimeSeriesRecord]) -> Self {
        let los_f_egress_rate = LOS_F_FLOW_PER_FT * cfg.vce.total_width_ft / 60.0;
        let mut summary = RunSummary {
            name: cfg.name.clone(),
            horizon_s: cfg.horizon_s,
            los_f_egress_rate,
            emergency_egress_s: cfg.total_arriving_pax() / los_f_egress_rate,
            peak_on_platform: 0.0,
            peak_at_s: 0,
            min_space_per_pax: cfg.usable_area(),
            worst_platform_los: LosGrade::A,
            worst_egress_los: LosGrade::A,
            clearance_s: None,
            total_departed: 0.0,
            total_boarded: 0.0,
        };
        for rec in records {
            if rec.total_on_platform > summary.peak_on_platform {
                summary.peak_on_platform = rec.total_on_platform;
                summary.peak_at_s = rec.t_s;
            }
            summary.min_space_per_pax = summary.min_space_per_pax.min(rec.space_per_pax);
            summary.worst_platform_los = summary.worst_platform_los.max(rec.platform_los);
            summary.worst_egress_los = summary.worst_egress_los.max(rec.egress_los);
            let alighted = rec.trains.iter().all(|t| t.remaining_to_alight <= 0.0);
            if summary.clearance_s.is_none() && alighted && rec.arrived_on_platform < CLEAR_EPSILON
            {
                summary.clearance_s = Some(rec.t_s);
            }
        }
        if let Some(last) = records.last() {
            summary.total_departed = last.departed_total;
            summary.total_boarded = last.trains.iter().map(|t| t.boarded).sum();
        }
        summary
    }
}

/// 一次运行的全部输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub summary: RunSummary,
    pub records: Vec<TimeSeriesRecord>,
}
