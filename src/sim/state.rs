//! 仿真状态
//!
//! 由 [`Simulator`](super::Simulator) 独占，每个 tick 修改一次，运行结束即丢弃。

use crate::platform::PlatformAccumulator;
use crate::scenario::ScenarioConfig;
use crate::train::{TrainBoard, TrainDeboard};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub deboard: Vec<TrainDeboard>,
    pub board: Vec<TrainBoard>,
    pub platform: PlatformAccumulator,
    /// 累计经楼梯离开站台的人数
    pub departed: f64,
    /// 上一个 tick 的上行拥堵状态
    pub congested: bool,
    /// 上一个 tick 各列车的下行拥堵状态
    pub ingress_congested: Vec<bool>,
}

impl SimulationState {
    /// t=0 的初始状态：列车满载，站台上只有预置的候车乘客。
    pub fn new(cfg: &ScenarioConfig) -> Self {
        Self {
            deboard: cfg
                .trains
                .iter()
                .map(|t| TrainDeboard::new(t.arriving_pax))
                .collect(),
            board: cfg
                .trains
                .iter()
                .map(|t| TrainBoard::new(t.departing_pax, t.preloaded_boarders))
                .collect(),
            platform: PlatformAccumulator::new(cfg.trains.iter().map(|t| t.preloaded_boarders)),
            departed: 0.0,
            congested: false,
            ingress_congested: vec![false; cfg.trains.len()],
        }
    }

    /// 第 i 列车车上人数 = 待下车 + 已上车。
    pub fn onboard(&self, train: usize) -> f64 {
        let remaining = self.deboard.get(train).map_or(0.0, |d| d.remaining());
        let boarded = self.board.get(train).map_or(0.0, |b| b.boarded());
        remaining + boarded
    }
}
