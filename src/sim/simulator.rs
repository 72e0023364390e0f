//! 仿真器
//!
//! 固定 1 秒步长的单趟推进：`NotStarted → Running → Completed`，不可回退。
//! 每个 tick 内依次执行：下车 → 上行 → 下行 → 上车 → 评级 → 输出记录。

use super::record::{RunOutput, RunSummary, TimeSeriesRecord, TrainSample};
use super::state::SimulationState;
use super::time::SimTime;
use crate::platform::{StairwellFlowController, crowding_grade, egress_grade, space_per_pax};
use crate::scenario::{ConfigError, ScenarioConfig};
use crate::train::board_rate;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    NotStarted,
    Running,
    Completed,
}

/// 单个场景的仿真器：独占 [`SimulationState`]，只读引用 [`ScenarioConfig`]。
pub struct Simulator<'a> {
    cfg: &'a ScenarioConfig,
    stairs: StairwellFlowController,
    state: SimulationState,
    now: SimTime,
    phase: RunPhase,
    records: Vec<TimeSeriesRecord>,
}

impl<'a> Simulator<'a> {
    /// 校验配置并建立 t=0 状态。
    pub fn new(cfg: &'a ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            stairs: StairwellFlowController::new(cfg),
            state: SimulationState::new(cfg),
            now: SimTime::ZERO,
            phase: RunPhase::NotStarted,
            records: Vec::with_capacity(cfg.horizon_s.min(1 << 20) as usize),
        })
    }

    /// 下一个待执行的 tick
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    /// 执行一个 tick；已完成时返回 `None`。
    pub fn step(&mut self) -> Option<&TimeSeriesRecord> {
        if self.phase == RunPhase::Completed {
            return None;
        }
        self.phase = RunPhase::Running;

        let record = self.tick();
        trace!(t = record.t_s, up = record.up_rate, down = record.down_rate, "tick 完成");
        self.records.push(record);

        self.now = self.now.next();
        if self.now.secs() >= self.cfg.horizon_s {
            self.phase = RunPhase::Completed;
        }
        self.records.last()
    }

    /// 运行到 `until`（含）或仿真结束。
    pub fn run_until(&mut self, until: SimTime) {
        while self.phase != RunPhase::Completed && self.now <= until {
            self.step();
        }
    }

    /// 运行全部 tick，返回记录序列与汇总。
    pub fn run(mut self) -> RunOutput {
        info!(
            horizon_s = self.cfg.horizon_s,
            trains = self.cfg.trains.len(),
            qmax = self.stairs.queue_capacity(),
            "▶️  开始运行仿真"
        );
        while self.step().is_some() {}

        let summary = RunSummary::from_records(self.cfg, &self.records);
        info!(
            ticks = self.records.len(),
            peak_on_platform = summary.peak_on_platform,
            clearance_s = ?summary.clearance_s,
            "✅ 仿真完成"
        );
        RunOutput {
            summary,
            records: self.records,
        }
    }

    fn tick(&mut self) -> TimeSeriesRecord {
        let cfg = self.cfg;
        let now = self.now;
        let state = &mut self.state;

        // 1. 下车：到达池增加
        let alight: Vec<f64> = state
            .deboard
            .iter_mut()
            .zip(&cfg.trains)
            .map(|(d, train)| d.step(train, &cfg.flow.door, now))
            .collect();
        state.platform.add_alighted(alight.iter().sum());
        trace!(t = now.secs(), rates = ?alight, "下车");

        // 2. 上行：按当前等待人数与拥堵状态计算
        let egress = self.stairs.egress(state.platform.arrived());
        state.platform.remove_egress(egress.rate);
        state.departed += egress.rate;
        if egress.congested != state.congested {
            debug!(
                t = now.secs(),
                congested = egress.congested,
                waiting = state.platform.arrived(),
                "上行拥堵状态变化"
            );
            state.congested = egress.congested;
        }
        trace!(t = now.secs(), rate = egress.rate, congested = egress.congested, "上行");

        // 3. 下行：使用上行已占用之后的宽度预算
        let upstairs: Vec<f64> = state.board.iter().map(|b| b.upstairs()).collect();
        let ingress = self.stairs.ingress(&egress, &upstairs);
        for (idx, &rate) in ingress.rates.iter().enumerate() {
            state.platform.add_ingress(idx, rate);
            state.board[idx].descend(rate);
        }
        for (idx, &congested) in ingress.congested.iter().enumerate() {
            if congested != state.ingress_congested[idx] {
                debug!(
                    t = now.secs(),
                    train = idx,
                    congested,
                    waiting = state.board[idx].upstairs(),
                    "下行拥堵状态变化"
                );
                state.ingress_congested[idx] = congested;
            }
        }
        trace!(t = now.secs(), rates = ?ingress.rates, "下行");

        // 4. 上车：从站台候车池取人
        let mut boarding = Vec::with_capacity(cfg.trains.len());
        for (idx, train) in cfg.trains.iter().enumerate() {
            let rate = board_rate(
                train.door_capacity_pax_s,
                alight[idx],
                now,
                train.arrival_s,
                cfg.departure_s(train),
                state.platform.boarders(idx),
            );
            state.platform.remove_boarded(idx, rate);
            state.board[idx].record_boarded(rate);
            boarding.push(rate);
        }
        trace!(t = now.secs(), rates = ?boarding, "上车");

        // 5. 评级
        let area = cfg.usable_area();
        let total = state.platform.total();
        let space = space_per_pax(total, area);
        let width = self.stairs.width();
        let up_rate = egress.rate;
        let down_rate = ingress.total();
        let net_flow_rate =
            alight.iter().sum::<f64>() + down_rate - up_rate - boarding.iter().sum::<f64>();

        let trains = (0..cfg.trains.len())
            .map(|idx| TrainSample {
                onboard: state.onboard(idx),
                remaining_to_alight: state.deboard[idx].remaining(),
                alight_rate: alight[idx],
                board_rate: boarding[idx],
                boarders_on_platform: state.platform.boarders(idx),
                boarders_upstairs: state.board[idx].upstairs(),
                boarded: state.board[idx].boarded(),
                ingress_congested: ingress.congested[idx],
            })
            .collect();

        debug!(
            t = now.secs(),
            on_platform = total,
            up_rate,
            down_rate,
            "tick"
        );

        TimeSeriesRecord {
            t_s: now.secs(),
            trains,
            up_rate,
            down_rate,
            arrived_on_platform: state.platform.arrived(),
            total_on_platform: total,
            space_per_pax: space,
            net_flow_rate,
            departed_total: state.departed,
            congested: egress.congested,
            platform_los: crowding_grade(space),
            egress_los: egress_grade(up_rate * 60.0 / width),
            vce_egress: self.stairs.attribute(up_rate),
        }
    }
}

/// 纯函数入口：同一配置总是得到同一记录序列。
#[tracing::instrument(skip(cfg), fields(scenario = cfg.name.as_deref().unwrap_or("-")))]
pub fn simulate(cfg: &ScenarioConfig) -> Result<RunOutput, ConfigError> {
    Ok(Simulator::new(cfg)?.run())
}
