//! 仿真核心模块
//!
//! 此模块包含逐秒推进的仿真器、仿真状态、仿真时间与输出记录。

mod record;
mod simulator;
mod state;
mod time;

pub use record::{
    CLEAR_EPSILON, LOS_F_FLOW_PER_FT, RunOutput, RunSummary, TimeSeriesRecord, TrainSample,
};
pub use simulator::{RunPhase, Simulator, simulate};
pub use state::SimulationState;
pub use time::SimTime;
