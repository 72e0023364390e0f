//! 批量场景扫描
//!
//! 每个场景独占自己的配置与状态，互不共享可变数据，可直接并行。

use rayon::prelude::*;
use tracing::info;

use crate::scenario::{ConfigError, ScenarioConfig};
use crate::sim::{RunOutput, simulate};

/// 并行运行所有场景，结果顺序与输入一致。
pub fn run_batch(scenarios: &[ScenarioConfig]) -> Vec<Result<RunOutput, ConfigError>> {
    info!(scenarios = scenarios.len(), "批量运行场景");
    scenarios.par_iter().map(simulate).collect()
}
