//! 场景配置
//!
//! 一次仿真的全部输入：站台尺寸、列车、竖向交通设施（VCE）与流量曲线。
//! 配置在运行前校验，运行期间只读。

mod config;
mod error;
pub mod presets;

pub use config::{
    AlightModel, MAX_TRAINS, PlatformSpec, ScenarioConfig, TrainConfig, VceElement, VceSpec,
};
pub use error::{ConfigError, ScenarioError};
