//! 配置与加载错误

use thiserror::Error;

/// 运行前的配置校验错误（任何 tick 之前即失败）。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("simulation horizon must be at least 1 s")]
    EmptyHorizon,

    #[error("scenario needs 1 or 2 trains, got {0}")]
    TrainCount(usize),

    #[error("train {train}: {preloaded} preloaded boarders exceed {departing} departing pax")]
    PreloadedExceedsDeparting {
        train: usize,
        preloaded: f64,
        departing: f64,
    },

    #[error("train {train}: departure at {departure_s} s is not after arrival at {arrival_s} s")]
    DepartureBeforeArrival {
        train: usize,
        arrival_s: u64,
        departure_s: u64,
    },

    #[error("flow curve `{0}` needs finite coefficients, a > 0 and 0 <= floor <= ceiling")]
    FlowCurve(&'static str),

    #[error("VCE element {index}: width must be positive and weight non-negative")]
    VceElement { index: usize },

    #[error("VCE elements carry no width-weighted capacity")]
    VceWeightsVanish,
}

/// 场景加载错误（文件、JSON、预设名、校验）。
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("read scenario file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("invalid scenario: {0}")]
    Invalid(#[from] ConfigError),
}
