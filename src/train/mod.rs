//! 列车上下车模型
//!
//! 下车流率受车门通过能力与车上剩余下车人数约束；上车流率共用同一车门预算，
//! 只在到站与发车之间的窗口内有效。

mod alight;
mod board;

pub use alight::{TrainDeboard, alight_rate};
pub use board::{TrainBoard, board_rate, boarder_fraction};
