//! 仿真时间类型
//!
//! 仿真以 1 秒为步长推进。

/// 仿真时间（整秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn from_secs(s: u64) -> SimTime {
        SimTime(s)
    }

    pub fn from_mins(m: u64) -> SimTime {
        SimTime(m.saturating_mul(60))
    }

    pub fn secs(self) -> u64 {
        self.0
    }

    /// 下一个 tick
    pub fn next(self) -> SimTime {
        SimTime(self.0.saturating_add(1))
    }
}
