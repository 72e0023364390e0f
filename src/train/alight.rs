use crate::flow::FlowCurve;
use crate::scenario::{AlightModel, TrainConfig};
use crate::sim::SimTime;

/// 当前 tick 的下车流率（pax/s）。
///
/// 到站前或车上已无待下车乘客时为 0；否则为 `min(remaining, 车门通过能力)`。
pub fn alight_rate(train: &TrainConfig, door: &FlowCurve, remaining: f64, now: SimTime) -> f64 {
    if now.secs() < train.arrival_s || remaining <= 0.0 {
        return 0.0;
    }
    let throughput = match train.alighting {
        AlightModel::DoorThroughput => train.door_capacity_pax_s,
        AlightModel::Bidirectional {
            interior_area_sqft,
            door_width_ft,
        } => door.rate(interior_area_sqft, remaining, door_width_ft),
    };
    remaining.min(throughput).max(0.0)
}

/// 单列车的待下车计数。
#[derive(Debug, Clone, PartialEq)]
pub struct TrainDeboard {
    remaining: f64,
}

impl TrainDeboard {
    pub fn new(arriving_pax: f64) -> Self {
        Self {
            remaining: arriving_pax.max(0.0),
        }
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining <= 0.0
    }

    /// 推进一个 tick，返回本 tick 的下车流率。
    pub fn step(&mut self, train: &TrainConfig, door: &FlowCurve, now: SimTime) -> f64 {
        if self.is_done() {
            return 0.0;
        }
        let rate = alight_rate(train, door, self.remaining, now);
        self.remaining = (self.remaining - rate).max(0.0);
        rate
    }
}
