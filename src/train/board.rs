use crate::sim::SimTime;

/// 两列车竞争下行宽度时 A 车所占比例；两者都为 0 时记为 1。
pub fn boarder_fraction(a: f64, b: f64) -> f64 {
    if a + b > 0.0 { a / (a + b) } else { 1.0 }
}

/// 当前 tick 的上车流率（pax/s）。
///
/// 仅在 `arrival < now < departure` 内有效；车门预算先扣除同一 tick 的下车流率。
pub fn board_rate(
    door_capacity: f64,
    alight_rate: f64,
    now: SimTime,
    arrival_s: u64,
    departure_s: u64,
    waiting: f64,
) -> f64 {
    let t = now.secs();
    if t <= arrival_s || t >= departure_s || waiting <= 0.0 {
        return 0.0;
    }
    (door_capacity - alight_rate).min(waiting).max(0.0)
}

/// 单列车的上车需求计数。
///
/// `upstairs` 是尚未下到站台的乘客；已在站台等候的乘客由站台池统计。
#[derive(Debug, Clone, PartialEq)]
pub struct TrainBoard {
    upstairs: f64,
    boarded: f64,
}

impl TrainBoard {
    pub fn new(departing_pax: f64, preloaded: f64) -> Self {
        Self {
            upstairs: (departing_pax - preloaded).max(0.0),
            boarded: 0.0,
        }
    }

    pub fn upstairs(&self) -> f64 {
        self.upstairs
    }

    pub fn boarded(&self) -> f64 {
        self.boarded
    }

    /// 下行进入站台的乘客离开站厅。
    pub fn descend(&mut self, pax: f64) {
        self.upstairs = (self.upstairs - pax).max(0.0);
    }

    pub fn record_boarded(&mut self, pax: f64) {
        self.boarded += pax.max(0.0);
    }
}
