//! 站台客流池
//!
//! 每次加减后把池钳制到非负；负值不会带入下一个 tick。

/// 站台上的客流池：已下车等待上楼的乘客，以及每列车的候车乘客。
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformAccumulator {
    arrived: f64,
    boarders: Vec<f64>,
}

impl PlatformAccumulator {
    /// `preloaded[i]` 为 t=0 时等候第 i 列车的人数。
    pub fn new(preloaded: impl IntoIterator<Item = f64>) -> Self {
        Self {
            arrived: 0.0,
            boarders: preloaded.into_iter().map(|p| p.max(0.0)).collect(),
        }
    }

    pub fn arrived(&self) -> f64 {
        self.arrived
    }

    pub fn boarders(&self, train: usize) -> f64 {
        self.boarders.get(train).copied().unwrap_or(0.0)
    }

    pub fn total_boarders(&self) -> f64 {
        self.boarders.iter().sum()
    }

    pub fn total(&self) -> f64 {
        self.arrived + self.total_boarders()
    }

    pub fn add_alighted(&mut self, pax: f64) {
        self.arrived = (self.arrived + pax).max(0.0);
    }

    pub fn remove_egress(&mut self, pax: f64) {
        self.arrived = (self.arrived - pax).max(0.0);
    }

    pub fn add_ingress(&mut self, train: usize, pax: f64) {
        if let Some(pool) = self.boarders.get_mut(train) {
            *pool = (*pool + pax).max(0.0);
        }
    }

    pub fn remove_boarded(&mut self, train: usize, pax: f64) {
        if let Some(pool) = self.boarders.get_mut(train) {
            *pool = (*pool - pax).max(0.0);
        }
    }
}
