//! 站台：客流池、楼梯流量控制与服务水平评级

mod accumulator;
mod los;
mod stairwell;

pub use accumulator::PlatformAccumulator;
pub use los::{LosGrade, crowding_grade, egress_grade, space_per_pax};
pub use stairwell::{EgressFlow, IngressFlow, StairwellFlowController};
