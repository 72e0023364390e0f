//! 行人流量经验公式
//!
//! HCM/TRB 密度-流量曲线：`P = (a·M − b) / M²`，M 为人均面积（sqft/pax），
//! P 为每英尺宽度每分钟通过人数。

mod curve;

pub use curve::{FlowCurve, FlowProfile, space_per_pax_for_flow};
