//! 输出表格
//!
//! 把记录序列按固定列顺序展开成表格，供表格软件或绘图工具消费。

mod table;

pub use table::{Cell, ReportTable, parameter_rows};
