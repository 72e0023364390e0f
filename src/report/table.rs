use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::scenario::ScenarioConfig;
use crate::sim::{RunOutput, RunSummary, TimeSeriesRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(u64),
    Num(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Num(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// 列顺序固定的时序表。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    /// 列：时间、各列车车上人数、各列车下车/上车流率、下行/上行流率、各列车候车人数、
    /// 到达池、站台总人数、人均面积、净流率、两项 LOS，最后是各 VCE 流率。
    pub fn from_output(cfg: &ScenarioConfig, out: &RunOutput) -> Self {
        let trains = cfg.trains.len();
        let per_train = |label: fn(usize) -> String| (1..=trains).map(label);

        let mut columns = vec!["Time after arrival (s)".to_string()];
        columns.extend(per_train(|i| format!("Passengers on Train {i}")));
        columns.extend(per_train(|i| format!("Train {i} Alight Rate (pax/s)")));
        columns.extend(per_train(|i| format!("Train {i} Board Rate (pax/s)")));
        columns.push("Downstairs Rate (pax/s)".into());
        columns.push("Upstairs Rate (pax/s)".into());
        columns.extend(per_train(|i| {
            format!("Train {i} Departing Passengers on Platform")
        }));
        columns.push("Arrived Passengers on Platform".into());
        columns.push("Total Passengers on Platform".into());
        columns.push("Platform Space per Passenger (sqft)".into());
        columns.push("Net Platform Flow Rate".into());
        columns.push("Platform Crowding LOS".into());
        columns.push("Egress LOS".into());
        columns.extend((1..=cfg.vce.elements.len()).map(|j| format!("VCE {j} Egress (pax/s)")));

        let rows = out.records.iter().map(row).collect();
        Self { columns, rows }
    }

    /// 逗号分隔文本，首行为列名。
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, &self.columns);
        for row in &self.rows {
            push_line(&mut out, row.iter().map(Cell::to_string));
        }
        out
    }
}

fn row(rec: &TimeSeriesRecord) -> Vec<Cell> {
    let mut cells = vec![Cell::Int(rec.t_s)];
    cells.extend(rec.trains.iter().map(|t| Cell::Num(t.onboard)));
    cells.extend(rec.trains.iter().map(|t| Cell::Num(t.alight_rate)));
    cells.extend(rec.trains.iter().map(|t| Cell::Num(t.board_rate)));
    cells.push(Cell::Num(rec.down_rate));
    cells.push(Cell::Num(rec.up_rate));
    cells.extend(rec.trains.iter().map(|t| Cell::Num(t.boarders_on_platform)));
    cells.push(Cell::Num(rec.arrived_on_platform));
    cells.push(Cell::Num(rec.total_on_platform));
    cells.push(Cell::Num(rec.space_per_pax));
    cells.push(Cell::Num(rec.net_flow_rate));
    cells.push(Cell::Text(rec.platform_los.to_string()));
    cells.push(Cell::Text(rec.egress_los.to_string()));
    cells.extend(rec.vce_egress.iter().map(|v| Cell::Num(*v)));
    cells
}

fn push_line<S: AsRef<str>>(out: &mut String, fields: impl IntoIterator<Item = S>) {
    for (i, field) in fields.into_iter().enumerate() {
        let field = field.as_ref();
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n']) {
            let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

/// 参数表：（说明，值）。
pub fn parameter_rows(cfg: &ScenarioConfig, summary: &RunSummary) -> Vec<(String, Cell)> {
    let mut rows = vec![
        ("Platform width (ft)".to_string(), Cell::Num(cfg.platform.width_ft)),
        ("Platform length (ft)".to_string(), Cell::Num(cfg.platform.length_ft)),
        ("Total VCE width (ft)".to_string(), Cell::Num(cfg.vce.total_width_ft)),
        (
            "Effective Area Multiplier".to_string(),
            Cell::Num(cfg.platform.area_multiplier),
        ),
        ("Usable Platform Area (sqft)".to_string(), Cell::Num(cfg.usable_area())),
    ];
    for (idx, train) in cfg.trains.iter().enumerate() {
        let n = idx + 1;
        rows.push((format!("Train {n} Arriving Passengers"), Cell::Num(train.arriving_pax)));
        rows.push((format!("Train {n} Departing Passengers"), Cell::Num(train.departing_pax)));
        rows.push((format!("Train {n} Arrival Time"), Cell::Int(train.arrival_s)));
    }
    rows.push(("Simulation Length (s)".to_string(), Cell::Int(cfg.horizon_s)));
    rows.push((
        "LOS F Egress Rate (pax/s)".to_string(),
        Cell::Num(summary.los_f_egress_rate),
    ));
    rows.push((
        "Emergency Egress Time (s)".to_string(),
        Cell::Num(summary.emergency_egress_s),
    ));
    rows
}
