//! 站台客流仿真
//!
//! 运行单个场景（JSON 文件或内置预设），打印汇总，可选导出 CSV/JSON。

use clap::Parser;
use platsim_rs::report::{ReportTable, parameter_rows};
use platsim_rs::scenario::{ScenarioConfig, ScenarioError, presets};
use platsim_rs::sim::{RunOutput, simulate};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "platform-sim", about = "站台客流仿真：列车下车 → 站台 → 楼梯")]
struct Args {
    /// 场景 JSON 文件
    #[arg(long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,
    /// 内置预设名称（见 --list-presets）
    #[arg(long)]
    preset: Option<String>,
    /// 覆盖仿真时长（秒）
    #[arg(long)]
    horizon_s: Option<u64>,
    /// 输出逐秒表格（CSV）
    #[arg(long)]
    csv: Option<PathBuf>,
    /// 输出汇总与逐秒记录（JSON）
    #[arg(long)]
    json: Option<PathBuf>,
    /// 逐秒打印站台状态
    #[arg(long)]
    ticks: bool,
    /// 不打印参数表与汇总
    #[arg(long)]
    quiet: bool,
    /// 列出内置预设后退出
    #[arg(long)]
    list_presets: bool,
}

fn load(args: &Args) -> Result<ScenarioConfig, ScenarioError> {
    let mut cfg = match (&args.scenario, &args.preset) {
        (Some(path), _) => ScenarioConfig::read_path(path)?,
        (None, Some(name)) => presets::by_name(name)?,
        (None, None) => presets::one_train_1600(),
    };
    if let Some(horizon_s) = args.horizon_s {
        cfg.horizon_s = horizon_s;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn write_outputs(args: &Args, cfg: &ScenarioConfig, out: &RunOutput) -> Result<(), String> {
    if let Some(path) = &args.csv {
        let table = ReportTable::from_output(cfg, out);
        fs::write(path, table.to_csv()).map_err(|e| format!("write {}: {e}", path.display()))?;
    }
    if let Some(path) = &args.json {
        let raw = serde_json::to_string_pretty(out).map_err(|e| format!("encode json: {e}"))?;
        fs::write(path, raw).map_err(|e| format!("write {}: {e}", path.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    if args.list_presets {
        for name in presets::NAMES {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let cfg = match load(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(%e, "加载场景失败");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let out = match simulate(&cfg) {
        Ok(out) => out,
        Err(e) => {
            error!(%e, "场景校验失败");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if args.ticks {
        for rec in &out.records {
            let onboard: Vec<String> = rec
                .trains
                .iter()
                .map(|t| format!("{:.1}", t.onboard))
                .collect();
            println!(
                "tick t={} onboard=[{}] arrived={:.2} total={:.2} up={:.3} down={:.3} space={:.1} los={}/{}",
                rec.t_s,
                onboard.join(","),
                rec.arrived_on_platform,
                rec.total_on_platform,
                rec.up_rate,
                rec.down_rate,
                rec.space_per_pax,
                rec.platform_los,
                rec.egress_los,
            );
        }
    }

    if !args.quiet {
        print_summary(&cfg, &out);
    }

    if let Err(e) = write_outputs(&args, &cfg, &out) {
        error!(%e, "写出结果失败");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_summary(cfg: &ScenarioConfig, out: &RunOutput) {
    for (label, value) in parameter_rows(cfg, &out.summary) {
        println!("{label}: {value}");
    }
    let s = &out.summary;
    println!(
        "done @ {}s, peak_on_platform={:.1} (t={}s), min_space_per_pax={:.1}, worst_los={}/{}, clearance_s={}, departed={:.1}, boarded={:.1}",
        s.horizon_s,
        s.peak_on_platform,
        s.peak_at_s,
        s.min_space_per_pax,
        s.worst_platform_los,
        s.worst_egress_los,
        s.clearance_s.map_or_else(|| "none".to_string(), |t| t.to_string()),
        s.total_departed,
        s.total_boarded,
    );
    println!(
        "LOS F egress rate is {:.3} pax/s. Emergency egress time is roughly {:.1} s.",
        s.los_f_egress_rate, s.emergency_egress_s
    );
}
