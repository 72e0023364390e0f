//! 批量场景扫描
//!
//! 并行运行一组场景，每个场景输出一行汇总。

use clap::Parser;
use platsim_rs::batch::run_batch;
use platsim_rs::scenario::{ScenarioConfig, presets};
use platsim_rs::sim::RunSummary;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Debug, Parser)]
#[command(name = "sweep", about = "并行运行多个站台场景并打印汇总")]
struct Args {
    /// 场景数组 JSON 文件；与 --preset 都缺省时运行全部内置预设
    #[arg(long, conflicts_with = "preset")]
    scenarios: Option<PathBuf>,
    /// 只运行指定的内置预设（可重复）
    #[arg(long)]
    preset: Vec<String>,
    /// 覆盖所有场景的仿真时长（秒）
    #[arg(long)]
    horizon_s: Option<u64>,
    /// 输出汇总数组（JSON）
    #[arg(long)]
    json: Option<PathBuf>,
    /// 不打印逐场景汇总行
    #[arg(long)]
    quiet: bool,
}

fn load(args: &Args) -> Result<Vec<ScenarioConfig>, String> {
    let mut scenarios = match &args.scenarios {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("read {}: {e}", path.display()))?;
            serde_json::from_str::<Vec<ScenarioConfig>>(&raw)
                .map_err(|e| format!("parse {}: {e}", path.display()))?
        }
        None if args.preset.is_empty() => presets::all().map_err(|e| e.to_string())?,
        None => args
            .preset
            .iter()
            .map(|name| presets::by_name(name))
            .collect::<Result<_, _>>()
            .map_err(|e| e.to_string())?,
    };
    if let Some(horizon_s) = args.horizon_s {
        for cfg in &mut scenarios {
            cfg.horizon_s = horizon_s;
        }
    }
    Ok(scenarios)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let scenarios = match load(&args) {
        Ok(s) => s,
        Err(e) => {
            error!(%e, "加载场景失败");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut summaries: Vec<RunSummary> = Vec::with_capacity(scenarios.len());
    let mut failed = 0usize;
    for (idx, result) in run_batch(&scenarios).into_iter().enumerate() {
        let name = scenarios[idx].name.clone().unwrap_or_else(|| format!("#{idx}"));
        match result {
            Ok(out) => {
                let s = &out.summary;
                if !args.quiet {
                    println!(
                        "summary {name} peak_on_platform={:.1} min_space_per_pax={:.1} worst_los={}/{} clearance_s={} emergency_egress_s={:.1}",
                        s.peak_on_platform,
                        s.min_space_per_pax,
                        s.worst_platform_los,
                        s.worst_egress_los,
                        s.clearance_s.map_or_else(|| "none".to_string(), |t| t.to_string()),
                        s.emergency_egress_s,
                    );
                }
                summaries.push(out.summary);
            }
            Err(e) => {
                failed += 1;
                warn!(scenario = %name, %e, "场景无效，跳过");
                if !args.quiet {
                    println!("invalid {name}: {e}");
                }
            }
        }
    }

    if let Some(path) = &args.json {
        let encoded = serde_json::to_string_pretty(&summaries)
            .map_err(|e| e.to_string())
            .and_then(|raw| fs::write(path, raw).map_err(|e| e.to_string()));
        if let Err(e) = encoded {
            error!(%e, "写出汇总失败");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
