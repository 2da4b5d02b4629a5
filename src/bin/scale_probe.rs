use std::collections::BTreeMap;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rodcut_dp::utils::brute_force_profit;
use rodcut_dp::verify::crosscheck;
use rodcut_dp::{PriceTable, RodInstance, RodSolver, SolverKind};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::EnvFilter;

const SIZES: &[usize] = &[4, 8, 12, 16, 20, 64, 256, 512, 1024, 2048, 4096];

/// Time both rod-cutting strategies over growing rod lengths and verify them.
#[derive(Parser)]
#[command(name = "scale_probe", about)]
struct Options {
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest length verified against exhaustive enumeration.
    #[arg(long, default_value_t = 16)]
    verify_limit: usize,

    /// Skip sizes above this rod length.
    #[arg(long, default_value_t = 4096)]
    max_length: usize,

    /// Do not cross-check lengths above the verify limit.
    #[arg(long)]
    skip_crosscheck: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<()> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(measurements)?);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    length: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    max_profit: u64,
    pieces: usize,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let mut sys = System::new();
    let mut measurements = Vec::new();

    let sizes: Vec<usize> = SIZES
        .iter()
        .copied()
        .filter(|&len| len <= options.max_length)
        .collect();

    for (step, kind) in SolverKind::ALL.into_iter().enumerate() {
        eprintln!(
            "[{}/{}] Probing the {kind} strategy...",
            step + 1,
            SolverKind::ALL.len()
        );
        measurements.extend(run_solver(kind, &sizes, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err:#}");
        return ExitCode::FAILURE;
    }
    let failed = measurements
        .iter()
        .any(|m| m.status == VerificationStatus::Failed);
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_solver(
    kind: SolverKind,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let solver = kind.solver();
    let total = sizes.len();
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] length {}... ", idx + 1, total, len);
            let prices = deterministic_prices(len);
            let instance = match RodInstance::from_parts(len, PriceTable::new(prices.clone())) {
                Ok(instance) => instance,
                Err(err) => return failed(kind, len, err.to_string()),
            };

            let before = rss_kib(sys);
            let start = Instant::now();
            let outcome = solver.solve_instance(&instance);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let result = match outcome {
                Ok(result) => result,
                Err(err) => return failed(kind, len, err.to_string()),
            };

            let (status, detail) = if !result.is_consistent_with(len) {
                (
                    VerificationStatus::Failed,
                    Some(format!("inconsistent plan {:?}", &result.cuts[..])),
                )
            } else if len <= options.verify_limit {
                let baseline = brute_force_profit(len, &prices);
                if baseline == result.max_profit {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {baseline}, got {}", result.max_profit)),
                    )
                }
            } else if options.skip_crosscheck {
                (VerificationStatus::NotChecked, None)
            } else {
                match crosscheck(&instance) {
                    Ok(_) => (VerificationStatus::Passed, None),
                    Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
                }
            };

            eprintln!(
                "{} profit={}, pieces={}, time={:.3}s, status={}",
                status.icon(),
                result.max_profit,
                result.cuts.pieces(),
                wall_s,
                status.label()
            );

            Measurement {
                scenario: kind.as_str(),
                length: len,
                wall_s,
                rss_delta_kib,
                max_profit: result.max_profit,
                pieces: result.cuts.pieces(),
                status,
                detail,
            }
        })
        .collect()
}

fn failed(kind: SolverKind, length: usize, detail: String) -> Measurement {
    eprintln!("✗ {detail}");
    Measurement {
        scenario: kind.as_str(),
        length,
        wall_s: 0.0,
        rss_delta_kib: 0,
        max_profit: 0,
        pieces: 0,
        status: VerificationStatus::Failed,
        detail: Some(detail),
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |status: VerificationStatus| {
        measurements
            .iter()
            .filter(|m| m.status == status)
            .count()
    };
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked: {}",
        count(VerificationStatus::NotChecked)
    );
    eprintln!(
        "  (lengths <= {} checked by enumeration, larger ones by cross-check)",
        options.verify_limit
    );

    for m in measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  ✗ {} (length {}): {}",
            m.scenario,
            m.length,
            m.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: runs={}, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB", ms.len());
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,length,wall_s,rss_delta_kib,max_profit,pieces,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},{},{},\"{}\"",
            m.scenario,
            m.length,
            m.wall_s,
            m.rss_delta_kib,
            m.max_profit,
            m.pieces,
            m.status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<8}  {:>8}  {:>10}  {:>14}  {:>14}  {:>8}  {:<12}",
        "scenario", "length", "wall_s", "rss_delta_kib", "max_profit", "pieces", "status"
    );
    println!("{:-<8}  {:-<8}  {:-<10}  {:-<14}  {:-<14}  {:-<8}  {:-<12}", "", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<8}  {:>8}  {:>10.3}  {:>14}  {:>14}  {:>8}  {:<12}",
            m.scenario,
            m.length,
            m.wall_s,
            m.rss_delta_kib,
            m.max_profit,
            m.pieces,
            m.status.label()
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Prices with some superadditive lengths so optimal plans are non-trivial.
fn deterministic_prices(len: usize) -> Vec<u64> {
    (1..=len as u64)
        .map(|i| 3 * i + (i * i * 7) % 11)
        .collect()
}
