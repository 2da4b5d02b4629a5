use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rodcut_dp::verify::{crosscheck, Comparison};
use rodcut_dp::{RodError, RodInstance, RodSolver, SolveResult, SolverKind};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Optimal rod cutting from the command line.
#[derive(Parser)]
#[command(name = "rodcut", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one instance.
    Solve(SolveArgs),
    /// Solve the built-in reference instances with both strategies.
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Rod length.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    length: i64,

    /// Comma-separated prices; the i-th value is the price of a piece of length i.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    prices: Vec<i64>,

    #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Memo,
    Table,
    /// Run both and require equal profit.
    Both,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

struct DemoCase {
    name: &'static str,
    length: i64,
    prices: &'static [i64],
}

const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        name: "base case",
        length: 5,
        prices: &[2, 5, 7, 8, 10],
    },
    DemoCase {
        name: "selling whole is optimal",
        length: 3,
        prices: &[1, 3, 8],
    },
    DemoCase {
        name: "uniform cuts",
        length: 4,
        prices: &[3, 5, 6, 7],
    },
];

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Solve(args) => run_solve(&args),
        Command::Demo { format } => run_demo(format),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rodcut: {err:#}");
            match err.downcast_ref::<RodError>() {
                Some(rod) if rod.is_invalid_input() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_solve(args: &SolveArgs) -> Result<()> {
    let instance = RodInstance::new(args.length, &args.prices)?;
    tracing::info!(length = instance.length(), strategy = args.strategy_name(), "solving");
    match args.strategy {
        Strategy::Memo | Strategy::Table => {
            let kind = if args.strategy == Strategy::Memo {
                SolverKind::Memo
            } else {
                SolverKind::Table
            };
            let result = kind.solver().solve_instance(&instance)?;
            match args.format {
                Format::Text => print_result(kind.as_str(), &result),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Strategy::Both => {
            let cmp = crosscheck(&instance)?;
            match args.format {
                Format::Text => print_comparison(&cmp),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&comparison_json(instance.length(), &cmp))?
                ),
            }
        }
    }
    Ok(())
}

fn run_demo(format: Format) -> Result<()> {
    let mut reports = Vec::with_capacity(DEMO_CASES.len());
    for case in DEMO_CASES {
        let instance = RodInstance::new(case.length, case.prices)?;
        let cmp = crosscheck(&instance)?;
        match format {
            Format::Text => {
                println!("== {} ==", case.name);
                println!("length: {}", case.length);
                println!("prices: {:?}", case.prices);
                print_comparison(&cmp);
                println!();
            }
            Format::Json => {
                let mut report = comparison_json(instance.length(), &cmp);
                report["name"] = json!(case.name);
                report["prices"] = json!(case.prices);
                reports.push(report);
            }
        }
    }
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_result(label: &str, result: &SolveResult) {
    println!("[{label}]");
    println!("  max_profit:     {}", result.max_profit);
    println!("  cuts:           {:?}", &result.cuts[..]);
    println!("  number_of_cuts: {}", result.number_of_cuts);
}

fn print_comparison(cmp: &Comparison) {
    print_result("memo", &cmp.memo);
    print_result("table", &cmp.table);
    if cmp.plans_agree() {
        println!("profit agrees; plans identical");
    } else {
        println!("profit agrees; plans differ by tie-break");
    }
}

fn comparison_json(length: usize, cmp: &Comparison) -> serde_json::Value {
    json!({
        "length": length,
        "memo": cmp.memo,
        "table": cmp.table,
        "plans_agree": cmp.plans_agree(),
    })
}

impl SolveArgs {
    fn strategy_name(&self) -> &'static str {
        match self.strategy {
            Strategy::Memo => "memo",
            Strategy::Table => "table",
            Strategy::Both => "both",
        }
    }
}
