use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use incentive_engine::api::{AppState, create_router};
use incentive_engine::calculation::evaluate;
use incentive_engine::config::{ConfigLoader, ServiceConfig};
use incentive_engine::error::EngineError;
use incentive_engine::models::{
    Designation, EvaluationResult, Metric, MetricInput, parse_achievement_pct,
};
use incentive_engine::telemetry;
use rust_decimal::Decimal;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "incentive-engine",
    about = "Score branch manager performance and resolve the incentive earned",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate one manager and print the result
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Path to the YAML service configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Designation, e.g. "BRANCH MANAGER" or branch_manager
    #[arg(long, value_parser = parse_designation)]
    designation: Designation,
    /// Total turnover achievement %
    #[arg(long, default_value = "100", value_parser = parse_pct, allow_negative_numbers = true)]
    total_turnover: Decimal,
    /// Studded turnover achievement %
    #[arg(long, default_value = "100", value_parser = parse_pct, allow_negative_numbers = true)]
    studded_turnover: Decimal,
    /// DTSO (AKT) achievement %
    #[arg(long, default_value = "100", value_parser = parse_pct, allow_negative_numbers = true)]
    dtso: Decimal,
    /// Scheme registration achievement %
    #[arg(long, default_value = "100", value_parser = parse_pct, allow_negative_numbers = true)]
    scheme_registration: Decimal,
    /// DMD turnover achievement %
    #[arg(long, default_value = "100", value_parser = parse_pct, allow_negative_numbers = true)]
    dmd_turnover: Decimal,
    /// Print the full evaluation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_designation(raw: &str) -> Result<Designation, String> {
    raw.parse::<Designation>().map_err(|err| err.to_string())
}

fn parse_pct(raw: &str) -> Result<Decimal, String> {
    parse_achievement_pct(raw).ok_or_else(|| format!("'{raw}' is not an achievement percentage"))
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args),
        Command::Evaluate(args) => run_evaluate(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ServiceConfig, EngineError> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(ServiceConfig::default()),
    }
}

#[tokio::main]
async fn run_server(mut args: ServeArgs) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_ref())?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    let config = ConfigLoader::from_config(config)?.into_config();

    telemetry::init(&config.telemetry)?;

    let app = create_router(AppState::default());
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "incentive engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    let input = MetricInput {
        total_turnover: args.total_turnover,
        studded_turnover: args.studded_turnover,
        dtso: args.dtso,
        scheme_registration: args.scheme_registration,
        dmd_turnover: args.dmd_turnover,
    };

    let result = evaluate(args.designation, &input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

fn render_report(result: &EvaluationResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Designation:      {}\n", result.designation));
    out.push_str(&format!(
        "Total score:      {} / {} ({}%)\n",
        result.total_score.normalize(),
        result.max_score.normalize(),
        result.score_progress_percent
    ));
    out.push_str(&format!(
        "Performance:      {}\n",
        result.performance_level.label()
    ));
    out.push_str(&format!("Incentive earned: ₹{}\n", result.incentive_amount));
    out.push_str(&format!("Slab applied:     {}\n", result.slab.label()));
    out.push_str("Marks breakdown:\n");
    for metric in Metric::ALL {
        out.push_str(&format!(
            "  {:<20} {}\n",
            metric.name(),
            result.marks_breakdown.get(metric).normalize()
        ));
    }
    for warning in &result.audit_trace.warnings {
        out.push_str(&format!("WARNING: {}\n", warning.message));
    }
    out
}
