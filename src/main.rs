use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use nutriscan::config::AppConfig;
use nutriscan::error::AppError;
use nutriscan::screening::{ProfileSubmission, ScreeningEngine};
use nutriscan::{server, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "Nutrient Screening Service",
    about = "Score lifestyle questionnaires into nutrient deficiency reports, from HTTP or the command line",
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
    /// Score a single profile submission from a JSON file
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to a profile submission JSON file
    #[arg(long)]
    profile: PathBuf,
    /// Emit the raw report JSON instead of the rendered text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;
    server::run(config).await
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.profile)?;
    let submission: ProfileSubmission = serde_json::from_str(&raw)?;

    let engine = ScreeningEngine::standard();
    engine.catalog().verify_complete()?;
    let report = engine.score(submission)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }

    Ok(())
}
