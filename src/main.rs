use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::EnvFilter;
use video_insights::api::{parse_comment_batch, AnalysisRequest, ErrorResponse};
use video_insights::config::AnalyticsConfig;
use video_insights::{AnalyticsError, Analyzer, Result};

#[derive(Parser)]
#[command(name = "video-insights", about = "Video engagement and comment analytics")]
struct Cli {
    /// TOML config file; defaults to $INSIGHTS_CONFIG_PATH or config/insights.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// CPM/RPM, earnings and revenue curves from `{stats, sentiment?, comments?}`.
    Earnings(InputArgs),
    /// Virality score, recommendations and growth chart from `{stats, sentiment?, comments?, timestamp?}`.
    Predict(InputArgs),
    /// Sentiment, emotion, spam, sarcasm and topic summary from an array of comments.
    Sentiment(SentimentArgs),
    /// Write the default configuration as TOML.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Read the JSON document from a file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug, Clone)]
struct SentimentArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Include per-comment classifications.
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/insights.toml")]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

fn main() {
    load_dotenv();
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!(error = %err, "analysis failed");
            let payload = serde_json::to_string(&ErrorResponse::from(&err))
                .unwrap_or_else(|_| format!("{{\"error\":{:?}}}", err.to_string()));
            println!("{}", payload);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Earnings(args) => {
            let analyzer = load_analyzer(cli.config)?;
            let request = AnalysisRequest::from_json(&read_document(args.input.as_deref())?)?;
            render(&analyzer.earnings(&request, Utc::now()), args.pretty)
        }
        Command::Predict(args) => {
            let analyzer = load_analyzer(cli.config)?;
            let request = AnalysisRequest::from_json(&read_document(args.input.as_deref())?)?;
            render(&analyzer.predict(&request, Utc::now()), args.pretty)
        }
        Command::Sentiment(args) => {
            let analyzer = load_analyzer(cli.config)?;
            let comments = parse_comment_batch(&read_document(args.input.input.as_deref())?)?;
            render(
                &analyzer.classify_comments(&comments, args.details),
                args.input.pretty,
            )
        }
        Command::InitConfig(args) => init_config(&args),
    }
}

fn load_analyzer(path: Option<PathBuf>) -> Result<Analyzer> {
    let (config, _) = AnalyticsConfig::load(path)?;
    Ok(Analyzer::new(&config))
}

fn init_config(args: &InitConfigArgs) -> Result<String> {
    if args.path.exists() && !args.force {
        return Err(AnalyticsError::Config(format!(
            "{} already exists (pass --force to overwrite)",
            args.path.display()
        )));
    }
    AnalyticsConfig::default().write(&args.path)?;
    Ok(format!("Wrote default config to {}", args.path.display()))
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(payload)
}

fn read_document(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
