use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use gw_scout::commands::CommandHandler;
use gw_scout::config::ScoutConfig;
use gw_scout::engine::ReportAssembler;
use gw_scout::network::FastClient;
use gw_scout::ops::telemetry;
use gw_scout::sink::StdoutSink;
use gw_scout::ScoutError;

/// Runs one chat command (e.g. `$gw Blue Knights`) and prints the replies
#[derive(Parser, Debug)]
#[command(name = "gw-scout", version, about)]
struct Cli {
    /// Command text; words are joined with spaces
    #[arg(required = true, allow_hyphen_values = true)]
    message: Vec<String>,

    /// Own crew ID, overrides GW_SCOUT_MY_GUILD
    #[arg(long)]
    my_guild: Option<String>,

    /// Human-readable logs instead of JSON
    #[arg(long)]
    pretty: bool,

    /// Print collected metrics after the run
    #[arg(long)]
    metrics: bool,
}

async fn run(cli: Cli) -> Result<(), ScoutError> {
    let mut config = ScoutConfig::from_env()?;
    if let Some(id) = cli.my_guild {
        config = config.with_my_guild(id);
    }

    let client = Arc::new(FastClient::new(&config.search_url, config.request_timeout)?);
    let assembler = ReportAssembler::new(config, client.clone(), client, Arc::new(StdoutSink));
    let handler = CommandHandler::new(assembler);

    let text = cli.message.join(" ");
    match handler.handle(&text).await? {
        Some(summary) => tracing::info!(?summary, "Done"),
        None => tracing::debug!(text, "No report produced"),
    }

    if cli.metrics {
        println!("{}", telemetry::get_metrics_string());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.pretty {
        telemetry::init_tracing_pretty();
    } else {
        telemetry::init_tracing();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gw-scout failed");
            ExitCode::FAILURE
        }
    }
}
