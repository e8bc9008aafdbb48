use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;

use officialcharts::{ChartClient, ChartConfig};

/// Print the UK singles chart for a date as JSON.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(long)]
    day: i32,

    #[arg(long)]
    month: i32,

    #[arg(long)]
    year: i32,

    /// Site root the chart path is joined onto.
    #[arg(long, default_value = officialcharts::config::DEFAULT_BASE_URL)]
    base_url: url::Url,

    /// User-Agent header sent with the request.
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout.
    #[arg(long, default_value_t = officialcharts::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    officialcharts::logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let mut config = ChartConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(user_agent) = cli.user_agent {
        config = config.with_user_agent(user_agent);
    }

    let client = ChartClient::new(config).context("build http client")?;
    let chart = client
        .fetch_chart(cli.day, cli.month, cli.year)
        .await
        .context("getting chart")?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&chart)
    } else {
        serde_json::to_string(&chart)
    }
    .context("serialize chart")?;
    println!("{json}");

    Ok(())
}
