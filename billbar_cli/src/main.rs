mod config;
mod report;

use billbar_core::config::{
    ClientConfig, DEFAULT_AWS_BIN, DEFAULT_CURRENCY, DEFAULT_REGION, DEFAULT_SEARCH_PATH,
};
use billbar_metrics::exporters::MenuBarOptions;
use chrono::{DateTime, Utc};
use clap::Parser;
use crate::config::EmbeddedConfig;
use crate::report::{OutputFormat, ReportOptions};
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "billbar")]
#[command(about = "Month-to-date AWS estimated charges for your menu bar", long_about = None)]
#[command(version)]
struct Cli {
    /// Region hosting the billing metrics
    #[arg(long, env = "BILLBAR_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Currency dimension to filter on
    #[arg(long, env = "BILLBAR_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Name or path of the AWS CLI executable
    #[arg(long, env = "BILLBAR_AWS_BIN", default_value = DEFAULT_AWS_BIN)]
    aws_bin: String,

    /// Directory prepended to PATH when locating the AWS CLI
    #[arg(long, env = "BILLBAR_SEARCH_PATH", default_value = DEFAULT_SEARCH_PATH)]
    search_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Menubar)]
    format: OutputFormat,

    /// End of the reporting window (RFC 3339), defaults to now
    #[arg(long)]
    as_of: Option<DateTime<Utc>>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the menu-bar host, logs go to stderr
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let embedded = EmbeddedConfig::load()?;
    debug!("Embedded icon present: {}", embedded.icon.is_some());

    let options = ReportOptions {
        client: ClientConfig {
            region: cli.region,
            currency: cli.currency,
            aws_bin: cli.aws_bin,
            search_path: Some(cli.search_path),
        },
        format: cli.format,
        as_of: cli.as_of,
        menubar: MenuBarOptions {
            icon: embedded.icon,
            ..Default::default()
        },
    };

    report::execute(options).await
}
