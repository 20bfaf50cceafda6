use anyhow::Result;
use billbar_core::{AwsCliClient, ClientConfig, MetricFilter, TimeWindow};
use billbar_metrics::{
    exporters::{JsonExporter, MenuBarExporter, MenuBarOptions, TableExporter},
    AggregationResult, MetricsAggregator,
};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text block for BitBar/xbar style menu-bar hosts
    Menubar,
    /// Human readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

pub struct ReportOptions {
    pub client: ClientConfig,
    pub format: OutputFormat,
    pub as_of: Option<DateTime<Utc>>,
    pub menubar: MenuBarOptions,
}

pub async fn execute(options: ReportOptions) -> Result<()> {
    options.client.validate()?;

    let now = options.as_of.unwrap_or_else(Utc::now);
    let window = TimeWindow::month_to_date(now)?;

    let client = AwsCliClient::new(options.client);
    let filter = MetricFilter::estimated_charges(client.config().currency.clone());

    info!(
        "Querying {} in {} from {} to {}",
        filter.metric_name,
        client.config().region,
        window.start(),
        window.end()
    );

    let result = MetricsAggregator::collect(&client, &filter, &window).await?;
    print!("{}", render(options.format, &window, &result, &options.menubar)?);

    Ok(())
}

fn render(
    format: OutputFormat,
    window: &TimeWindow,
    result: &AggregationResult,
    menubar: &MenuBarOptions,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Menubar => MenuBarExporter::format(window, result, menubar),
        OutputFormat::Table => TableExporter::format(window, result),
        OutputFormat::Json => JsonExporter::to_string(window, result)? + "\n",
    })
}
