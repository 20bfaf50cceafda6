use crate::{
    client::{response, MetricsClient},
    config::ClientConfig,
    error::{BillingError, Result},
    metric::{Datapoint, Metric, MetricFilter},
    window::TimeWindow,
};
use async_trait::async_trait;
use chrono::SecondsFormat;
use tokio::process::Command;
use tracing::debug;

/// `MetricsClient` backed by the `aws cloudwatch` command-line tool.
pub struct AwsCliClient {
    config: ClientConfig,
}

impl Default for AwsCliClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AwsCliClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn list_metrics_args(&self, filter: &MetricFilter) -> Vec<String> {
        let mut args = vec![
            "cloudwatch".to_string(),
            "list-metrics".to_string(),
            "--namespace".to_string(),
            filter.namespace.clone(),
            "--metric-name".to_string(),
            filter.metric_name.clone(),
        ];
        if !filter.dimensions.is_empty() {
            args.push("--dimensions".to_string());
            args.extend(filter.dimensions.iter().map(|d| d.to_cli_arg()));
        }
        self.push_common(&mut args);
        args
    }

    pub fn statistics_args(&self, metric: &Metric, window: &TimeWindow) -> Vec<String> {
        let mut args = vec![
            "cloudwatch".to_string(),
            "get-metric-statistics".to_string(),
            "--namespace".to_string(),
            metric.namespace.clone(),
            "--metric-name".to_string(),
            metric.metric_name.clone(),
        ];
        if !metric.dimensions.is_empty() {
            args.push("--dimensions".to_string());
            args.extend(metric.dimensions.iter().map(|d| d.to_cli_arg()));
        }
        args.extend([
            "--start-time".to_string(),
            window.start().to_rfc3339_opts(SecondsFormat::Secs, true),
            "--end-time".to_string(),
            window.end().to_rfc3339_opts(SecondsFormat::Secs, true),
            "--period".to_string(),
            window.period_secs().to_string(),
            "--statistics".to_string(),
            "Sum".to_string(),
        ]);
        self.push_common(&mut args);
        args
    }

    fn push_common(&self, args: &mut Vec<String>) {
        args.extend([
            "--region".to_string(),
            self.config.region.clone(),
            "--output".to_string(),
            "json".to_string(),
        ]);
    }

    async fn run(&self, args: &[String]) -> Result<Vec<u8>> {
        let program = &self.config.aws_bin;
        debug!("Running {} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command.args(args);
        if let Some(path) = self.config.child_path(std::env::var_os("PATH"))? {
            command.env("PATH", path);
        }

        let output = command
            .output()
            .await
            .map_err(|source| BillingError::CommandSpawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BillingError::CommandFailed {
                program: program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl MetricsClient for AwsCliClient {
    async fn list_metrics(&self, filter: &MetricFilter) -> Result<Vec<Metric>> {
        let body = self.run(&self.list_metrics_args(filter)).await?;
        let metrics = response::parse_list_metrics(&body)?;
        debug!("Listed {} metrics in {}", metrics.len(), filter.namespace);
        Ok(metrics)
    }

    async fn get_sum(&self, metric: &Metric, window: &TimeWindow) -> Result<Vec<Datapoint>> {
        let body = self.run(&self.statistics_args(metric, window)).await?;
        response::parse_statistics(&body)
    }
}
