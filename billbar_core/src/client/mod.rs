pub mod aws_cli;
pub mod response;

use crate::{
    error::Result,
    metric::{Datapoint, Metric, MetricFilter},
    window::TimeWindow,
};
use async_trait::async_trait;

pub use aws_cli::AwsCliClient;
pub use response::{ListMetricsResponse, MetricStatisticsResponse};

/// Source of billing metrics and their statistics.
#[async_trait]
pub trait MetricsClient: Send + Sync {
    /// All metrics matching the namespace, name and dimension filter.
    async fn list_metrics(&self, filter: &MetricFilter) -> Result<Vec<Metric>>;

    /// `Sum` datapoints for `metric`, bucketed over the whole window.
    async fn get_sum(&self, metric: &Metric, window: &TimeWindow) -> Result<Vec<Datapoint>>;
}
