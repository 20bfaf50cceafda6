//! Response bodies printed by `aws cloudwatch ... --output json`.

use crate::{
    error::Result,
    metric::{Datapoint, Metric},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMetricsResponse {
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricStatisticsResponse {
    #[serde(default)]
    pub label: Option<String>,
    pub datapoints: Vec<Datapoint>,
}

pub fn parse_list_metrics(body: &[u8]) -> Result<Vec<Metric>> {
    let response: ListMetricsResponse = serde_json::from_slice(body)?;
    Ok(response.metrics)
}

pub fn parse_statistics(body: &[u8]) -> Result<Vec<Datapoint>> {
    let response: MetricStatisticsResponse = serde_json::from_slice(body)?;
    Ok(response.datapoints)
}
