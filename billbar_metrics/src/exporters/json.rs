use crate::aggregator::{AggregationResult, ServiceCharge};
use anyhow::Result;
use billbar_core::TimeWindow;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BillingReport {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period_secs: i64,
    pub total: Option<f64>,
    pub charges: Vec<ServiceCharge>,
}

impl BillingReport {
    pub fn new(window: &TimeWindow, result: &AggregationResult) -> Self {
        Self {
            start: window.start(),
            end: window.end(),
            period_secs: window.period_secs(),
            total: result.total(),
            charges: result.iter().cloned().collect(),
        }
    }
}

pub struct JsonExporter;

impl JsonExporter {
    pub fn to_string(window: &TimeWindow, result: &AggregationResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(&BillingReport::new(window, result))?)
    }
}
