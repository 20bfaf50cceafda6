use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BILLING_NAMESPACE: &str = "AWS/Billing";
pub const ESTIMATED_CHARGES: &str = "EstimatedCharges";
pub const SERVICE_NAME_DIMENSION: &str = "ServiceName";
pub const CURRENCY_DIMENSION: &str = "Currency";

/// Label used for metrics that carry no service dimension.
pub const TOTAL_LABEL: &str = "Total";

/// A single key/value tag on a metric, e.g. `ServiceName=AmazonEC2`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn service(value: impl Into<String>) -> Self {
        Self::new(SERVICE_NAME_DIMENSION, value)
    }

    pub fn currency(value: impl Into<String>) -> Self {
        Self::new(CURRENCY_DIMENSION, value)
    }

    /// Shorthand form understood by the AWS CLI.
    pub fn to_cli_arg(&self) -> String {
        format!("Name={},Value={}", self.name, self.value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    pub namespace: String,
    pub metric_name: String,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

impl Metric {
    pub fn new(
        namespace: impl Into<String>,
        metric_name: impl Into<String>,
        dimensions: Vec<Dimension>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            metric_name: metric_name.into(),
            dimensions,
        }
    }

    /// An `AWS/Billing` `EstimatedCharges` metric with the given dimensions.
    pub fn estimated_charges(dimensions: Vec<Dimension>) -> Self {
        Self::new(BILLING_NAMESPACE, ESTIMATED_CHARGES, dimensions)
    }

    pub fn dimension(&self, name: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    pub fn service_name(&self) -> Option<&str> {
        self.dimension(SERVICE_NAME_DIMENSION)
    }

    /// The grouping key used in reports: the service name, or `Total`.
    pub fn label(&self) -> &str {
        self.service_name().unwrap_or(TOTAL_LABEL)
    }
}

/// One value returned by a statistics query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Datapoint {
    pub sum: f64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Datapoint {
    pub fn with_sum(sum: f64) -> Self {
        Self {
            sum,
            timestamp: None,
            unit: None,
        }
    }
}

/// Selects metrics by namespace, name and a possibly partial dimension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFilter {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
}

impl MetricFilter {
    pub fn estimated_charges(currency: impl Into<String>) -> Self {
        Self {
            namespace: BILLING_NAMESPACE.to_string(),
            metric_name: ESTIMATED_CHARGES.to_string(),
            dimensions: vec![Dimension::currency(currency)],
        }
    }
}
