pub mod client;
pub mod config;
pub mod error;
pub mod metric;
pub mod window;

pub use client::{AwsCliClient, MetricsClient};
pub use config::ClientConfig;
pub use error::{BillingError, Result};
pub use metric::{Datapoint, Dimension, Metric, MetricFilter, TOTAL_LABEL};
pub use window::TimeWindow;

// Re-export commonly used types
pub use async_trait::async_trait;
