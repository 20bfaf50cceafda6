pub mod aggregator;
pub mod exporters;
pub mod statistic;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{AggregationResult, MetricsAggregator, ServiceCharge};
pub use statistic::Statistic;
