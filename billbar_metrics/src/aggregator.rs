use crate::statistic::Statistic;
use billbar_core::{Metric, MetricFilter, MetricsClient, Result, TimeWindow, TOTAL_LABEL};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCharge {
    pub label: String,
    pub sum: f64,
}

/// Charges keyed by service label, in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    charges: Vec<ServiceCharge>,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `label` to `sum`, returning the value it replaced. A replaced
    /// entry keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, sum: f64) -> Option<f64> {
        let label = label.into();
        match self.charges.iter_mut().find(|c| c.label == label) {
            Some(existing) => Some(std::mem::replace(&mut existing.sum, sum)),
            None => {
                self.charges.push(ServiceCharge { label, sum });
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.charges
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.sum)
    }

    pub fn total(&self) -> Option<f64> {
        self.get(TOTAL_LABEL)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceCharge> {
        self.charges.iter()
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }
}

pub struct MetricsAggregator;

impl MetricsAggregator {
    /// One `Sum` query per metric, grouped by service label.
    ///
    /// Metrics without datapoints are skipped. When two metrics share a
    /// label the later one overwrites the earlier value. The first client
    /// error aborts the whole aggregation.
    pub async fn aggregate<C>(
        client: &C,
        metrics: &[Metric],
        window: &TimeWindow,
    ) -> Result<AggregationResult>
    where
        C: MetricsClient + ?Sized,
    {
        let mut result = AggregationResult::new();

        for metric in metrics {
            let statistic = Statistic::new(metric, window);
            let label = metric.label();

            let Some(sum) = statistic.sum(client).await? else {
                debug!("No datapoints for '{}', skipping", label);
                continue;
            };

            if let Some(previous) = result.insert(label, sum) {
                debug!("Label '{}' seen twice, replacing {} with {}", label, previous, sum);
            }
        }

        Ok(result)
    }

    /// Lists the metrics matching `filter`, then aggregates them.
    pub async fn collect<C>(
        client: &C,
        filter: &MetricFilter,
        window: &TimeWindow,
    ) -> Result<AggregationResult>
    where
        C: MetricsClient + ?Sized,
    {
        let metrics = client.list_metrics(filter).await?;
        info!(
            "Aggregating {} {} metrics over {} seconds",
            metrics.len(),
            filter.metric_name,
            window.period_secs()
        );
        Self::aggregate(client, &metrics, window).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockClient;
    use billbar_core::{BillingError, Datapoint, Dimension};
    use chrono::{TimeZone, Utc};

    fn window() -> TimeWindow {
        TimeWindow::month_to_date(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()).unwrap()
    }

    fn service(name: &str) -> Metric {
        Metric::estimated_charges(vec![Dimension::service(name), Dimension::currency("USD")])
    }

    fn total(currency: &str) -> Metric {
        Metric::estimated_charges(vec![Dimension::currency(currency)])
    }

    /// Answers each query from the metric's label and currency.
    fn client_with(sums: &'static [(&'static str, &'static str, Option<f64>)]) -> MockClient {
        let mut client = MockClient::new();
        client.expect_get_sum().returning(move |metric, _| {
            let currency = metric.dimension("Currency").unwrap_or_default();
            let sum = sums
                .iter()
                .find(|(label, cur, _)| *label == metric.label() && *cur == currency)
                .and_then(|(_, _, sum)| *sum);
            Ok(sum.map(Datapoint::with_sum).into_iter().collect())
        });
        client
    }

    #[tokio::test]
    async fn test_empty_metrics() {
        let mut client = MockClient::new();
        client.expect_get_sum().never();

        let result = MetricsAggregator::aggregate(&client, &[], &window())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_service_and_total() {
        let client = client_with(&[("EC2", "USD", Some(12.5)), ("Total", "USD", Some(40.0))]);
        let metrics = vec![service("EC2"), total("USD")];

        let result = MetricsAggregator::aggregate(&client, &metrics, &window())
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("EC2"), Some(12.5));
        assert_eq!(result.get("Total"), Some(40.0));
        assert_eq!(result.total(), Some(40.0));
    }

    #[tokio::test]
    async fn test_empty_datapoints_dropped() {
        let client = client_with(&[
            ("AmazonEC2", "USD", Some(12.5)),
            ("AmazonS3", "USD", None),
            ("Total", "USD", Some(40.0)),
        ]);
        let metrics = vec![service("AmazonEC2"), service("AmazonS3"), total("USD")];

        let result = MetricsAggregator::aggregate(&client, &metrics, &window())
            .await
            .unwrap();

        assert_eq!(result.len(), metrics.len() - 1);
        assert_eq!(result.get("AmazonS3"), None);
    }

    #[tokio::test]
    async fn test_duplicate_label_last_write_wins() {
        let client = client_with(&[
            ("AWSLambda", "USD", Some(1.0)),
            ("Total", "USD", Some(40.0)),
            ("Total", "EUR", Some(37.0)),
        ]);
        let metrics = vec![total("USD"), service("AWSLambda"), total("EUR")];

        let result = MetricsAggregator::aggregate(&client, &metrics, &window())
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.total(), Some(37.0));
        let labels: Vec<_> = result.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Total", "AWSLambda"]);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let client = client_with(&[
            ("AmazonS3", "USD", Some(0.3)),
            ("AmazonEC2", "USD", Some(12.5)),
            ("AWSLambda", "USD", Some(0.01)),
        ]);
        let metrics = vec![service("AmazonS3"), service("AmazonEC2"), service("AWSLambda")];

        let result = MetricsAggregator::aggregate(&client, &metrics, &window())
            .await
            .unwrap();

        let labels: Vec<_> = result.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["AmazonS3", "AmazonEC2", "AWSLambda"]);
        assert_eq!(result.total(), None);
    }

    #[tokio::test]
    async fn test_client_error_propagates() {
        let mut client = MockClient::new();
        client
            .expect_get_sum()
            .times(1)
            .returning(|_, _| Err(BillingError::Config("aws unavailable".to_string())));

        let metrics = vec![service("AmazonEC2"), total("USD")];
        let result = MetricsAggregator::aggregate(&client, &metrics, &window()).await;

        assert!(matches!(result, Err(BillingError::Config(_))));
    }

    #[tokio::test]
    async fn test_collect_lists_then_queries_each_metric() {
        let mut client = client_with(&[("EC2", "USD", Some(12.5)), ("Total", "USD", Some(40.0))]);
        client
            .expect_list_metrics()
            .withf(|filter| {
                filter.namespace == "AWS/Billing"
                    && filter.dimensions == vec![Dimension::currency("USD")]
            })
            .times(1)
            .returning(|_| Ok(vec![service("EC2"), total("USD")]));

        let result = MetricsAggregator::collect(
            &client,
            &MetricFilter::estimated_charges("USD"),
            &window(),
        )
        .await
        .unwrap();

        assert_eq!(result.get("EC2"), Some(12.5));
        assert_eq!(result.get("Total"), Some(40.0));
    }

    #[test]
    fn test_result_insert_replaces_in_place() {
        let mut result = AggregationResult::new();
        assert_eq!(result.insert("Total", 1.0), None);
        assert_eq!(result.insert("AmazonEC2", 2.0), None);
        assert_eq!(result.insert("Total", 3.0), Some(1.0));

        assert_eq!(result.len(), 2);
        assert_eq!(result.iter().next().map(|c| c.sum), Some(3.0));
    }
}
