//! Test double for `MetricsClient`.

use billbar_core::{
    async_trait, Datapoint, Metric, MetricFilter, MetricsClient, Result, TimeWindow,
};
use mockall::mock;

mock! {
    pub Client {}

    #[async_trait]
    impl MetricsClient for Client {
        async fn list_metrics(&self, filter: &MetricFilter) -> Result<Vec<Metric>>;
        async fn get_sum(&self, metric: &Metric, window: &TimeWindow) -> Result<Vec<Datapoint>>;
    }
}
