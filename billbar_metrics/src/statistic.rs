use billbar_core::{BillingError, Metric, MetricsClient, Result, TimeWindow};
use tokio::sync::OnceCell;

/// The `Sum` of one metric over one window, fetched on first access.
pub struct Statistic<'a> {
    metric: &'a Metric,
    window: &'a TimeWindow,
    sum: OnceCell<Option<f64>>,
}

impl<'a> Statistic<'a> {
    pub fn new(metric: &'a Metric, window: &'a TimeWindow) -> Self {
        Self {
            metric,
            window,
            sum: OnceCell::new(),
        }
    }

    /// Sum of the first returned datapoint, or `None` when there are none.
    ///
    /// Only the first call reaches `client`; later calls return the cached
    /// value. A failed query leaves the cell empty.
    pub async fn sum<C>(&self, client: &C) -> Result<Option<f64>>
    where
        C: MetricsClient + ?Sized,
    {
        let sum = self
            .sum
            .get_or_try_init(|| async {
                let datapoints = client.get_sum(self.metric, self.window).await?;
                Ok::<_, BillingError>(datapoints.first().map(|d| d.sum))
            })
            .await?;
        Ok(*sum)
    }
}
