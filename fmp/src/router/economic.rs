use fmp_core::{EconomicDataPoint, EconomicIndicators, EconomicSeries, Endpoint};

use crate::FmpApiService;
use crate::fanout::FanOut;

impl FmpApiService {
    /// GDP, CPI, unemployment rate and federal funds rate.
    ///
    /// The four series are fetched concurrently; any series that fails is
    /// returned empty. This call does not fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fmp::router", skip(self))
    )]
    pub async fn economic_indicators(&self) -> EconomicIndicators {
        let fan = EconomicSeries::ALL
            .into_iter()
            .fold(FanOut::new(), |fan, series| {
                let endpoint = Endpoint::new("/v4/economic").param("name", series.as_str());
                fan.branch(series, Vec::new(), async move {
                    self.fetch::<Vec<EconomicDataPoint>>(&endpoint).await
                })
            });

        fan.settle()
            .await
            .merge_into(EconomicIndicators::default(), |acc, series, points| {
                *acc.series_mut(series) = points;
            })
    }
}
