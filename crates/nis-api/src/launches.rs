//! Upcoming launches endpoint.

use chrono::{Local, NaiveDate};
use nis_core::Launch;
use nis_core::normalize::{launch_from_raw, vehicle_url};

use crate::{LaunchDetail, SpaceClient, error::ApiError};

impl SpaceClient {
    /// Fetch the next `count` launches from today (local calendar date)
    /// onwards, inclusive.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::next_launches_from`].
    pub async fn next_launches(
        &self,
        count: usize,
        detail: LaunchDetail,
    ) -> Result<Vec<Launch>, ApiError> {
        self.next_launches_from(count, detail, Local::now().date_naive())
            .await
    }

    /// Fetch the next `count` launches with a net date on or after `from`.
    ///
    /// With [`LaunchDetail::WithVehicle`] each launch that links a launcher
    /// configuration costs one more request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if any request fails, the API returns a
    /// non-success status, a body is malformed, or a date is unparseable.
    pub async fn next_launches_from(
        &self,
        count: usize,
        detail: LaunchDetail,
        from: NaiveDate,
    ) -> Result<Vec<Launch>, ApiError> {
        let (mut launches, vehicle_urls) = self.launch_summaries_from(count, from).await?;
        if detail.includes_vehicle() {
            let vehicles = self.fetch_vehicles(&vehicle_urls).await?;
            for (launch, vehicle) in launches.iter_mut().zip(vehicles) {
                launch.vehicle = vehicle;
            }
        }
        Ok(launches)
    }

    /// Launches without vehicles, each paired with its launcher
    /// configuration URL (if any) so vehicles can be fetched later for only
    /// the launches that are kept.
    pub(crate) async fn launch_summaries_from(
        &self,
        count: usize,
        from: NaiveDate,
    ) -> Result<(Vec<Launch>, Vec<Option<String>>), ApiError> {
        if count == 0 {
            return Ok((Vec::new(), Vec::new()));
        }

        let url = format!(
            "{}/launch?limit={count}&net__gte={}",
            self.base_url,
            from.format("%Y-%m-%d")
        );
        let results = self.fetch_results(&url, count).await?;

        let launches = results
            .iter()
            .map(|raw| launch_from_raw(raw, None))
            .collect::<Result<Vec<_>, _>>()?;
        let vehicle_urls = results
            .iter()
            .map(|raw| vehicle_url(raw).map(str::to_string))
            .collect();
        tracing::debug!(requested = count, received = launches.len(), "normalized launches");
        Ok((launches, vehicle_urls))
    }
}
