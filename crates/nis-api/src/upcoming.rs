//! Merged events + launches feed.

use chrono::{Local, NaiveDate};
use nis_core::{ItemKind, SpaceItem};
use nis_core::merge::merge_by_date;

use crate::{LaunchDetail, SpaceClient, error::ApiError};

impl SpaceClient {
    /// The next `count` spaceflight items, events and launches together,
    /// ascending by date.
    ///
    /// The API has no combined endpoint, so both feeds are asked for
    /// `count` items each and the merge keeps the first `count`. On a date
    /// tie the launch comes first. With [`LaunchDetail::WithVehicle`],
    /// vehicles are fetched only for launches that survive the merge.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] from either feed; no partial result is
    /// returned.
    pub async fn upcoming(
        &self,
        count: usize,
        detail: LaunchDetail,
    ) -> Result<Vec<SpaceItem>, ApiError> {
        self.upcoming_from(count, detail, Local::now().date_naive())
            .await
    }

    /// [`SpaceClient::upcoming`] with launches filtered from `from` instead
    /// of today.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::upcoming`].
    pub async fn upcoming_from(
        &self,
        count: usize,
        detail: LaunchDetail,
        from: NaiveDate,
    ) -> Result<Vec<SpaceItem>, ApiError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let (events, (launches, vehicle_urls)) = tokio::try_join!(
            self.next_events(count),
            self.launch_summaries_from(count, from),
        )?;

        let mut merged = merge_by_date(
            events.into_iter().map(SpaceItem::Event),
            launches.into_iter().map(SpaceItem::Launch),
            count,
        );

        if detail.includes_vehicle() {
            // The merge keeps a prefix of each side, so the surviving
            // launches are the first `kept` summaries.
            let kept = merged
                .iter()
                .filter(|item| item.kind() == ItemKind::Launch)
                .count();
            let mut vehicles = self.fetch_vehicles(&vehicle_urls[..kept]).await?.into_iter();
            for item in &mut merged {
                if let SpaceItem::Launch(launch) = item {
                    launch.vehicle = vehicles.next().flatten();
                }
            }
        }

        Ok(merged)
    }
}
