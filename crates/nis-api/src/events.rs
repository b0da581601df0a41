//! Upcoming events endpoint.

use nis_core::Event;
use nis_core::normalize::event_from_raw;

use crate::{SpaceClient, error::ApiError};

impl SpaceClient {
    /// Fetch the next `count` events in the order the API returns them
    /// (ascending by date).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, the body is malformed, or an event carries an
    /// unparseable date.
    pub async fn next_events(&self, count: usize) -> Result<Vec<Event>, ApiError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}/event/upcoming?limit={count}", self.base_url);
        let results = self.fetch_results(&url, count).await?;

        let events = results
            .iter()
            .map(event_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(requested = count, received = events.len(), "normalized events");
        Ok(events)
    }
}
