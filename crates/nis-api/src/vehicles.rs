//! Launch vehicle (launcher configuration) lookups.

use std::sync::Arc;

use nis_core::Vehicle;
use nis_core::normalize::vehicle_from_raw;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{SpaceClient, error::ApiError, http::get_json};

impl SpaceClient {
    /// Fetch one vehicle from its fully-qualified configuration URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the body is not a JSON
    /// object, or `maiden_flight` is malformed.
    pub async fn fetch_vehicle(&self, url: &str) -> Result<Vehicle, ApiError> {
        fetch_vehicle_with(&self.http, url).await
    }

    /// Fetch the vehicle behind every configuration URL given, at most
    /// `max_concurrent_vehicle_requests` at a time.
    ///
    /// The returned vector lines up with `urls`; a `None` URL stays `None`.
    /// The first failure cancels the rest.
    pub(crate) async fn fetch_vehicles(
        &self,
        urls: &[Option<String>],
    ) -> Result<Vec<Option<Vehicle>>, ApiError> {
        let mut vehicles = vec![None; urls.len()];
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_vehicle_requests));
        let mut set = JoinSet::new();

        for (idx, url) in urls.iter().enumerate() {
            let Some(url) = url.clone() else {
                continue;
            };
            let client = self.http.clone();
            let sem = semaphore.clone();
            set.spawn(async move {
                let _permit = sem
                    .acquire_owned()
                    .await
                    .map_err(|e| ApiError::Task(e.to_string()))?;
                let vehicle = fetch_vehicle_with(&client, &url).await?;
                Ok::<_, ApiError>((idx, vehicle))
            });
        }

        while let Some(joined) = set.join_next().await {
            let (idx, vehicle) = joined.map_err(|e| ApiError::Task(e.to_string()))??;
            vehicles[idx] = Some(vehicle);
        }

        Ok(vehicles)
    }
}

async fn fetch_vehicle_with(http: &reqwest::Client, url: &str) -> Result<Vehicle, ApiError> {
    let body = get_json(http, url).await?;
    if !body.is_object() {
        return Err(ApiError::Parse(format!("{url}: vehicle body is not a JSON object")));
    }
    Ok(vehicle_from_raw(&body)?)
}
