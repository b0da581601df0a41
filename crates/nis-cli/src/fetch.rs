use nis_api::{ApiError, LaunchDetail, SpaceClient, SpaceItem};

use crate::cli::Selection;

/// Query the feeds named by `selection` for `count` items.
pub async fn fetch_items(
    client: &SpaceClient,
    selection: Selection,
    count: usize,
    detail: LaunchDetail,
) -> Result<Vec<SpaceItem>, ApiError> {
    tracing::debug!(?selection, count, ?detail, "fetching upcoming items");
    match selection {
        Selection::All => client.upcoming(count, detail).await,
        Selection::EventsOnly => Ok(client
            .next_events(count)
            .await?
            .into_iter()
            .map(SpaceItem::Event)
            .collect()),
        Selection::LaunchesOnly => Ok(client
            .next_launches(count, detail)
            .await?
            .into_iter()
            .map(SpaceItem::Launch)
            .collect()),
    }
}
