//! Collection discovery.
//!
//! Enumerates the playlists or library sections a server offers, so a user
//! can see what names are available before picking one to fetch from.

use crate::client::PlexClient;
use crate::error::Error;
use crate::models::CollectionKind;
use crate::resolve;

/// Returns the titles of all collections of the given kind, in server order.
///
/// No sorting and no deduplication; an empty server listing yields an empty
/// vector, not an error.
pub async fn collection_titles(
    client: &PlexClient,
    kind: CollectionKind,
) -> Result<Vec<String>, Error> {
    let entries = resolve::collection_entries(client, kind).await?;
    Ok(entries.into_iter().map(|entry| entry.title).collect())
}
