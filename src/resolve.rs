//! Collection resolution and item retrieval.
//!
//! Maps a human-readable collection title to the server-side key and fetches
//! the video items the resolved collection contains.

use crate::client::PlexClient;
use crate::error::Error;
use crate::models::{
    CollectionEntry, CollectionKind, DirectoryContainer, PlaylistContainer, Video, VideoContainer,
};
use log::info;

/// Fetches the full listing for the given collection kind, in server order
pub async fn collection_entries(
    client: &PlexClient,
    kind: CollectionKind,
) -> Result<Vec<CollectionEntry>, Error> {
    match kind {
        CollectionKind::Playlist => Ok(client
            .get_xml::<PlaylistContainer>("/playlists")
            .await?
            .playlists),
        CollectionKind::Library => Ok(client
            .get_xml::<DirectoryContainer>("/library/sections")
            .await?
            .directories),
    }
}

/// Resolves a collection title to its server-side key.
///
/// Matching is exact and case-sensitive; when duplicate titles exist the
/// first entry in server order wins. A title with no match is a fatal
/// resolution error, never silently defaulted.
pub async fn resolve(
    client: &PlexClient,
    kind: CollectionKind,
    title: &str,
) -> Result<String, Error> {
    let entries = collection_entries(client, kind).await?;
    let key = entries
        .into_iter()
        .find(|entry| entry.title == title)
        .map(|entry| entry.key)
        .ok_or_else(|| Error::NotFound {
            kind,
            title: title.to_string(),
        })?;
    info!("resolved {} {:?} to {}", kind, title, key);
    Ok(key)
}

/// Fetches the video items of a resolved collection.
///
/// Playlist keys are requested directly; library keys list their contents
/// under `{key}/all`. An empty collection is valid and yields no items.
pub async fn fetch_items(
    client: &PlexClient,
    kind: CollectionKind,
    key: &str,
) -> Result<Vec<Video>, Error> {
    let path = match kind {
        CollectionKind::Playlist => key.to_string(),
        CollectionKind::Library => format!("{key}/all"),
    };
    Ok(client.get_xml::<VideoContainer>(&path).await?.videos)
}
