//! Artwork retrieval and persistence.
//!
//! For each video this fetches the selected image through the client and
//! writes it into the output directory under a sanitized file name. Items
//! without the requested image kind, and items the server answers with an
//! empty body for, are skipped without error.

use crate::client::PlexClient;
use crate::error::Error;
use crate::models::{ImageKind, Video};
use crate::validate;
use log::debug;
use std::path::Path;

/// Fetches one video's artwork and writes it to `out_dir`.
///
/// Runs the timestamp check first (warning only), then retrieves the image
/// bytes raw. Returns the file name written, or `None` when the item has no
/// image path or the server returned an empty body. Existing files of the
/// same name are overwritten. A write failure is fatal.
pub async fn fetch_artwork(
    client: &PlexClient,
    video: &Video,
    kind: ImageKind,
    out_dir: &Path,
    now: i64,
) -> Result<Option<String>, Error> {
    if let Some(warning) = validate::check_timestamps(video, now) {
        println!("{warning}");
    }

    let image_path = video.image_path(kind);
    if image_path.is_empty() {
        debug!("{:?} has no {} path, skipping", video.title, kind.suffix());
        return Ok(None);
    }

    let bytes = client.get_raw(image_path).await?;
    if bytes.is_empty() {
        debug!("empty body for {}, skipping", image_path);
        return Ok(None);
    }

    let name = video.file_name(kind);
    let dest = out_dir.join(&name);
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|source| Error::Write {
            path: dest.clone(),
            source,
        })?;

    Ok(Some(name))
}
