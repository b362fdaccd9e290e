//! A Rust library for downloading artwork from a Plex media server.
//!
//! This library turns a human-supplied playlist or library name into the
//! server-side key, fetches the video items the collection contains, and
//! retrieves and persists a poster or fanart image per item. Missing images
//! and anomalous metadata are tolerated without aborting the run; network
//! and protocol failures are fatal and propagate to the caller.
//!
//! # Logging
//!
//! This library uses the [`log`] crate. Initialize a logger such as
//! [`env_logger`] in your application and set `RUST_LOG` to control levels
//! (e.g. `RUST_LOG=debug` to trace every request path). User-facing output
//! (titles, written file names, data-quality warnings) goes to stdout
//! directly, matching the tool's interactive use.

/// Module handling artwork retrieval and file writing
pub mod artwork;

/// Module containing the HTTP client for the Plex API
pub mod client;

/// Module holding the startup configuration value
pub mod config;

/// Module defining the crate-wide error type
pub mod error;

/// Module enumerating collections for discovery
pub mod listing;

/// Module containing the XML wire models
pub mod models;

/// Module resolving collection names and fetching their items
pub mod resolve;

/// Module checking item metadata for anomalies
pub mod validate;

pub use client::PlexClient;
pub use config::Config;
pub use error::Error;
pub use models::{CollectionKind, ImageKind};

use std::path::Path;

/// Downloads the artwork of every item in a named collection.
///
/// This function orchestrates the whole pipeline:
/// 1. Resolve the collection title to its server-side key
/// 2. Fetch the video items the collection contains
/// 3. Per item, check timestamps and fetch-and-write the selected image
///
/// Items are processed sequentially in server order; written file names are
/// printed to stdout unless the configuration asks for quiet. `now` is the
/// wall-clock time captured once at startup.
///
/// # Arguments
///
/// * `client` - The client bound to the target server
/// * `kind` - Whether `title` names a playlist or a library section
/// * `title` - The collection title, matched exactly
/// * `image` - Which artwork kind to download for each item
/// * `out_dir` - Directory the image files are written into
/// * `now` - Unix timestamp captured at process start
pub async fn fetch_collection_artwork(
    client: &PlexClient,
    kind: CollectionKind,
    title: &str,
    image: ImageKind,
    out_dir: &Path,
    now: i64,
) -> Result<(), Error> {
    let key = resolve::resolve(client, kind, title).await?;
    let videos = resolve::fetch_items(client, kind, &key).await?;

    for video in &videos {
        if let Some(name) = artwork::fetch_artwork(client, video, image, out_dir, now).await? {
            if !client.config().quiet {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Prints the title of every collection of the given kind, one per line,
/// indented, in server order. An empty listing prints nothing.
pub async fn list_titles(client: &PlexClient, kind: CollectionKind) -> Result<(), Error> {
    for title in listing::collection_titles(client, kind).await? {
        println!("    {title}");
    }
    Ok(())
}
