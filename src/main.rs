//! Command-line frontend for the plex-artwork-rs library.
//!
//! Parses flags (with `PLEX` / `PLEX_TOKEN` environment fallbacks), builds
//! the startup configuration, and dispatches the requested operations. Any
//! fatal error is printed to stderr and the process exits with status 1.

use clap::Parser;
use plex_artwork_rs::{
    fetch_collection_artwork, list_titles, CollectionKind, Config, Error, ImageKind, PlexClient,
};
use std::env;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(name = "plex-artwork")]
#[command(about = "Download poster and fanart images from a Plex media server")]
struct Cli {
    /// URL of the Plex server (defaults to the PLEX environment variable)
    #[arg(long = "plex")]
    server: Option<String>,

    /// Plex token (defaults to PLEX_TOKEN).
    /// See https://www.plexopedia.com/plex-media-server/general/plex-token/
    #[arg(long)]
    token: Option<String>,

    /// Playlist to get images from
    #[arg(long)]
    playlist: Option<String>,

    /// Library to get images from
    #[arg(long)]
    library: Option<String>,

    /// List all playlists
    #[arg(long)]
    list_playlists: bool,

    /// List all libraries
    #[arg(long)]
    list_libraries: bool,

    /// Ignore certificate errors
    #[arg(long = "unsafe")]
    insecure: bool,

    /// Get fanart instead of posters
    #[arg(long)]
    fanart: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Regular expression for request paths whose raw responses are printed
    #[arg(long)]
    debug: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| env::var("PLEX").ok())
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingServer)?;
    let token = cli
        .token
        .or_else(|| env::var("PLEX_TOKEN").ok())
        .unwrap_or_default();

    let mut config = Config::new(&server, &token)
        .insecure(cli.insecure)
        .quiet(cli.quiet);
    if let Some(pattern) = &cli.debug {
        config = config.debug_filter(pattern)?;
    }

    let client = PlexClient::new(config)?;

    // Captured once so every item in the run is compared against the same now.
    let now = chrono::Utc::now().timestamp();
    let image = if cli.fanart {
        ImageKind::Fanart
    } else {
        ImageKind::Poster
    };
    let out_dir = Path::new(".");

    if cli.list_libraries {
        list_titles(&client, CollectionKind::Library).await?;
    }

    if cli.list_playlists {
        list_titles(&client, CollectionKind::Playlist).await?;
    }

    if let Some(title) = &cli.playlist {
        fetch_collection_artwork(&client, CollectionKind::Playlist, title, image, out_dir, now)
            .await?;
    }

    if let Some(title) = &cli.library {
        fetch_collection_artwork(&client, CollectionKind::Library, title, image, out_dir, now)
            .await?;
    }

    Ok(())
}
