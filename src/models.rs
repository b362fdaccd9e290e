//! Data structures for Plex API responses.
//!
//! This module defines the wire models decoded from the server's XML
//! responses, plus the small enums describing what kind of collection or
//! image an operation targets. All item attributes are defaulted when absent
//! so anomalous metadata never aborts a run.

use serde::Deserialize;
use std::fmt;

/// The two kinds of collections artwork can be fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// A user-curated ordered list of items
    Playlist,
    /// A whole media category (library section)
    Library,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Playlist => write!(f, "playlist"),
            CollectionKind::Library => write!(f, "library"),
        }
    }
}

/// The two artwork image kinds a video carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Fanart,
}

impl ImageKind {
    /// File-name suffix for this image kind
    pub fn suffix(&self) -> &'static str {
        match self {
            ImageKind::Poster => "poster",
            ImageKind::Fanart => "fanart",
        }
    }
}

/// One video item from a playlist or library listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Video {
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@year", default)]
    pub year: String,
    /// Server path of the poster image, empty when the item has none
    #[serde(rename = "@thumb", default)]
    pub thumb: String,
    /// Server path of the fanart image, empty when the item has none
    #[serde(rename = "@art", default)]
    pub art: String,
    /// Unix timestamp the item was added to the server
    #[serde(rename = "@addedAt", default)]
    pub added_at: i64,
    /// Unix timestamp the item's metadata was last updated
    #[serde(rename = "@updatedAt", default)]
    pub updated_at: i64,
}

impl Video {
    /// Returns the server path of the requested image kind
    pub fn image_path(&self, kind: ImageKind) -> &str {
        match kind {
            ImageKind::Poster => &self.thumb,
            ImageKind::Fanart => &self.art,
        }
    }

    /// Derives the destination file name for this video's artwork.
    ///
    /// The name is `"{title} ({year}) {suffix}.jpg"` with every `:`, `/`,
    /// `\`, `?`, and `*` replaced by a space, keeping the result legal on
    /// common filesystems.
    pub fn file_name(&self, kind: ImageKind) -> String {
        let name = format!("{} ({}) {}.jpg", self.title, self.year, kind.suffix());
        name.chars()
            .map(|c| match c {
                ':' | '/' | '\\' | '?' | '*' => ' ',
                _ => c,
            })
            .collect()
    }
}

/// A `<MediaContainer>` of `<Video>` items
#[derive(Debug, Default, Deserialize)]
pub struct VideoContainer {
    #[serde(rename = "Video", default)]
    pub videos: Vec<Video>,
}

/// One named entry in a playlist or library-section listing
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEntry {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "@title", default)]
    pub title: String,
}

/// A `<MediaContainer>` of `<Playlist>` entries
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistContainer {
    #[serde(rename = "Playlist", default)]
    pub playlists: Vec<CollectionEntry>,
}

/// A `<MediaContainer>` of `<Directory>` entries (library sections)
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryContainer {
    #[serde(rename = "Directory", default)]
    pub directories: Vec<CollectionEntry>,
}
