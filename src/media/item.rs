//! Core types for ingested media

use crate::media::preview::PreviewHandle;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of media, classified from the declared MIME type prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image (`image/*`)
    Image,
    /// Video (`video/*`)
    Video,
    /// Audio (`audio/*`)
    Audio,
    /// Anything unrecognized; accepted, never an error
    Other,
}

impl MediaKind {
    /// Classify a declared MIME type by its prefix.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else if mime.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Other
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "Image"),
            MediaKind::Video => write!(f, "Video"),
            MediaKind::Audio => write!(f, "Audio"),
            MediaKind::Other => write!(f, "Other"),
        }
    }
}

/// Read-only record of an original file as handed in by the user.
///
/// Never mutated after construction; the original bytes stay at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    /// File name, without directory components
    pub name: String,
    /// Byte size
    pub size: u64,
    /// Last-modified timestamp in milliseconds
    pub modified_ms: i64,
    /// Declared MIME type
    pub mime: String,
    /// Location of the original bytes
    pub path: PathBuf,
}

impl RawFile {
    /// Build a raw file record from a filesystem path.
    ///
    /// The declared MIME type is derived from the file extension; unknown
    /// extensions are declared `application/octet-stream`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path)
            .with_context(|| format!("cannot read metadata of {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .with_context(|| format!("{} has no file name", path.display()))?;

        let modified: DateTime<Local> = meta
            .modified()
            .with_context(|| format!("cannot read modification time of {}", path.display()))?
            .into();

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Ok(RawFile {
            name,
            size: meta.len(),
            modified_ms: modified.timestamp_millis(),
            mime: declared_mime(&ext).to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Declared MIME type for a lowercase file extension.
fn declared_mime(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        _ => "application/octet-stream",
    }
}

/// One ingested file, owning the displayable preview derived from its bytes.
#[derive(Debug)]
pub struct MediaItem {
    /// Unique within a batch; identical re-selection of a file reproduces it
    pub id: String,
    pub kind: MediaKind,
    /// Exclusively owned; released when the item is superseded
    pub preview: PreviewHandle,
    pub raw: RawFile,
}

impl MediaItem {
    pub fn new(raw: RawFile, kind: MediaKind, preview: PreviewHandle) -> Self {
        let id = format!("{}-{}-{}", raw.name, raw.size, raw.modified_ms);
        MediaItem { id, kind, preview, raw }
    }
}
