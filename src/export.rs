//! Export surfaces: clipboard copy and original-file download
//!
//! All operations here are side effects on the generated content or the
//! ingested originals. A failure (clipboard permission, unwritable target)
//! surfaces to the caller as an error and never touches ingestion or
//! pipeline state.

use crate::media::MediaItem;
use anyhow::{Context, Result};
use arboard::Clipboard;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Place the caption on the system clipboard.
pub fn copy_caption(caption: &str) -> Result<()> {
    copy_text(caption)?;
    info!("caption copied to clipboard");
    Ok(())
}

/// Place the space-joined, `#`-prefixed hashtags on the system clipboard.
pub fn copy_hashtags(tags: &[String]) -> Result<()> {
    copy_text(&format_hashtags(tags))?;
    info!("hashtags copied to clipboard");
    Ok(())
}

fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("cannot access system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("cannot write to system clipboard")?;
    Ok(())
}

/// Render hashtags the way they are posted: `#`-prefixed, space-joined.
pub fn format_hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Save the first ingested item's original bytes under its original name.
///
/// Returns the written path. An empty batch is an error at this surface; the
/// caller gates the affordance on a non-empty batch.
pub fn download_first(items: &[MediaItem], dest_dir: &Path) -> Result<PathBuf> {
    let first = items.first().context("nothing to download")?;

    fs::create_dir_all(dest_dir)
        .with_context(|| format!("cannot create {}", dest_dir.display()))?;
    let dest = dest_dir.join(&first.raw.name);
    fs::copy(&first.raw.path, &dest).with_context(|| {
        format!(
            "cannot save {} to {}",
            first.raw.path.display(),
            dest.display()
        )
    })?;

    info!("saved {} ({} bytes)", dest.display(), first.raw.size);
    Ok(dest)
}
