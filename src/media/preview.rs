//! Displayable preview resources backing ingested media
//!
//! Each ingested item owns one `PreviewHandle`: a copy of the original bytes
//! placed in the session preview directory, addressable through a `file://`
//! URL. Handles are acquired at ingestion and must be released synchronously
//! when their batch is superseded, so repeated uploads never accumulate one
//! stale preview per replaced file.

use crate::media::item::RawFile;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Owned reference to the displayable form of a raw file's bytes.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
    url: String,
    released: bool,
}

impl PreviewHandle {
    /// Copy the raw bytes into `preview_dir` and hand out an owned reference.
    pub fn acquire(raw: &RawFile, preview_dir: &Path) -> Result<Self> {
        fs::create_dir_all(preview_dir)
            .with_context(|| format!("cannot create preview dir {}", preview_dir.display()))?;

        // Size and mtime keep distinct files apart while the trailing original
        // name preserves the extension for viewers.
        let dest = preview_dir.join(format!("{}-{}-{}", raw.size, raw.modified_ms, raw.name));
        fs::copy(&raw.path, &dest).with_context(|| {
            format!("cannot copy {} to {}", raw.path.display(), dest.display())
        })?;

        debug!("acquired preview {}", dest.display());

        Ok(PreviewHandle {
            url: format!("file://{}", dest.display()),
            path: dest,
            released: false,
        })
    }

    /// Displayable URL for this preview.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Release the underlying resource.
    ///
    /// Idempotent. Called synchronously at batch replacement; a failure to
    /// remove the file is logged but never propagated, since the superseding
    /// batch must commit regardless.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Err(e) = fs::remove_file(&self.path) {
            warn!("failed to release preview {}: {}", self.path.display(), e);
        } else {
            debug!("released preview {}", self.path.display());
        }
    }
}

// Backstop for session teardown; batch replacement releases explicitly.
impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}
