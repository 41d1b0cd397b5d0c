//! Session wiring: ingestion feeds the pipeline and the content generator
//!
//! A `Session` owns the three moving parts for one page-lifetime of work.
//! Committing a non-empty batch restarts the pipeline run and regenerates
//! caption and hashtags; an empty selection changes nothing. All state is
//! ephemeral and torn down (previews released, timers cancelled) when the
//! session drops.

use crate::config::Config;
use crate::content::GeneratedContent;
use crate::media::{MediaItem, MediaLibrary, RawFile};
use crate::pipeline::{PipelineController, PipelineStage};
use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::watch;

pub struct Session {
    library: MediaLibrary,
    pipeline: PipelineController,
    content: GeneratedContent,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            library: MediaLibrary::new(config.preview_dir),
            pipeline: PipelineController::new(config.timing),
            content: GeneratedContent::default(),
        }
    }

    /// Ingest a selection of paths. Convenience wrapper over [`Session::ingest`].
    pub fn ingest_paths(&mut self, paths: &[PathBuf]) -> Result<bool> {
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            sources.push(RawFile::from_path(path)?);
        }
        self.ingest(sources)
    }

    /// Ingest raw files; on a committed batch, restart the pipeline and
    /// regenerate the content. Returns whether a batch was committed.
    pub fn ingest(&mut self, sources: Vec<RawFile>) -> Result<bool> {
        if !self.library.ingest(sources)? {
            return Ok(false);
        }
        self.pipeline.restart();
        self.content = GeneratedContent::from_batch(self.library.items());
        Ok(true)
    }

    // ── Read-only surface ───────────────────────────────────────

    pub fn items(&self) -> &[MediaItem] {
        self.library.items()
    }

    /// First displayable item, if any.
    pub fn hero(&self) -> Option<&MediaItem> {
        self.library.hero()
    }

    pub fn content(&self) -> &GeneratedContent {
        &self.content
    }

    pub fn caption(&self) -> &str {
        &self.content.caption
    }

    pub fn hashtags(&self) -> &[String] {
        &self.content.hashtags
    }

    pub fn current_stage(&self) -> Option<PipelineStage> {
        self.pipeline.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<PipelineStage>> {
        self.pipeline.subscribe()
    }
}
