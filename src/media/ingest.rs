//! Media ingestion and batch lifecycle
//!
//! `MediaLibrary` owns the current batch: the full ordered set of ingested
//! items. A new ingestion replaces the batch atomically, releasing every
//! superseded preview handle at replacement time. An empty selection is a
//! documented no-op and leaves the existing batch untouched.

use crate::media::item::{MediaItem, MediaKind, RawFile};
use crate::media::preview::PreviewHandle;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Owner of the currently ingested batch.
pub struct MediaLibrary {
    items: Vec<MediaItem>,
    preview_dir: PathBuf,
}

impl MediaLibrary {
    pub fn new(preview_dir: PathBuf) -> Self {
        MediaLibrary {
            items: Vec::new(),
            preview_dir,
        }
    }

    /// Ingest a selection of raw files, replacing the current batch.
    ///
    /// Returns `Ok(true)` when a new batch was committed and `Ok(false)` for
    /// an empty selection. Unrecognized MIME types are accepted and
    /// classified as [`MediaKind::Other`]; only preview allocation can fail,
    /// in which case the previous batch and its handles stay intact.
    pub fn ingest(&mut self, sources: Vec<RawFile>) -> Result<bool> {
        if sources.is_empty() {
            debug!("ignoring empty selection");
            return Ok(false);
        }

        let mut next = Vec::with_capacity(sources.len());
        for raw in sources {
            let kind = MediaKind::from_mime(&raw.mime);
            let preview = PreviewHandle::acquire(&raw, &self.preview_dir)
                .with_context(|| format!("cannot allocate preview for {}", raw.name))?;
            next.push(MediaItem::new(raw, kind, preview));
        }

        self.replace(next);
        Ok(true)
    }

    /// Commit a new batch, releasing all superseded preview handles first.
    fn replace(&mut self, next: Vec<MediaItem>) {
        for item in &mut self.items {
            item.preview.release();
        }
        info!("ingested batch of {} item(s)", next.len());
        self.items = next;
    }

    /// The current batch, in selection order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First displayable item (image or video), used as the preview hero.
    pub fn hero(&self) -> Option<&MediaItem> {
        self.items
            .iter()
            .find(|item| matches!(item.kind, MediaKind::Image | MediaKind::Video))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::raw_fixture;

    #[test]
    fn test_ingest_classifies_every_item() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::new(dir.path().join("previews"));

        let sources = vec![
            raw_fixture(dir.path(), "a.jpg", b"1"),
            raw_fixture(dir.path(), "b.mp4", b"22"),
            raw_fixture(dir.path(), "c.wav", b"333"),
            raw_fixture(dir.path(), "d.pdf", b"4444"),
        ];
        assert!(library.ingest(sources).unwrap());

        let kinds: Vec<MediaKind> = library.items().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MediaKind::Image,
                MediaKind::Video,
                MediaKind::Audio,
                MediaKind::Other
            ]
        );
        assert_eq!(library.items().len(), 4);
    }

    #[test]
    fn test_empty_selection_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::new(dir.path().join("previews"));

        let sources = vec![raw_fixture(dir.path(), "a.jpg", b"1")];
        assert!(library.ingest(sources).unwrap());
        let preview_path = library.items()[0].preview.path().to_path_buf();

        assert!(!library.ingest(Vec::new()).unwrap());
        assert_eq!(library.items().len(), 1);
        assert!(preview_path.exists());
    }

    #[test]
    fn test_new_batch_releases_superseded_previews() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::new(dir.path().join("previews"));

        library
            .ingest(vec![
                raw_fixture(dir.path(), "old1.jpg", b"x"),
                raw_fixture(dir.path(), "old2.jpg", b"xy"),
            ])
            .unwrap();
        let old_paths: Vec<_> = library
            .items()
            .iter()
            .map(|i| i.preview.path().to_path_buf())
            .collect();

        library
            .ingest(vec![raw_fixture(dir.path(), "new.mp4", b"z")])
            .unwrap();

        for path in old_paths {
            assert!(!path.exists(), "superseded preview must be removed");
        }
        assert_eq!(library.items().len(), 1);
        assert!(library.items()[0].preview.path().exists());
    }

    #[test]
    fn test_identical_reselection_reproduces_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::new(dir.path().join("previews"));

        library
            .ingest(vec![raw_fixture(dir.path(), "same.jpg", b"abc")])
            .unwrap();
        let first_id = library.items()[0].id.clone();

        // Re-select the same unchanged file
        let raw = RawFile::from_path(&dir.path().join("same.jpg")).unwrap();
        library.ingest(vec![raw]).unwrap();
        assert_eq!(library.items()[0].id, first_id);
    }

    #[test]
    fn test_hero_prefers_first_image_or_video() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = MediaLibrary::new(dir.path().join("previews"));
        assert!(library.hero().is_none());

        library
            .ingest(vec![
                raw_fixture(dir.path(), "song.mp3", b"a"),
                raw_fixture(dir.path(), "poster.png", b"b"),
                raw_fixture(dir.path(), "film.mp4", b"c"),
            ])
            .unwrap();
        assert_eq!(library.hero().unwrap().raw.name, "poster.png");
    }
}
