//! Shared fixtures for unit tests

use crate::media::{MediaLibrary, RawFile};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

static BATCH_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Write `bytes` to `dir/name` and build the matching raw file record.
pub fn raw_fixture(dir: &Path, name: &str, bytes: &[u8]) -> RawFile {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    RawFile::from_path(&path).unwrap()
}

/// Build a library holding one committed batch of `(name, size)` files.
pub fn media_batch(dir: &Path, specs: &[(&str, u64)]) -> MediaLibrary {
    let previews = dir.join(format!(
        "previews-{}",
        BATCH_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    let mut library = MediaLibrary::new(previews);
    let sources = specs
        .iter()
        .map(|(name, size)| raw_fixture(dir, name, &vec![0u8; *size as usize]))
        .collect();
    library.ingest(sources).unwrap();
    library
}
