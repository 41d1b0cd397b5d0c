//! Media ingestion layer
//!
//! Accepts a user selection of files, classifies each by its declared MIME
//! type, allocates a displayable preview per file, and owns the resulting
//! batch until it is superseded by the next ingestion.

pub mod ingest;
pub mod item;
pub mod preview;

pub use ingest::MediaLibrary;
pub use item::{MediaItem, MediaKind, RawFile};
pub use preview::PreviewHandle;
