//! Deterministic content generation
//!
//! Pure functions deriving a caption and hashtags from the ingested batch.
//! There is no randomness: the caption depends only on the first item's file
//! name and the hashtags only on the first item's byte size, so identical
//! input always yields identical output. Both functions are total over any
//! batch, including the empty one.

use crate::media::MediaItem;
use crate::utils::string::{capitalize_first_letter, strip_extension};
use serde::Serialize;

/// Generic caption tail, also the whole caption for an empty batch.
const CAPTION_BASE: &str = "Created with ViralSpark — optimized for reach.";

/// Core candidate tags, always first in the pool.
const CORE_TAGS: [&str; 5] = [
    "GoViral",
    "CreativeContent",
    "TrendAnalysis",
    "EngagementBoost",
    "SocialStrategy",
];

/// Extra candidate tags, appended after the core set.
const EXTRA_TAGS: [&str; 6] = ["Shorts", "Reels", "AIEditing", "Hook", "ContentBoss", "Vibe"];

/// Number of picks drawn from the pool before deduplication.
const PICK_COUNT: u64 = 8;

/// Caption and hashtags derived from one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub caption: String,
    pub hashtags: Vec<String>,
}

impl GeneratedContent {
    pub fn from_batch(items: &[MediaItem]) -> Self {
        GeneratedContent {
            caption: caption(items),
            hashtags: hashtags(items),
        }
    }
}

/// Derive the caption for a batch.
///
/// Takes the first item's file name, strips the extension, capitalizes the
/// first character and interpolates it ahead of the generic tail. Other batch
/// contents never influence the result.
pub fn caption(items: &[MediaItem]) -> String {
    let Some(first) = items.first() else {
        return CAPTION_BASE.to_string();
    };
    let name = strip_extension(&first.raw.name);
    format!(
        "{} — bringing ideas to life. {CAPTION_BASE}",
        capitalize_first_letter(name)
    )
}

/// Derive the ordered-unique hashtag list for a batch.
///
/// Draws eight picks from the fixed pool via `pool[(i * 7 + seed) % len]`,
/// seeded by the first item's byte size (1 for an empty batch or a zero-byte
/// file), then deduplicates preserving first occurrence. Collisions shorten
/// the result rather than being topped up.
pub fn hashtags(items: &[MediaItem]) -> Vec<String> {
    let seed = match items.first() {
        Some(first) if first.raw.size > 0 => first.raw.size,
        _ => 1,
    };

    let pool: Vec<&str> = CORE_TAGS.iter().chain(EXTRA_TAGS.iter()).copied().collect();
    let len = pool.len() as u64;

    let mut tags: Vec<String> = Vec::new();
    for i in 0..PICK_COUNT {
        let tag = pool[((i * 7 + seed) % len) as usize];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
