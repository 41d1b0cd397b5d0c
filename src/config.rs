use std::path::PathBuf;
use std::time::Duration;

/// Delays for the simulated optimization pipeline, measured from pipeline start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTiming {
    pub captions: Duration,
    pub hashtags: Duration,
    pub ready: Duration,
}

impl Default for StageTiming {
    fn default() -> Self {
        StageTiming {
            captions: Duration::from_millis(800),
            hashtags: Duration::from_millis(1600),
            ready: Duration::from_millis(2400),
        }
    }
}

/// Session-scoped configuration.
///
/// `preview_dir` hosts the displayable copies backing each ingested item.
/// It lives under the system temp directory and is unique per process, so
/// state never survives the session.
#[derive(Debug, Clone)]
pub struct Config {
    pub preview_dir: PathBuf,
    pub timing: StageTiming,
}

impl Config {
    pub fn new() -> Self {
        Config {
            preview_dir: std::env::temp_dir()
                .join(app_name())
                .join(format!("previews-{}", std::process::id())),
            timing: StageTiming::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a version as specified in Cargo.toml
pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
