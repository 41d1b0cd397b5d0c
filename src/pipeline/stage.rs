//! Pipeline stages and their display projection

/// One named step of the simulated optimization pipeline, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Uploaded,
    Captions,
    Hashtags,
    Ready,
}

impl PipelineStage {
    /// All stages, in pipeline order.
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Uploaded,
        PipelineStage::Captions,
        PipelineStage::Hashtags,
        PipelineStage::Ready,
    ];

    /// Position of this stage within the fixed sequence.
    pub fn index(self) -> usize {
        match self {
            PipelineStage::Uploaded => 0,
            PipelineStage::Captions => 1,
            PipelineStage::Hashtags => 2,
            PipelineStage::Ready => 3,
        }
    }

    /// User-facing progress message for this stage.
    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::Uploaded => "Your media has been successfully uploaded.",
            PipelineStage::Captions => "AI is creating engaging captions based on analysis.",
            PipelineStage::Hashtags => "Trending hashtags are being generated for reach.",
            PipelineStage::Ready => "Your optimized content is ready for preview.",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Uploaded => write!(f, "uploaded"),
            PipelineStage::Captions => write!(f, "captions"),
            PipelineStage::Hashtags => write!(f, "hashtags"),
            PipelineStage::Ready => write!(f, "ready"),
        }
    }
}

/// Display state of a stage relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Done,
    InProgress,
    Pending,
}

/// Pure projection of a stage against the currently active stage.
///
/// A stage is done if its index is at most the active index, the stage right
/// after the done prefix is in progress, and everything else is pending.
/// With no active stage the first stage shows as in progress.
pub fn status_of(active: Option<PipelineStage>, stage: PipelineStage) -> StageStatus {
    let active_index = active.map(|s| s.index() as i64).unwrap_or(-1);
    let index = stage.index() as i64;

    if index <= active_index {
        StageStatus::Done
    } else if index == active_index + 1 {
        StageStatus::InProgress
    } else {
        StageStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_fixed() {
        let indices: Vec<usize> = PipelineStage::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(PipelineStage::Uploaded < PipelineStage::Ready);
    }

    #[test]
    fn test_projection_with_active_stage() {
        let active = Some(PipelineStage::Captions);
        assert_eq!(status_of(active, PipelineStage::Uploaded), StageStatus::Done);
        assert_eq!(status_of(active, PipelineStage::Captions), StageStatus::Done);
        assert_eq!(
            status_of(active, PipelineStage::Hashtags),
            StageStatus::InProgress
        );
        assert_eq!(status_of(active, PipelineStage::Ready), StageStatus::Pending);
    }

    #[test]
    fn test_projection_without_active_stage() {
        assert_eq!(
            status_of(None, PipelineStage::Uploaded),
            StageStatus::InProgress
        );
        assert_eq!(status_of(None, PipelineStage::Captions), StageStatus::Pending);
        assert_eq!(status_of(None, PipelineStage::Ready), StageStatus::Pending);
    }

    #[test]
    fn test_projection_at_terminal_stage() {
        let active = Some(PipelineStage::Ready);
        for stage in PipelineStage::ALL {
            assert_eq!(status_of(active, stage), StageStatus::Done);
        }
    }
}
