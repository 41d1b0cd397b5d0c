//! Timer-driven pipeline controller
//!
//! Simulates the multi-stage optimization run for a batch: enters `uploaded`
//! immediately, then schedules `captions`, `hashtags` and `ready` at fixed
//! delays from pipeline start. Every scheduled transition applies
//! unconditionally, so cancelling the previous run's token before starting a
//! new one is the sole guard against a superseded batch overwriting the
//! current stage. Skipping that cancellation is a correctness bug, not a
//! cosmetic one.

use crate::config::StageTiming;
use crate::pipeline::stage::PipelineStage;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Drives the simulated pipeline and publishes the active stage to observers.
pub struct PipelineController {
    stage_tx: Arc<watch::Sender<Option<PipelineStage>>>,
    cancel: Option<CancellationToken>,
    timing: StageTiming,
}

impl PipelineController {
    pub fn new(timing: StageTiming) -> Self {
        let (stage_tx, _) = watch::channel(None);
        PipelineController {
            stage_tx: Arc::new(stage_tx),
            cancel: None,
            timing,
        }
    }

    /// Observe stage changes. Receivers always see the latest value.
    pub fn subscribe(&self) -> watch::Receiver<Option<PipelineStage>> {
        self.stage_tx.subscribe()
    }

    /// Currently active stage, `None` before the first run.
    pub fn current(&self) -> Option<PipelineStage> {
        *self.stage_tx.borrow()
    }

    /// Start a fresh run for a newly committed batch.
    ///
    /// Cancels all pending transitions of the prior run, resets to no active
    /// stage, immediately enters `uploaded`, and schedules the remaining
    /// stages at their configured delays from now.
    pub fn restart(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            debug!("cancelling pending transitions of superseded run");
            cancel.cancel();
        }

        let cancel = CancellationToken::new();

        self.stage_tx.send_replace(None);
        self.stage_tx.send_replace(Some(PipelineStage::Uploaded));
        info!("pipeline restarted, stage: {}", PipelineStage::Uploaded);

        let schedule: [(PipelineStage, Duration); 3] = [
            (PipelineStage::Captions, self.timing.captions),
            (PipelineStage::Hashtags, self.timing.hashtags),
            (PipelineStage::Ready, self.timing.ready),
        ];
        for (stage, delay) in schedule {
            let stage_tx = Arc::clone(&self.stage_tx);
            let token = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {
                        // The token is re-checked under the watch lock, so a
                        // transition of a superseded run can never land after
                        // the new run has published its first stage.
                        stage_tx.send_if_modified(|current| {
                            if token.is_cancelled() {
                                return false;
                            }
                            debug!("stage: {stage}");
                            *current = Some(stage);
                            true
                        });
                    }
                }
            });
        }

        self.cancel = Some(cancel);
    }
}

impl Drop for PipelineController {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
