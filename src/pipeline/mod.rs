//! Simulated optimization pipeline
//!
//! A single-threaded, timer-driven state machine: each committed batch
//! restarts a fixed ordered run of named stages, observable through a watch
//! channel. No real work happens here; if real asynchronous processing ever
//! replaces the timers, per-stage failure states and retry belong in the
//! controller.

pub mod controller;
pub mod stage;

pub use controller::PipelineController;
pub use stage::{PipelineStage, StageStatus, status_of};
