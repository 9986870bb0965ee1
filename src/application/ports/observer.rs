// src/application/ports/observer.rs
use crate::application::dto::{ConversionProgress, ConversionReport, RunPhase};

/// Receives status, progress and the final outcome of a run.
/// Every method defaults to doing nothing.
pub trait ConversionObserver: Send + Sync {
    fn on_status(&self, _phase: RunPhase, _message: &str) {}

    fn on_progress(&self, _progress: &ConversionProgress) {}

    fn on_complete(&self, _report: &ConversionReport) {}

    fn on_error(&self, _message: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {}
