use crate::application::{
    dto::{ConversionProgress, ConversionReport, RunPhase},
    ports::observer::ConversionObserver,
};

/// Writes run events to the tracing subscriber.
#[derive(Default, Clone, Copy, Debug)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn on_status(&self, phase: RunPhase, message: &str) {
        tracing::info!(%phase, "{message}");
    }

    fn on_progress(&self, progress: &ConversionProgress) {
        tracing::info!(
            chunk = progress.chunk,
            "converted {}/{} ({} processed)",
            progress.converted,
            progress.total,
            progress.processed
        );
    }

    fn on_complete(&self, report: &ConversionReport) {
        for error in &report.errors {
            tracing::warn!("{error}");
        }
        tracing::info!(
            converted = report.converted,
            failed = report.failed(),
            dry_run = report.dry_run,
            "run complete"
        );
    }

    fn on_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
