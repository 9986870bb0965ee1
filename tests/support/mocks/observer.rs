// tests/support/mocks/observer.rs
use std::sync::Mutex;

use slug_backfill::application::dto::{ConversionProgress, ConversionReport, RunPhase};
use slug_backfill::application::ports::observer::ConversionObserver;

/// 受け取った通知をすべて記録するオブザーバー
#[derive(Default)]
pub struct RecordingObserver {
    pub statuses: Mutex<Vec<(RunPhase, String)>>,
    pub progress: Mutex<Vec<ConversionProgress>>,
    pub completed: Mutex<Vec<ConversionReport>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn phases(&self) -> Vec<RunPhase> {
        self.statuses.lock().unwrap().iter().map(|(p, _)| *p).collect()
    }

    pub fn processed_counts(&self) -> Vec<usize> {
        self.progress.lock().unwrap().iter().map(|p| p.processed).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<ConversionReport> {
        self.completed.lock().unwrap().clone()
    }
}

impl ConversionObserver for RecordingObserver {
    fn on_status(&self, phase: RunPhase, message: &str) {
        self.statuses.lock().unwrap().push((phase, message.to_string()));
    }

    fn on_progress(&self, progress: &ConversionProgress) {
        self.progress.lock().unwrap().push(*progress);
    }

    fn on_complete(&self, report: &ConversionReport) {
        self.completed.lock().unwrap().push(report.clone());
    }

    fn on_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
