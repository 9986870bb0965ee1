use super::{ConversionCommandService, ConversionConfig};
use crate::application::{
    dto::{ConversionReport, RunPhase},
    error::ApplicationResult,
    ports::ConversionObserverPort,
};

impl ConversionCommandService {
    /// Scans, then converts, announcing each phase to `observer`.
    ///
    /// Invalid configuration and scan failures go to `on_error` and abort the
    /// run. Otherwise the report is delivered through `on_complete`.
    pub async fn run(
        &self,
        config: &ConversionConfig,
        observer: &ConversionObserverPort,
    ) -> ApplicationResult<ConversionReport> {
        if let Err(err) = config.validate() {
            observer.on_error(&err.to_string());
            return Err(err);
        }

        observer.on_status(RunPhase::Scanning, "scanning documents");
        let scan = match self.scan(config).await {
            Ok(scan) => scan,
            Err(err) => {
                tracing::error!(error = %err, "scan failed");
                observer.on_error(&format!("scan failed: {err}"));
                return Err(err);
            }
        };

        observer.on_status(
            RunPhase::Converting,
            &format!(
                "converting {} of {} documents",
                scan.candidates.len(),
                scan.fetched
            ),
        );
        let report = match self.convert(&scan.candidates, config, observer).await {
            Ok(report) => report,
            Err(err) => {
                observer.on_error(&format!("conversion failed: {err}"));
                return Err(err);
            }
        };

        let verb = if report.dry_run { "would convert" } else { "converted" };
        observer.on_status(
            RunPhase::Done,
            &format!(
                "{verb} {} of {} documents, {} failed",
                report.converted,
                report.total,
                report.failed()
            ),
        );
        observer.on_complete(&report);
        Ok(report)
    }
}
