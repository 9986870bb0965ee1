use super::{ConversionCommandService, ConversionConfig};
use crate::{
    application::{
        dto::{ConversionOutcome, ConversionProgress, ConversionReport},
        error::{ApplicationError, ApplicationResult},
        ports::ConversionObserverPort,
    },
    domain::document::{
        Document, DocumentId, DocumentPatch, Slug, SlugValue, services::ClaimedSlugs,
    },
};

pub const NO_SOURCE_TEXT: &str = "no source text found";

impl ConversionCommandService {
    /// Converts `candidates` in order, `batch_size` at a time, reporting progress
    /// after every chunk. A failing document is recorded and skipped.
    pub async fn convert(
        &self,
        candidates: &[Document],
        config: &ConversionConfig,
        observer: &ConversionObserverPort,
    ) -> ApplicationResult<ConversionReport> {
        config.validate()?;

        let mut report = ConversionReport::new(candidates.len(), config.dry_run);
        let mut claimed = ClaimedSlugs::new();

        for (index, chunk) in candidates.chunks(config.batch_size).enumerate() {
            for document in chunk {
                let outcome = self.convert_one(document, config, &mut claimed).await;
                report.record(outcome);
            }

            let progress = ConversionProgress {
                chunk: index + 1,
                converted: report.converted,
                processed: report.processed(),
                total: report.total,
            };
            tracing::debug!(
                chunk = progress.chunk,
                converted = progress.converted,
                total = progress.total,
                "chunk finished"
            );
            observer.on_progress(&progress);
        }

        tracing::info!(
            converted = report.converted,
            failed = report.failed(),
            total = report.total,
            dry_run = report.dry_run,
            "conversion finished"
        );
        Ok(report)
    }

    async fn convert_one(
        &self,
        document: &Document,
        config: &ConversionConfig,
        claimed: &mut ClaimedSlugs,
    ) -> ConversionOutcome {
        let id = document.id.as_ref().map(DocumentId::as_str);
        let source = document
            .source_text(config.source_field())
            .or(id)
            .unwrap_or_default();

        let candidate = match Slug::new(self.slug_service.derive(source, &config.affixes)) {
            Ok(slug) => slug,
            Err(_) => {
                tracing::warn!(id = ?id, reason = NO_SOURCE_TEXT, "slug derivation failed");
                return ConversionOutcome::failed(id, NO_SOURCE_TEXT);
            }
        };

        match self.assign_slug(document, candidate, config, claimed).await {
            Ok(slug) => {
                tracing::debug!(id = ?id, slug = %slug, dry_run = config.dry_run, "slug assigned");
                ConversionOutcome::converted(id, slug.into_inner())
            }
            Err(err) => {
                tracing::warn!(id = ?id, error = %err, "slug conversion failed");
                ConversionOutcome::failed(id, err.to_string())
            }
        }
    }

    async fn assign_slug(
        &self,
        document: &Document,
        candidate: Slug,
        config: &ConversionConfig,
        claimed: &mut ClaimedSlugs,
    ) -> ApplicationResult<Slug> {
        let id = document
            .id
            .clone()
            .ok_or_else(|| ApplicationError::validation("document has no identifier"))?;

        let slug = self
            .slug_service
            .ensure_unique(&document.doc_type, &config.slug_field, candidate, &id, claimed)
            .await?;

        if !config.dry_run {
            self.write_repo
                .patch(DocumentPatch {
                    id,
                    field: config.slug_field.clone(),
                    value: SlugValue::new(&slug),
                })
                .await?;
        }

        claimed.claim(&document.doc_type, &slug);
        Ok(slug)
    }
}
