use super::{ConversionCommandService, ConversionConfig};
use crate::{
    application::error::ApplicationResult,
    domain::document::{
        Document, DocumentFilter, DocumentQuery, DocumentType,
        entity::{NAME_FIELD, TITLE_FIELD},
        specifications::NeedsSlugSpec,
    },
};

/// Documents read by a scan and the subset that needs a slug.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub fetched: usize,
    pub candidates: Vec<Document>,
}

impl ScanResult {
    pub fn skipped(&self) -> usize {
        self.fetched - self.candidates.len()
    }
}

impl ConversionCommandService {
    /// Reads documents from the store and keeps the conversion candidates.
    /// Any store failure aborts the scan without partial results.
    pub async fn scan(&self, config: &ConversionConfig) -> ApplicationResult<ScanResult> {
        config.validate()?;
        let query = build_query(config)?;
        let documents = self.read_repo.fetch(&query, config.max_documents).await?;
        let fetched = documents.len();

        let candidates: Vec<Document> = documents
            .into_iter()
            .filter(|doc| {
                NeedsSlugSpec::new(
                    doc,
                    config.source_field(),
                    &config.slug_field,
                    config.replace_existing,
                )
                .is_satisfied()
            })
            .collect();

        tracing::info!(
            fetched,
            candidates = candidates.len(),
            raw = matches!(query, DocumentQuery::Raw(_)),
            "scan finished"
        );

        Ok(ScanResult {
            fetched,
            candidates,
        })
    }
}

pub(super) fn build_query(config: &ConversionConfig) -> ApplicationResult<DocumentQuery> {
    if let Some(raw) = config.raw_query() {
        return Ok(DocumentQuery::Raw(raw.to_string()));
    }

    let source = config.source_field().unwrap_or_default();
    let mut filter = DocumentFilter::new();

    if let Some(doc_type) = &config.document_type {
        filter = filter.with_type(DocumentType::new(doc_type.clone())?);
    }

    if let Some(term) = config.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        filter = filter.with_search(term, &[TITLE_FIELD, NAME_FIELD, source]);
    }

    let filter = filter.project(&[TITLE_FIELD, NAME_FIELD, source, config.slug_field.as_str()]);
    Ok(DocumentQuery::Filter(filter))
}
