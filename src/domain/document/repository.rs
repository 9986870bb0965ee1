use crate::domain::document::entity::{Document, DocumentPatch};
use crate::domain::document::query::{DocumentQuery, SlugLookup};
use crate::domain::document::value_objects::DocumentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentReadRepository: Send + Sync {
    /// Runs `query`, returning at most `limit` documents.
    async fn fetch(&self, query: &DocumentQuery, limit: usize) -> DomainResult<Vec<Document>>;

    /// Returns the id of a document matching the lookup, if one exists.
    async fn find_slug_owner(&self, lookup: &SlugLookup) -> DomainResult<Option<DocumentId>>;
}

#[async_trait]
pub trait DocumentWriteRepository: Send + Sync {
    /// Applies the patch to one document atomically.
    async fn patch(&self, patch: DocumentPatch) -> DomainResult<()>;
}
