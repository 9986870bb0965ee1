// tests/support/mocks/store.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use slug_backfill::domain::document::{
    Document, DocumentId, DocumentPatch, DocumentQuery, DocumentReadRepository,
    DocumentWriteRepository, SlugLookup,
};
use slug_backfill::domain::errors::{DomainError, DomainResult};

/// インメモリのドキュメントストア（読み書き両方を実装）
#[derive(Default)]
pub struct InMemoryStore {
    docs: Mutex<Vec<Document>>,
    patches: Mutex<Vec<DocumentPatch>>,
    queries: Mutex<Vec<DocumentQuery>>,
    lookups: Mutex<usize>,
    fail_fetch: Option<String>,
    reject_patch_for: HashSet<String>,
}

impl InMemoryStore {
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs: Mutex::new(docs),
            ..Self::default()
        }
    }

    /// Every fetch fails with `message`.
    pub fn failing_fetch(mut self, message: impl Into<String>) -> Self {
        self.fail_fetch = Some(message.into());
        self
    }

    /// Patches for `id` are rejected.
    pub fn rejecting_patch_for(mut self, id: impl Into<String>) -> Self {
        self.reject_patch_for.insert(id.into());
        self
    }

    pub fn patches(&self) -> Vec<DocumentPatch> {
        self.patches.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<DocumentQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }

    pub fn current_slug(&self, id: &str, slug_field: &str) -> Option<String> {
        self.docs
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id.as_ref().map(DocumentId::as_str) == Some(id))
            .and_then(|d| d.current_slug(slug_field).map(str::to_string))
    }
}

fn matches_filter(doc: &Document, query: &DocumentQuery) -> bool {
    let DocumentQuery::Filter(filter) = query else {
        return true;
    };
    if let Some(doc_type) = &filter.doc_type {
        if &doc.doc_type != doc_type {
            return false;
        }
    }
    match filter.search.as_deref() {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            filter
                .search_fields
                .iter()
                .filter_map(|f| doc.text(f))
                .any(|text| text.to_lowercase().contains(&term))
        }
    }
}

#[async_trait]
impl DocumentReadRepository for InMemoryStore {
    async fn fetch(&self, query: &DocumentQuery, limit: usize) -> DomainResult<Vec<Document>> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(message) = &self.fail_fetch {
            return Err(DomainError::Persistence(message.clone()));
        }
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| matches_filter(d, query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_slug_owner(&self, lookup: &SlugLookup) -> DomainResult<Option<DocumentId>> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.doc_type == lookup.doc_type)
            .filter(|d| d.id.as_ref() != Some(&lookup.exclude_id))
            .find(|d| d.current_slug(&lookup.slug_field) == Some(lookup.slug.as_str()))
            .and_then(|d| d.id.clone()))
    }
}

#[async_trait]
impl DocumentWriteRepository for InMemoryStore {
    async fn patch(&self, patch: DocumentPatch) -> DomainResult<()> {
        if self.reject_patch_for.contains(patch.id.as_str()) {
            return Err(DomainError::Persistence("write rejected".into()));
        }
        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .iter_mut()
            .find(|d| d.id.as_ref() == Some(&patch.id))
            .ok_or_else(|| DomainError::NotFound(format!("document {} not found", patch.id)))?;
        let value = serde_json::to_value(&patch.value)
            .map_err(|err| DomainError::Validation(err.to_string()))?;
        doc.fields.insert(patch.field.clone(), value);
        drop(docs);
        self.patches.lock().unwrap().push(patch);
        Ok(())
    }
}
