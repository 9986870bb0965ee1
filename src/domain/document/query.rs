use crate::domain::document::value_objects::{DocumentId, DocumentType, Slug};

/// Read request handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentQuery {
    /// Operator-supplied query text executed verbatim by the store.
    Raw(String),
    Filter(DocumentFilter),
}

/// Structured selection: optional type constraint, optional text match and the
/// fields to project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    /// `None` selects documents of any type.
    pub doc_type: Option<DocumentType>,
    /// Case-insensitive substring matched against `search_fields`.
    pub search: Option<String>,
    pub search_fields: Vec<String>,
    pub projection: Vec<String>,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>, fields: &[&str]) -> Self {
        self.search = Some(term.into());
        self.search_fields = dedup_fields(fields);
        self
    }

    pub fn project(mut self, fields: &[&str]) -> Self {
        self.projection = dedup_fields(fields);
        self
    }
}

fn dedup_fields(fields: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if !field.is_empty() && !out.iter().any(|f| f == field) {
            out.push((*field).to_string());
        }
    }
    out
}

/// Asks whether a document other than `exclude_id` of `doc_type` already uses `slug`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugLookup {
    pub doc_type: DocumentType,
    pub slug_field: String,
    pub slug: Slug,
    pub exclude_id: DocumentId,
}
