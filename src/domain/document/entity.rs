use crate::domain::document::value_objects::{DocumentId, DocumentType, SlugValue};
use serde_json::{Map, Value};

pub const TITLE_FIELD: &str = "title";
pub const NAME_FIELD: &str = "name";

/// A document as returned by the store. Only the projected fields are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// `None` when the query did not return an identifier.
    pub id: Option<DocumentId>,
    pub doc_type: DocumentType,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: Option<DocumentId>, doc_type: DocumentType) -> Self {
        Self {
            id,
            doc_type,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Non-blank string value of `field`.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Source text: the configured field, then `title`, then `name`.
    pub fn source_text(&self, source_field: Option<&str>) -> Option<&str> {
        source_field
            .and_then(|field| self.text(field))
            .or_else(|| self.text(TITLE_FIELD))
            .or_else(|| self.text(NAME_FIELD))
    }

    /// Current slug held in `slug_field`, if any. Plain string values are accepted
    /// alongside the structured `{ current }` form.
    pub fn current_slug(&self, slug_field: &str) -> Option<&str> {
        let value = self.fields.get(slug_field)?;
        let current = match value {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get("current").and_then(Value::as_str),
            _ => None,
        };
        current.filter(|s| !s.trim().is_empty())
    }
}

/// Single-document partial update setting the slug attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPatch {
    pub id: DocumentId,
    pub field: String,
    pub value: SlugValue,
}
