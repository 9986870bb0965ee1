// tests/support/builders.rs
use serde_json::json;
use slug_backfill::domain::document::{Document, DocumentId, DocumentType};

pub struct DocumentBuilder {
    id: Option<String>,
    doc_type: String,
    title: Option<String>,
    slug: Option<String>,
    extra: Vec<(String, serde_json::Value)>,
}

impl DocumentBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            doc_type: "post".into(),
            title: None,
            slug: None,
            extra: Vec::new(),
        }
    }

    /// Document without an identifier, as a raw query may return.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            ..Self::new("")
        }
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Document {
        let id = self.id.map(|id| DocumentId::new(id).unwrap());
        let mut doc = Document::new(id, DocumentType::new(self.doc_type).unwrap());
        if let Some(title) = self.title {
            doc = doc.with_field("title", title);
        }
        if let Some(slug) = self.slug {
            doc = doc.with_field("slug", json!({ "_type": "slug", "current": slug }));
        }
        for (name, value) in self.extra {
            doc = doc.with_field(name, value);
        }
        doc
    }
}

/// `count` posts titled "Post 1".."Post N" with ids "p1".."pN".
pub fn numbered_posts(count: usize) -> Vec<Document> {
    (1..=count)
        .map(|n| DocumentBuilder::new(format!("p{n}")).title(format!("Post {n}")).build())
        .collect()
}
