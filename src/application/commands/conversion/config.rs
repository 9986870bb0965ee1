use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::document::slug::SlugAffixes;

pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_MAX_DOCUMENTS: usize = 1000;
pub const DEFAULT_SLUG_FIELD: &str = "slug";

/// Immutable settings for one scan/convert run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Types offered to the operator. When non-empty, `document_type` must be one of them.
    pub allowed_types: Vec<String>,
    pub document_type: Option<String>,
    pub search: Option<String>,
    /// Overrides `document_type` and `search` entirely.
    pub raw_query: Option<String>,
    pub max_documents: usize,
    pub source_field: Option<String>,
    pub slug_field: String,
    pub replace_existing: bool,
    pub affixes: SlugAffixes,
    pub batch_size: usize,
    pub dry_run: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            allowed_types: Vec::new(),
            document_type: None,
            search: None,
            raw_query: None,
            max_documents: DEFAULT_MAX_DOCUMENTS,
            source_field: None,
            slug_field: DEFAULT_SLUG_FIELD.to_string(),
            replace_existing: false,
            affixes: SlugAffixes::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            dry_run: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        if self.batch_size == 0 {
            return Err(ApplicationError::validation("batch size must be at least 1"));
        }
        if self.max_documents == 0 {
            return Err(ApplicationError::validation(
                "max documents must be at least 1",
            ));
        }
        if self.slug_field.trim().is_empty() {
            return Err(ApplicationError::validation("slug field cannot be empty"));
        }
        if let Some(doc_type) = &self.document_type {
            if !self.allowed_types.is_empty() && !self.allowed_types.contains(doc_type) {
                return Err(ApplicationError::validation(format!(
                    "document type `{doc_type}` is not in the allowed list"
                )));
            }
        }
        Ok(())
    }

    pub fn source_field(&self) -> Option<&str> {
        self.source_field.as_deref()
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.raw_query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn document_type(mut self, doc_type: impl Into<String>) -> Self {
        self.config.document_type = Some(doc_type.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.config.search = Some(term.into());
        self
    }

    pub fn raw_query(mut self, query: impl Into<String>) -> Self {
        self.config.raw_query = Some(query.into());
        self
    }

    pub fn max_documents(mut self, max: usize) -> Self {
        self.config.max_documents = max;
        self
    }

    pub fn source_field(mut self, field: impl Into<String>) -> Self {
        self.config.source_field = Some(field.into());
        self
    }

    pub fn slug_field(mut self, field: impl Into<String>) -> Self {
        self.config.slug_field = field.into();
        self
    }

    pub fn replace_existing(mut self, replace: bool) -> Self {
        self.config.replace_existing = replace;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.affixes.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.affixes.suffix = Some(suffix.into());
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    pub fn build(self) -> ApplicationResult<ConversionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
