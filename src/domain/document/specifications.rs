use crate::domain::document::entity::Document;

/// A document needs a slug when it has source text and either has no current
/// slug or existing slugs are being replaced.
pub struct NeedsSlugSpec<'a> {
    document: &'a Document,
    source_field: Option<&'a str>,
    slug_field: &'a str,
    replace_existing: bool,
}

impl<'a> NeedsSlugSpec<'a> {
    pub fn new(
        document: &'a Document,
        source_field: Option<&'a str>,
        slug_field: &'a str,
        replace_existing: bool,
    ) -> Self {
        Self {
            document,
            source_field,
            slug_field,
            replace_existing,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_source_text() && (self.replace_existing || !self.has_slug())
    }

    fn has_source_text(&self) -> bool {
        self.document.source_text(self.source_field).is_some()
    }

    fn has_slug(&self) -> bool {
        self.document.current_slug(self.slug_field).is_some()
    }
}
