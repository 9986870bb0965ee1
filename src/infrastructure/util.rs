use crate::application::ports::util::SlugGenerator;
use crate::domain::document::slug::{self, SlugAffixes};

/// Slug generator backed by the pure normalization in `domain::document::slug`.
#[derive(Default, Clone, Copy, Debug)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn generate(&self, text: &str, affixes: &SlugAffixes) -> String {
        slug::generate(text, affixes)
    }
}
