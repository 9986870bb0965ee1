// src/application/ports/util.rs
use crate::domain::document::slug::SlugAffixes;

pub trait SlugGenerator: Send + Sync {
    fn generate(&self, text: &str, affixes: &SlugAffixes) -> String;
}
