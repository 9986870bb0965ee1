//! Pure text-to-slug normalization.
//!
//! Output only contains lowercase letters, digits and single hyphens, with no
//! hyphen at either end. Nothing here touches the store.

/// Optional prefix/suffix joined to the normalized text with a hyphen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugAffixes {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl SlugAffixes {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Lowercases `input`, drops punctuation and symbols, and turns each run of
/// whitespace, underscores and hyphens into one hyphen.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        }
        // anything else is removed without ending a separator run
    }

    out
}

/// Derives a slug from `text`. Returns an empty string when nothing usable
/// remains after normalization; affixes are not applied in that case.
pub fn generate(text: &str, affixes: &SlugAffixes) -> String {
    let base = normalize(text);
    if base.is_empty() {
        return base;
    }

    let prefix = affixes.prefix.as_deref().map(normalize).unwrap_or_default();
    let suffix = affixes.suffix.as_deref().map(normalize).unwrap_or_default();

    let mut slug = String::with_capacity(prefix.len() + base.len() + suffix.len() + 2);
    if !prefix.is_empty() {
        slug.push_str(&prefix);
        slug.push('-');
    }
    slug.push_str(&base);
    if !suffix.is_empty() {
        slug.push('-');
        slug.push_str(&suffix);
    }
    slug
}
