// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use slug_backfill::domain::document::SlugAffixes;

#[derive(Clone)]
pub struct DummyClock;

impl slug_backfill::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        crate::support::mocks::time::fixed_now()
    }
}

/// Returns its input untouched, ignoring affixes.
#[derive(Clone)]
pub struct DummySlug;

impl slug_backfill::application::ports::util::SlugGenerator for DummySlug {
    fn generate(&self, s: &str, _affixes: &SlugAffixes) -> String {
        s.to_string()
    }
}
