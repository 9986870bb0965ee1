// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use slug_backfill::application::ports::{time::Clock, util::SlugGenerator};
use slug_backfill::application::services::ApplicationServices;
use slug_backfill::domain::document::{DocumentReadRepository, DocumentWriteRepository};
use slug_backfill::infrastructure::util::DefaultSlugGenerator;

/// Services wired to `store`, the real slug generator and a fixed clock.
pub fn build_services(store: &Arc<mocks::InMemoryStore>) -> ApplicationServices {
    let read: Arc<dyn DocumentReadRepository> = store.clone();
    let write: Arc<dyn DocumentWriteRepository> = store.clone();
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(read, write, clock, slugger)
}
