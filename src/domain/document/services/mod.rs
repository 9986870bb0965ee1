// src/domain/document/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::document::query::SlugLookup;
use crate::domain::document::repository::DocumentReadRepository;
use crate::domain::document::slug::SlugAffixes;
use crate::domain::document::value_objects::{DocumentId, DocumentType, Slug};
use crate::domain::errors::DomainResult;

/// Slugs handed out earlier in the same run, per document type.
#[derive(Debug, Default)]
pub struct ClaimedSlugs {
    inner: HashSet<(DocumentType, String)>,
}

impl ClaimedSlugs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, doc_type: &DocumentType, slug: &Slug) -> bool {
        self.inner
            .contains(&(doc_type.clone(), slug.as_str().to_string()))
    }

    pub fn claim(&mut self, doc_type: &DocumentType, slug: &Slug) {
        self.inner
            .insert((doc_type.clone(), slug.as_str().to_string()));
    }
}

/// Domain service producing slugs that are unique within a document type.
pub struct SlugService {
    read_repo: Arc<dyn DocumentReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    last_token: AtomicI64,
}

impl SlugService {
    pub fn new(
        read_repo: Arc<dyn DocumentReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
            last_token: AtomicI64::new(0),
        }
    }

    /// Base slug for `text`; empty when the text has nothing usable.
    pub fn derive(&self, text: &str, affixes: &SlugAffixes) -> String {
        self.generator.generate(text, affixes)
    }

    /// Returns `candidate` unless another document of the same type (or an
    /// earlier document in this run) already uses it, in which case a
    /// disambiguation token is appended.
    pub async fn ensure_unique(
        &self,
        doc_type: &DocumentType,
        slug_field: &str,
        candidate: Slug,
        own_id: &DocumentId,
        claimed: &ClaimedSlugs,
    ) -> DomainResult<Slug> {
        if claimed.contains(doc_type, &candidate) {
            return Ok(candidate.with_token(&self.next_token()));
        }

        let lookup = SlugLookup {
            doc_type: doc_type.clone(),
            slug_field: slug_field.to_string(),
            slug: candidate,
            exclude_id: own_id.clone(),
        };

        match self.read_repo.find_slug_owner(&lookup).await? {
            Some(owner) => {
                tracing::debug!(slug = %lookup.slug, owner = %owner, "slug already taken");
                Ok(lookup.slug.with_token(&self.next_token()))
            }
            None => Ok(lookup.slug),
        }
    }

    /// Time-based token, strictly increasing for this service instance.
    pub fn next_token(&self) -> String {
        let now = self.clock.now_millis();
        let mut last = self.last_token.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_token.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return to_base36(next),
                Err(current) => last = current,
            }
        }
    }
}

fn to_base36(value: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = value.unsigned_abs();
    if n == 0 {
        return "0".into();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}
