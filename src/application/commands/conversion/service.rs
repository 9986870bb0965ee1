// src/application/commands/conversion/service.rs
use std::sync::Arc;

use crate::domain::document::{
    DocumentReadRepository, DocumentWriteRepository, services::SlugService,
};

pub struct ConversionCommandService {
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) write_repo: Arc<dyn DocumentWriteRepository>,
    pub(super) slug_service: Arc<SlugService>,
}

impl ConversionCommandService {
    pub fn new(
        read_repo: Arc<dyn DocumentReadRepository>,
        write_repo: Arc<dyn DocumentWriteRepository>,
        slug_service: Arc<SlugService>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            slug_service,
        }
    }
}
