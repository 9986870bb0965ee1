// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::conversion::ConversionCommandService,
        ports::{ClockPort, SlugGeneratorPort},
    },
    domain::document::{DocumentReadRepository, DocumentWriteRepository, services::SlugService},
};

pub struct ApplicationServices {
    pub conversion: Arc<ConversionCommandService>,
}

impl ApplicationServices {
    pub fn new(
        document_read_repo: Arc<dyn DocumentReadRepository>,
        document_write_repo: Arc<dyn DocumentWriteRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(
            Arc::clone(&document_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let conversion = Arc::new(ConversionCommandService::new(
            Arc::clone(&document_read_repo),
            Arc::clone(&document_write_repo),
            slug_service,
        ));

        Self { conversion }
    }
}
