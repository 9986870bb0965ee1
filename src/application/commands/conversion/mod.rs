// src/application/commands/conversion/mod.rs
mod config;
mod convert;
mod run;
mod scan;
mod service;

pub use config::{
    ConversionConfig, ConversionConfigBuilder, DEFAULT_BATCH_SIZE, DEFAULT_MAX_DOCUMENTS,
    DEFAULT_SLUG_FIELD,
};
pub use convert::NO_SOURCE_TEXT;
pub use scan::ScanResult;
pub use service::ConversionCommandService;
