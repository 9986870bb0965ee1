// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_document;

pub use error::map_sqlx;
pub use sqlite_document::{SqliteDocumentReadRepository, SqliteDocumentWriteRepository};
