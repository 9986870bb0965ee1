pub mod entity;
pub mod query;
pub mod repository;
pub mod services;
pub mod slug;
pub mod specifications;
pub mod value_objects;

pub use entity::{Document, DocumentPatch};
pub use query::{DocumentFilter, DocumentQuery, SlugLookup};
pub use repository::{DocumentReadRepository, DocumentWriteRepository};
pub use slug::SlugAffixes;
pub use value_objects::{DocumentId, DocumentType, Slug, SlugValue};
