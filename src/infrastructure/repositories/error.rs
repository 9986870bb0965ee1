use crate::domain::errors::DomainError;

const CNT_DOCUMENT_ID: &str = "documents.id";
const CNT_DOCUMENT_BODY: &str = "json_valid";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains(CNT_DOCUMENT_ID) {
                return DomainError::Conflict("document id already exists".into());
            }
            if message.contains(CNT_DOCUMENT_BODY) {
                return DomainError::Validation("document body must be valid JSON".into());
            }
            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::ColumnNotFound(column) => DomainError::Persistence(format!(
            "query must return `id`, `doc_type` and `body` columns (missing `{column}`)"
        )),
        sqlx::Error::RowNotFound => DomainError::NotFound("document not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
