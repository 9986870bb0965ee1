use super::map_sqlx;
use crate::domain::document::{
    Document, DocumentFilter, DocumentId, DocumentPatch, DocumentQuery, DocumentReadRepository,
    DocumentType, DocumentWriteRepository, SlugLookup,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use serde_json::{Map, Value};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteDocumentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDocumentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteDocumentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDocumentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Inserts or replaces a whole document.
    pub async fn upsert(
        &self,
        id: &DocumentId,
        doc_type: &DocumentType,
        body: &Map<String, Value>,
    ) -> DomainResult<()> {
        let body = serde_json::to_string(body)
            .map_err(|err| DomainError::Validation(err.to_string()))?;

        sqlx::query(
            "INSERT INTO documents (id, doc_type, body) VALUES (?, ?, ?)
             ON CONFLICT (id) DO UPDATE SET doc_type = excluded.doc_type, body = excluded.body",
        )
        .bind(id.as_str())
        .bind(doc_type.as_str())
        .bind(body)
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}

/// Row shape every query, raw ones included, has to return.
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Option<String>,
    doc_type: String,
    body: Option<String>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .filter(|id| !id.trim().is_empty())
            .map(DocumentId::new)
            .transpose()?;

        let fields = match row.body.as_deref() {
            None => Map::new(),
            Some(body) => match serde_json::from_str::<Value>(body) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(DomainError::Persistence(
                        "document body is not a JSON object".into(),
                    ));
                }
                Err(err) => return Err(DomainError::Persistence(err.to_string())),
            },
        };

        Ok(Document {
            id,
            doc_type: DocumentType::new(row.doc_type)?,
            fields,
        })
    }
}

/// JSON path addressing a top-level field, e.g. `$."title"`.
fn field_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', "\\\""))
}

fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl SqliteDocumentReadRepository {
    fn build_filter_query<'a>(filter: &'a DocumentFilter, limit: usize) -> QueryBuilder<'a, Sqlite> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT id, doc_type, ");

        if filter.projection.is_empty() {
            builder.push("body");
        } else {
            builder.push("json_object(");
            let mut fields = builder.separated(", ");
            for field in &filter.projection {
                fields.push_bind(field.as_str());
                fields.push("body -> ");
                fields.push_bind_unseparated(field_path(field));
            }
            builder.push(")");
        }
        builder.push(" AS body FROM documents WHERE 1 = 1");

        if let Some(doc_type) = &filter.doc_type {
            builder.push(" AND doc_type = ");
            builder.push_bind(doc_type.as_str());
        }

        if let Some(term) = filter.search.as_deref() {
            if !filter.search_fields.is_empty() {
                let pattern = like_pattern(term);
                builder.push(" AND (");
                let mut clauses = builder.separated(" OR ");
                for field in &filter.search_fields {
                    clauses.push("lower(json_extract(documents.body, ");
                    clauses.push_bind_unseparated(field_path(field));
                    clauses.push_unseparated(")) LIKE ");
                    clauses.push_bind_unseparated(pattern.clone());
                    clauses.push_unseparated(" ESCAPE '\\'");
                }
                builder.push(")");
            }
        }

        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        builder
    }
}

#[async_trait]
impl DocumentReadRepository for SqliteDocumentReadRepository {
    async fn fetch(&self, query: &DocumentQuery, limit: usize) -> DomainResult<Vec<Document>> {
        let rows = match query {
            DocumentQuery::Raw(sql) => {
                // Stop reading once `limit` rows are decoded.
                let mut stream = sqlx::query_as::<_, DocumentRow>(sql).fetch(&*self.pool);
                let mut rows = Vec::new();
                while rows.len() < limit {
                    match stream.try_next().await.map_err(map_sqlx)? {
                        Some(row) => rows.push(row),
                        None => break,
                    }
                }
                rows
            }
            DocumentQuery::Filter(filter) => {
                let mut builder = Self::build_filter_query(filter, limit);
                builder
                    .build_query_as::<DocumentRow>()
                    .fetch_all(&*self.pool)
                    .await
                    .map_err(map_sqlx)?
            }
        };

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn find_slug_owner(&self, lookup: &SlugLookup) -> DomainResult<Option<DocumentId>> {
        let field = field_path(&lookup.slug_field);
        let current = format!("{field}.current");

        let owner = sqlx::query_scalar::<_, String>(
            "SELECT id FROM documents
             WHERE doc_type = ? AND id <> ?
               AND (json_extract(body, ?) = ? OR json_extract(body, ?) = ?)
             LIMIT 1",
        )
        .bind(lookup.doc_type.as_str())
        .bind(lookup.exclude_id.as_str())
        .bind(current)
        .bind(lookup.slug.as_str())
        .bind(field)
        .bind(lookup.slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        owner.map(DocumentId::new).transpose()
    }
}

#[async_trait]
impl DocumentWriteRepository for SqliteDocumentWriteRepository {
    async fn patch(&self, patch: DocumentPatch) -> DomainResult<()> {
        let DocumentPatch { id, field, value } = patch;
        let value = serde_json::to_string(&value)
            .map_err(|err| DomainError::Validation(err.to_string()))?;

        let result = sqlx::query("UPDATE documents SET body = json_set(body, ?, json(?)) WHERE id = ?")
            .bind(field_path(&field))
            .bind(value)
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("document {id} not found")));
        }
        Ok(())
    }
}
