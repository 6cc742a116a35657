//! Record store — the persistence contract the pipelines depend on.
//!
//! The trait keeps the pipelines free of sqlx so tests can run against an
//! in-memory implementation. `PgDocumentStore` is the production backend.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::assessment::MatchAssessment;
use crate::models::document::{DocumentKind, DocumentRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No row in {table} with id {1}", table = .0.table_name())]
    NotFound(DocumentKind, Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches one document row of the given kind. `Ok(None)` means the row
    /// does not exist; transport problems surface as `StoreError::Database`.
    async fn get_document(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<DocumentRecord>, StoreError>;

    /// Writes extracted text back onto a document row.
    async fn update_parsed_text(
        &self,
        kind: DocumentKind,
        id: Uuid,
        text: &str,
    ) -> Result<(), StoreError>;

    /// Inserts one assessment row for the pair. Append-only: repeated
    /// analyses of the same pair produce independent rows.
    async fn insert_match(
        &self,
        job_id: Uuid,
        resume_id: Uuid,
        assessment: &MatchAssessment,
    ) -> Result<(), StoreError>;
}

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get_document(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<DocumentRecord>, StoreError> {
        // Table and column names come from DocumentKind, never from input.
        let sql = format!(
            "SELECT {} AS display_name, location, parsed_text FROM {} WHERE id = $1",
            kind.display_column(),
            kind.table_name()
        );

        Ok(sqlx::query_as::<_, DocumentRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_parsed_text(
        &self,
        kind: DocumentKind,
        id: Uuid,
        text: &str,
    ) -> Result<(), StoreError> {
        let sql = format!(
            "UPDATE {} SET parsed_text = $1 WHERE id = $2",
            kind.table_name()
        );

        let result = sqlx::query(&sql)
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(kind, id));
        }

        info!("Stored parsed text for {} {id}", kind.table_name());
        Ok(())
    }

    async fn insert_match(
        &self,
        job_id: Uuid,
        resume_id: Uuid,
        assessment: &MatchAssessment,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO matches (job_id, resume_id, score, verdict, missing_skills, feedback)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(job_id)
        .bind(resume_id)
        .bind(assessment.score)
        .bind(assessment.verdict.as_str())
        .bind(&assessment.missing_skills)
        .bind(&assessment.feedback)
        .execute(&self.pool)
        .await?;

        info!("Inserted match row for job {job_id} / resume {resume_id}");
        Ok(())
    }
}
