use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::llm_client::CompletionBackend;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    /// Record store behind a trait seam. Production: `PgDocumentStore`.
    pub store: Arc<dyn DocumentStore>,
    /// Text-generation backend seam. Production: `LlmClient`.
    pub llm: Arc<dyn CompletionBackend>,
}
