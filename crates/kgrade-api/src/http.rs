use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use kgrade_model::{MAX_UPLOAD_BYTES, PipelineKind};

use crate::{error::ApiError, handler::ApiHandler, intake::read_pipeline_request};

/// Plain-text answer to `GET /`.
pub const BANNER: &str = concat!(
    "(",
    env!("CARGO_PKG_VERSION"),
    ") Job Server is running. Send POST requests to /submit\n"
);

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /           - Banner
    /// - POST /configure - Create an image build job
    /// - POST /submit    - Create a grading job
    ///
    /// Any other method on these paths answers 405. Bodies above 10 MiB are refused.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(banner).fallback(only_get))
            .route("/configure", post(configure::<H>).fallback(only_post))
            .route("/submit", post(submit::<H>).fallback(only_post))
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
            .with_state(self.handler)
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

/// Body returned once the cluster accepted a job.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub job_name: String,
    pub status: String,
}

impl CreatedResponse {
    fn created(job_name: String) -> Self {
        Self {
            job_name,
            status: "created".to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
async fn banner() -> &'static str {
    BANNER
}

/// POST /configure
async fn configure<H>(
    State(handler): State<Arc<H>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    create_job(handler.as_ref(), PipelineKind::Build, multipart).await
}

/// POST /submit
async fn submit<H>(
    State(handler): State<Arc<H>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    create_job(handler.as_ref(), PipelineKind::Grade, multipart).await
}

async fn create_job<H>(
    handler: &H,
    kind: PipelineKind,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CreatedResponse>, ApiError>
where
    H: ApiHandler,
{
    let multipart = multipart.map_err(|e| {
        warn!(%kind, error = %e.body_text(), "request is not multipart");
        ApiError::InvalidRequest(format!("failed to parse form: {}", e.body_text()))
    })?;

    let request = read_pipeline_request(kind, multipart)
        .await
        .inspect_err(|e| warn!(%kind, error = %e, "upload rejected"))?;

    info!(
        %kind,
        assignment = %request.assignment(),
        student = request.student().map(|s| s.as_str()).unwrap_or("-"),
        bytes = request.payload().len(),
        "upload accepted"
    );

    let job_name = handler.submit_pipeline(request).await?;

    Ok(Json(CreatedResponse::created(job_name)))
}

async fn only_get() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Only GET method allowed\n")
}

async fn only_post() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Only POST method allowed\n")
}
