use axum::extract::{Multipart, multipart::MultipartError};
use tracing::debug;

use kgrade_model::{FIELD_ASSIGNMENT, FIELD_STUDENT, PipelineKind, PipelineRequest};

use crate::error::ApiError;

/// Read every multipart field and assemble a validated request.
///
/// The archive is read fully into memory. Unknown fields are skipped and a repeated field
/// keeps its last value. Any read failure (including the body ceiling) is a client error.
pub(crate) async fn read_pipeline_request(
    kind: PipelineKind,
    mut multipart: Multipart,
) -> Result<PipelineRequest, ApiError> {
    let mut assignment: Option<String> = None;
    let mut student: Option<String> = None;
    let mut archive: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            FIELD_ASSIGNMENT => assignment = Some(field.text().await.map_err(form_error)?),
            FIELD_STUDENT if kind.requires_student() => {
                student = Some(field.text().await.map_err(form_error)?)
            }
            n if n == kind.archive_field() => {
                let bytes = field.bytes().await.map_err(form_error)?;
                debug!(field = n, bytes = bytes.len(), "archive received");
                archive = Some(Vec::from(bytes));
            }
            other => debug!(field = other, "ignoring unknown form field"),
        }
    }

    PipelineRequest::from_fields(kind, assignment.as_deref(), student.as_deref(), archive)
        .map_err(ApiError::from)
}

fn form_error(e: MultipartError) -> ApiError {
    ApiError::Transport(format!("failed to parse form: {}", e.body_text()))
}
