use async_trait::async_trait;
use kgrade_model::PipelineRequest;

use crate::error::ApiError;

/// Pipeline submission handler.
///
/// This trait abstracts the backend implementation, allowing users to:
/// - Use the provided `PipelineApiAdapter`
/// - Implement custom handlers with additional logic (auth, quotas, etc.)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Turn a validated request into a cluster job and return the job name.
    ///
    /// Returns as soon as the cluster accepted or refused the job.
    async fn submit_pipeline(&self, request: PipelineRequest) -> Result<String, ApiError>;
}
