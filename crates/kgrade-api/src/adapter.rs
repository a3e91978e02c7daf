use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use kgrade_core::{Clock, JobSpecBuilder, JobSubmitter, system_clock};
use kgrade_model::{PipelineConfig, PipelineRequest};

use crate::error::ApiError;
use crate::handler::ApiHandler;

/// Adapter that bridges a `JobSubmitter` to `ApiHandler`.
///
/// Holds no per-request state; the submitter handle is built once and shared.
pub struct PipelineApiAdapter<S> {
    submitter: Arc<S>,
    config: PipelineConfig,
    clock: Clock,
}

impl<S> PipelineApiAdapter<S>
where
    S: JobSubmitter,
{
    /// Create a new adapter around the given submitter.
    pub fn new(submitter: Arc<S>, config: PipelineConfig) -> Self {
        Self {
            submitter,
            config,
            clock: system_clock,
        }
    }

    /// Replace the clock used to salt build job names.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl<S> ApiHandler for PipelineApiAdapter<S>
where
    S: JobSubmitter,
{
    async fn submit_pipeline(&self, request: PipelineRequest) -> Result<String, ApiError> {
        let job = JobSpecBuilder::new(&self.config).build(&request, (self.clock)());
        // release the raw archive before the cluster round trip
        drop(request);

        let name = self.submitter.create(&job).await?;
        info!(job = %name, "pipeline submitted");
        Ok(name)
    }
}
