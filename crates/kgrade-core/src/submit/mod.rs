mod credentials;
pub use credentials::ClusterCredentials;

mod cluster;
pub use cluster::KubeJobSubmitter;

use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;

use crate::error::CoreError;

/// Creates jobs on the cluster.
///
/// This trait is the seam between request handling and the cluster API, allowing:
/// - the kube-backed [`KubeJobSubmitter`] in production
/// - in-memory fakes in tests
///
/// Implementations must not retry: the first rejection is returned as-is.
#[async_trait]
pub trait JobSubmitter: Send + Sync + 'static {
    /// Create `job` and return the name the cluster stored it under.
    ///
    /// A name that already exists in the namespace is a hard failure.
    async fn create(&self, job: &Job) -> Result<String, CoreError>;
}
