use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use kube::{
    Api, Client,
    api::PostParams,
};
use tracing::{error, info};

use super::JobSubmitter;
use crate::error::CoreError;

/// [`JobSubmitter`] backed by the cluster's `batch/v1` jobs API in one namespace.
#[derive(Clone)]
pub struct KubeJobSubmitter {
    jobs: Api<Job>,
    namespace: String,
}

impl KubeJobSubmitter {
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            jobs: Api::namespaced(client, &namespace),
            namespace,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl JobSubmitter for KubeJobSubmitter {
    async fn create(&self, job: &Job) -> Result<String, CoreError> {
        let requested = job.metadata.name.clone().unwrap_or_default();

        match self.jobs.create(&PostParams::default(), job).await {
            Ok(created) => {
                let name = created.metadata.name.unwrap_or(requested);
                info!(job = %name, namespace = %self.namespace, "job created");
                Ok(name)
            }
            Err(e) => {
                let err = CoreError::from(e);
                error!(job = %requested, namespace = %self.namespace, error = %err, "job creation rejected");
                Err(err)
            }
        }
    }
}
