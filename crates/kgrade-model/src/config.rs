use serde::{Deserialize, Serialize};

use crate::domain::{
    BASE_IMAGE, BUILD_ENGINE_IMAGE, DEFAULT_NAMESPACE, REGISTRY_HOST, RETENTION_SECONDS,
    STAGING_IMAGE,
};

/// Cluster-facing settings consumed by the job spec builder and submitter.
///
/// Defaults match the in-cluster deployment; tests and alternative clusters override fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Namespace jobs are created in.
    pub namespace: String,
    /// Registry host (`host:port`) assignment images are pushed to and pulled from.
    pub registry: String,
    /// Image the synthesized build file starts `FROM`.
    pub base_image: String,
    /// Utility image for the staging container.
    pub staging_image: String,
    /// Build engine image for the build pipeline's execution container.
    pub build_engine_image: String,
    /// Seconds a finished job is retained before cluster cleanup.
    pub retention_seconds: i32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            registry: REGISTRY_HOST.to_string(),
            base_image: BASE_IMAGE.to_string(),
            staging_image: STAGING_IMAGE.to_string(),
            build_engine_image: BUILD_ENGINE_IMAGE.to_string(),
            retention_seconds: RETENTION_SECONDS,
        }
    }
}

impl PipelineConfig {
    /// Image reference an assignment is pushed to and graded with.
    ///
    /// ```
    /// use kgrade_model::{Identifier, PipelineConfig};
    ///
    /// let cfg = PipelineConfig::default();
    /// let hw = Identifier::parse("assignment", "hw1").unwrap();
    /// assert_eq!(
    ///     cfg.assignment_image(&hw),
    ///     "registry.default.svc.cluster.local:5000/assignment:hw1"
    /// );
    /// ```
    pub fn assignment_image(&self, assignment: &crate::Identifier) -> String {
        format!("{}/assignment:{}", self.registry, assignment)
    }
}
