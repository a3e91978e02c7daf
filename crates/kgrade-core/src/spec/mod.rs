//! Two-phase job assembly.
//!
//! Each pipeline becomes a `batch/v1` Job whose pod has:
//! - one init container that stages the uploaded archive onto a shared `emptyDir`;
//! - one main container that does the real work once staging succeeded.
//!
//! Restarts are left to the cluster (`restartPolicy: OnFailure`); nothing here retries.

mod build;
mod grade;

use k8s_openapi::api::{
    batch::v1::{Job, JobSpec},
    core::v1::{
        Container, EmptyDirVolumeSource, PodSpec, PodTemplateSpec, Volume, VolumeMount,
    },
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::debug;

use kgrade_model::{PipelineConfig, PipelineRequest};

use crate::{
    encode::encode_payload,
    naming::job_name,
    script::{VOLUME_NAME, WORKSPACE_DIR},
};

const RESTART_ON_FAILURE: &str = "OnFailure";
const PULL_IF_NOT_PRESENT: &str = "IfNotPresent";
const PULL_ALWAYS: &str = "Always";

/// Turns validated requests into Job manifests.
#[derive(Debug, Clone, Copy)]
pub struct JobSpecBuilder<'a> {
    config: &'a PipelineConfig,
}

impl<'a> JobSpecBuilder<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Assemble the Job for `request`; `unix_secs` salts build names.
    pub fn build(&self, request: &PipelineRequest, unix_secs: u64) -> Job {
        let name = job_name(request, unix_secs);
        let payload = encode_payload(request.payload());
        debug!(
            job = %name,
            kind = %request.kind(),
            payload_bytes = request.payload().len(),
            encoded_bytes = payload.len(),
            "assembling job"
        );

        let pod = match request {
            PipelineRequest::Build { assignment, .. } => {
                build::pod_spec(self.config, assignment, &payload)
            }
            PipelineRequest::Grade { assignment, .. } => {
                grade::pod_spec(self.config, assignment, &payload)
            }
        };

        let labels = request.labels().into_inner();

        Job {
            metadata: ObjectMeta {
                name: Some(name),
                namespace: Some(self.config.namespace.clone()),
                labels: Some(labels.clone()),
                ..Default::default()
            },
            spec: Some(JobSpec {
                ttl_seconds_after_finished: Some(self.config.retention_seconds),
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels),
                        ..Default::default()
                    }),
                    spec: Some(pod),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Pod skeleton shared by both pipelines.
fn two_phase_pod(staging: Container, execution: Container) -> PodSpec {
    PodSpec {
        restart_policy: Some(RESTART_ON_FAILURE.to_string()),
        volumes: Some(vec![Volume {
            name: VOLUME_NAME.to_string(),
            empty_dir: Some(EmptyDirVolumeSource::default()),
            ..Default::default()
        }]),
        init_containers: Some(vec![staging]),
        containers: vec![execution],
        ..Default::default()
    }
}

fn workspace_mount() -> VolumeMount {
    VolumeMount {
        name: VOLUME_NAME.to_string(),
        mount_path: WORKSPACE_DIR.to_string(),
        ..Default::default()
    }
}

/// Container running `script` through `sh -c`.
fn shell_container(name: &str, image: &str, shell: &str, script: String) -> Container {
    Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        image_pull_policy: Some(PULL_IF_NOT_PRESENT.to_string()),
        command: Some(vec![shell.to_string(), "-c".to_string()]),
        args: Some(vec![script]),
        volume_mounts: Some(vec![workspace_mount()]),
        ..Default::default()
    }
}
