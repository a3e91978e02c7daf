use k8s_openapi::api::core::v1::{PodSpec, VolumeMount};

use kgrade_model::{Identifier, PipelineConfig};

use super::{PULL_ALWAYS, shell_container, two_phase_pod};
use crate::{
    encode::EncodedPayload,
    script::{self, RESULTS_DIR, RESULTS_SUBPATH, VOLUME_NAME},
};

const STAGING_NAME: &str = "submission-setup";
const GRADER_NAME: &str = "autograder";

pub(super) fn pod_spec(
    config: &PipelineConfig,
    assignment: &Identifier,
    payload: &EncodedPayload,
) -> PodSpec {
    let staging = shell_container(
        STAGING_NAME,
        &config.staging_image,
        "/bin/sh",
        script::grade_staging(payload),
    );

    let mut grader = shell_container(
        GRADER_NAME,
        &config.assignment_image(assignment),
        "/bin/sh",
        script::grade_execution(),
    );
    // assignment tags are overwritten by rebuilds
    grader.image_pull_policy = Some(PULL_ALWAYS.to_string());
    if let Some(mounts) = grader.volume_mounts.as_mut() {
        mounts.push(VolumeMount {
            name: VOLUME_NAME.to_string(),
            mount_path: RESULTS_DIR.to_string(),
            sub_path: Some(RESULTS_SUBPATH.to_string()),
            ..Default::default()
        });
    }

    two_phase_pod(staging, grader)
}
