use k8s_openapi::api::core::v1::{EnvVar, PodSpec, SecurityContext};

use kgrade_model::{Identifier, PipelineConfig};

use super::{shell_container, two_phase_pod};
use crate::{encode::EncodedPayload, script};

const STAGING_NAME: &str = "buildkit-setup";
const ENGINE_NAME: &str = "buildkit";

/// Privileged build engine needs host networking entitlement for `RUN` steps.
const ENGINE_FLAGS: (&str, &str) = ("BUILDKITD_FLAGS", "--allow-insecure-entitlement network.host");

pub(super) fn pod_spec(
    config: &PipelineConfig,
    assignment: &Identifier,
    payload: &EncodedPayload,
) -> PodSpec {
    let staging = shell_container(
        STAGING_NAME,
        &config.staging_image,
        "/bin/sh",
        script::build_staging(payload, &script::dockerfile(&config.base_image)),
    );

    let mut engine = shell_container(
        ENGINE_NAME,
        &config.build_engine_image,
        "sh",
        script::build_execution(
            &script::buildkitd_config(&config.registry),
            &config.assignment_image(assignment),
        ),
    );
    engine.security_context = Some(SecurityContext {
        privileged: Some(true),
        ..Default::default()
    });
    engine.env = Some(vec![EnvVar {
        name: ENGINE_FLAGS.0.to_string(),
        value: Some(ENGINE_FLAGS.1.to_string()),
        ..Default::default()
    }]);

    two_phase_pod(staging, engine)
}

#[cfg(test)]
mod tests {
    use kgrade_model::{PipelineKind, REGISTRY_HOST};

    use crate::spec::JobSpecBuilder;
    use crate::spec::tests::{execution, request, script, staging};

    #[test]
    fn staging_writes_build_file_from_base_image() {
        let cfg = kgrade_model::PipelineConfig::default();
        let job = JobSpecBuilder::new(&cfg).build(&request(PipelineKind::Build, b"zip"), 0);
        let c = staging(&job);

        assert_eq!(c.name, "buildkit-setup");
        assert_eq!(c.image.as_deref(), Some("alpine/git"));
        assert_eq!(c.image_pull_policy.as_deref(), Some("IfNotPresent"));
        assert_eq!(c.command.as_deref(), Some(&["/bin/sh".to_string(), "-c".to_string()][..]));
        assert!(script(c).contains(&format!("FROM {}/autograder-base:ubuntu-22.04", REGISTRY_HOST)));
        assert!(script(c).contains("> /workspace/Dockerfile"));
    }

    #[test]
    fn engine_is_privileged_and_pushes_assignment_tag() {
        let cfg = kgrade_model::PipelineConfig::default();
        let job = JobSpecBuilder::new(&cfg).build(&request(PipelineKind::Build, b"zip"), 0);
        let c = execution(&job);

        assert_eq!(c.name, "buildkit");
        assert_eq!(c.image.as_deref(), Some("moby/buildkit:latest"));
        assert_eq!(
            c.security_context.as_ref().and_then(|s| s.privileged),
            Some(true)
        );

        let env = c.env.as_ref().unwrap();
        assert_eq!(env[0].name, "BUILDKITD_FLAGS");
        assert_eq!(
            env[0].value.as_deref(),
            Some("--allow-insecure-entitlement network.host")
        );

        let s = script(c);
        assert!(s.contains(&format!("[registry.\\\"{REGISTRY_HOST}\\\"]")));
        assert!(s.ends_with(&format!(
            "name={REGISTRY_HOST}/assignment:hw1,push=true"
        )));
    }
}
