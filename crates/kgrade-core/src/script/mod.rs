//! Shell scripts run by the staging and execution containers.
//!
//! Every interpolated value is either base64 text, a validated identifier, or a
//! fixed/configured constant, so nothing here needs quoting beyond the literal `"..."`.

use crate::encode::EncodedPayload;

/// Name of the shared `emptyDir` volume.
pub const VOLUME_NAME: &str = "workspace-volume";
/// Mount point of the shared volume in every container.
pub const WORKSPACE_DIR: &str = "/workspace";
/// Volume sub-path holding the results file; mounted at [`RESULTS_DIR`] in the grader.
pub const RESULTS_SUBPATH: &str = "results";
/// Directory the grading entrypoint writes `results.json` into.
pub const RESULTS_DIR: &str = "/autograder/results";
/// Results document path inside the grading image.
pub const RESULTS_FILE: &str = "/autograder/results/results.json";

/// Build file copied next to the unpacked setup archive.
pub fn dockerfile(base_image: &str) -> String {
    format!(
        r#"
FROM {base_image}
COPY setup.sh /autograder/source/
COPY run_autograder /autograder/source/
COPY run_autograder /autograder/
RUN chmod +x /autograder/run_autograder
RUN chmod +x /autograder/source/setup.sh
RUN bash /autograder/source/setup.sh
"#
    )
}

/// buildkitd.toml trusting the internal registry over plain HTTP.
///
/// The quotes are pre-escaped because the text is placed inside `"..."` in the build script.
pub fn buildkitd_config(registry: &str) -> String {
    format!("[registry.\\\"{registry}\\\"]\n  http=true\n")
}

/// Staging step of the build pipeline: decode, unpack, write the build file.
pub fn build_staging(payload: &EncodedPayload, dockerfile: &str) -> String {
    format!(
        "echo \"{payload}\" | base64 -d > /tmp/files.zip && unzip /tmp/files.zip -d {WORKSPACE_DIR} && echo \"{dockerfile}\" > {WORKSPACE_DIR}/Dockerfile",
        payload = payload.as_str(),
    )
}

/// Execution step of the build pipeline: build the staged context and push it.
pub fn build_execution(buildkitd_config: &str, image: &str) -> String {
    format!(
        "printf '%s' \"{buildkitd_config}\" > /etc/buildkit/buildkitd.toml && exec buildctl-daemonless.sh build --frontend dockerfile.v0 --local context={WORKSPACE_DIR} --local dockerfile={WORKSPACE_DIR} --output type=image,name={image},push=true"
    )
}

/// Staging step of the grade pipeline.
///
/// Besides unpacking the submission it leaves an empty results file behind, so the grader
/// always has somewhere to write and the final `cat` always has something to print.
pub fn grade_staging(payload: &EncodedPayload) -> String {
    format!(
        "echo \"{payload}\" | base64 -d > /tmp/submission.zip && mkdir -p {WORKSPACE_DIR}/submission {WORKSPACE_DIR}/{RESULTS_SUBPATH} && unzip -o /tmp/submission.zip -d {WORKSPACE_DIR}/submission && : > {WORKSPACE_DIR}/{RESULTS_SUBPATH}/results.json",
        payload = payload.as_str(),
    )
}

/// Execution step of the grade pipeline: place the submission, grade, print results.
///
/// Exits with the grader's status so the cluster's on-failure restarts still apply.
pub fn grade_execution() -> String {
    format!(
        "mkdir -p /autograder/submission && cp -r {WORKSPACE_DIR}/submission/. /autograder/submission/ && /autograder/run_autograder; status=$?; cat {RESULTS_FILE}; exit $status"
    )
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    use super::*;
    use crate::encode::{encode_payload, is_shell_inert};

    /// Pull the first `echo "<...>"` literal out of a staging script.
    fn embedded_literal(script: &str) -> &str {
        let start = script.find("echo \"").expect("echo literal") + "echo \"".len();
        let len = script[start..].find('"').expect("closing quote");
        &script[start..start + len]
    }

    #[test]
    fn build_staging_embeds_decodable_payload() {
        let archive = b"PK\x03\x04\0\0\"$(id)`\\".to_vec();
        let script = build_staging(&encode_payload(&archive), &dockerfile("base:1"));

        let literal = embedded_literal(&script);
        assert!(literal.chars().all(is_shell_inert));
        assert_eq!(STANDARD.decode(literal).unwrap(), archive);
    }

    #[test]
    fn grade_staging_embeds_decodable_payload() {
        let archive: Vec<u8> = (0..=255u8).rev().collect();
        let script = grade_staging(&encode_payload(&archive));

        assert_eq!(STANDARD.decode(embedded_literal(&script)).unwrap(), archive);
    }

    #[test]
    fn build_staging_unpacks_then_writes_build_file() {
        let script = build_staging(&encode_payload(b"zip"), &dockerfile("base:1"));

        let unzip = script.find("unzip /tmp/files.zip -d /workspace").unwrap();
        let write = script.find("> /workspace/Dockerfile").unwrap();
        assert!(unzip < write);
        assert!(script.contains("FROM base:1"));
    }

    #[test]
    fn grade_staging_precreates_results_placeholder() {
        let script = grade_staging(&encode_payload(b"zip"));

        assert!(script.contains("mkdir -p /workspace/submission /workspace/results"));
        assert!(script.ends_with(": > /workspace/results/results.json"));
    }

    #[test]
    fn dockerfile_has_no_shell_active_characters() {
        let file = dockerfile(kgrade_model::BASE_IMAGE);
        for c in ['"', '$', '`', '\\'] {
            assert!(!file.contains(c), "build file contains {c:?}");
        }
        assert!(file.contains("RUN bash /autograder/source/setup.sh"));
    }

    #[test]
    fn buildkitd_config_marks_registry_insecure() {
        let cfg = buildkitd_config("reg.local:5000");
        assert_eq!(cfg, "[registry.\\\"reg.local:5000\\\"]\n  http=true\n");
    }

    #[test]
    fn build_execution_pushes_tagged_image() {
        let script = build_execution(&buildkitd_config("reg:5000"), "reg:5000/assignment:hw1");

        assert!(script.starts_with("printf '%s' \"[registry.\\\"reg:5000\\\"]"));
        assert!(script.contains("> /etc/buildkit/buildkitd.toml && exec buildctl-daemonless.sh build"));
        assert!(script.ends_with("--output type=image,name=reg:5000/assignment:hw1,push=true"));
    }

    #[test]
    fn grade_execution_streams_results_and_keeps_exit_status() {
        let script = grade_execution();

        let run = script.find("/autograder/run_autograder").unwrap();
        let cat = script.find("cat /autograder/results/results.json").unwrap();
        assert!(run < cat);
        assert!(script.ends_with("exit $status"));
    }
}
