//! Fixed names and limits shared by intake, job builder and server.
//!
//! Keeping them here avoids scattering magic strings across crates.

/// Namespace jobs are created in unless the server is configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Internal registry that build jobs push to and grade jobs pull from.
///
/// Reached over plain HTTP; the build engine is told to trust it explicitly.
pub const REGISTRY_HOST: &str = "registry.default.svc.cluster.local:5000";

/// Image every assignment image is built `FROM`.
pub const BASE_IMAGE: &str = "registry.default.svc.cluster.local:5000/autograder-base:ubuntu-22.04";

/// Minimal utility image used by the staging container (needs `sh`, `base64`, `unzip`).
pub const STAGING_IMAGE: &str = "alpine/git";

/// Image running the build engine in the build pipeline.
pub const BUILD_ENGINE_IMAGE: &str = "moby/buildkit:latest";

/// Seconds a finished job is kept before the cluster deletes it.
pub const RETENTION_SECONDS: i32 = 60;

/// Ceiling on an uploaded request body (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 << 20;

/// Longest accepted assignment or student identifier.
///
/// Chosen so `autograde-<student>-<assignment>` stays within the 63-character limit
/// Kubernetes places on job names.
pub const IDENTIFIER_MAX_LEN: usize = 26;

pub const FIELD_ASSIGNMENT: &str = "assignment";
pub const FIELD_STUDENT: &str = "student";
pub const ARCHIVE_FIELD_SETUP: &str = "setup";
pub const ARCHIVE_FIELD_SUBMISSION: &str = "submission";

/// Label keys stamped on every job and its pod template.
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_PIPELINE: &str = "kgrade/pipeline";
pub const LABEL_ASSIGNMENT: &str = "kgrade/assignment";
pub const LABEL_STUDENT: &str = "kgrade/student";

/// Value of [`LABEL_MANAGED_BY`].
pub const MANAGED_BY: &str = "kgrade";
