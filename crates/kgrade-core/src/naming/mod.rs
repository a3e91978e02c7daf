//! Job naming.
//!
//! - build: `build-image-<assignment>-<unix seconds>`; two builds of one assignment collide
//!   only inside the same second.
//! - grade: `autograde-<student>-<assignment>`; no time salt, so a resubmission collides with
//!   the previous job until the cluster has deleted it after the retention window.

use std::time::{SystemTime, UNIX_EPOCH};

use kgrade_model::PipelineRequest;

/// Source of "now" in unix seconds, injected so naming stays testable.
pub type Clock = fn() -> u64;

/// Wall-clock seconds since the unix epoch.
pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Derive the job name for a request.
pub fn job_name(request: &PipelineRequest, unix_secs: u64) -> String {
    match request {
        PipelineRequest::Build { assignment, .. } => {
            format!("build-image-{assignment}-{unix_secs}")
        }
        PipelineRequest::Grade {
            assignment,
            student,
            ..
        } => format!("autograde-{student}-{assignment}"),
    }
}
