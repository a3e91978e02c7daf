use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Which two-phase pipeline a request turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineKind {
    /// Build and push the per-assignment grading image.
    Build,
    /// Run a student submission against an assignment image.
    Grade,
}

impl PipelineKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Build => "build",
            PipelineKind::Grade => "grade",
        }
    }

    /// Multipart field holding the archive for this kind.
    pub fn archive_field(&self) -> &'static str {
        match self {
            PipelineKind::Build => crate::ARCHIVE_FIELD_SETUP,
            PipelineKind::Grade => crate::ARCHIVE_FIELD_SUBMISSION,
        }
    }

    /// Whether the request must name a student.
    pub fn requires_student(&self) -> bool {
        matches!(self, PipelineKind::Grade)
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "build" | "configure" => Ok(PipelineKind::Build),
            "grade" | "submit" => Ok(PipelineKind::Grade),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_field_by_kind() {
        assert_eq!(PipelineKind::Build.archive_field(), "setup");
        assert_eq!(PipelineKind::Grade.archive_field(), "submission");
    }

    #[test]
    fn only_grade_requires_student() {
        assert!(!PipelineKind::Build.requires_student());
        assert!(PipelineKind::Grade.requires_student());
    }

    #[test]
    fn parses_kind_and_route_aliases() {
        assert_eq!("Build".parse::<PipelineKind>().unwrap(), PipelineKind::Build);
        assert_eq!("configure".parse::<PipelineKind>().unwrap(), PipelineKind::Build);
        assert_eq!(" grade ".parse::<PipelineKind>().unwrap(), PipelineKind::Grade);
        assert_eq!("submit".parse::<PipelineKind>().unwrap(), PipelineKind::Grade);
        assert!("deploy".parse::<PipelineKind>().is_err());
    }
}
