use std::fmt;

use crate::{
    FIELD_ASSIGNMENT, FIELD_STUDENT, LABEL_ASSIGNMENT, LABEL_MANAGED_BY, LABEL_PIPELINE,
    LABEL_STUDENT, Labels, MANAGED_BY,
    domain::Identifier,
    error::{ModelError, ModelResult},
    kind::PipelineKind,
};

/// One validated upload, alive for the duration of a single HTTP call.
///
/// The student identifier is present exactly when the kind is [`PipelineKind::Grade`];
/// the variants make that unrepresentable otherwise.
#[derive(Clone, PartialEq, Eq)]
pub enum PipelineRequest {
    Build {
        assignment: Identifier,
        payload: Vec<u8>,
    },
    Grade {
        assignment: Identifier,
        student: Identifier,
        payload: Vec<u8>,
    },
}

impl PipelineRequest {
    /// Assemble a request from raw intake fields.
    ///
    /// Missing fields are reported in a fixed order (assignment, student, archive) so the
    /// caller always sees the first problem. `student` is ignored for builds.
    pub fn from_fields(
        kind: PipelineKind,
        assignment: Option<&str>,
        student: Option<&str>,
        payload: Option<Vec<u8>>,
    ) -> ModelResult<Self> {
        let assignment = assignment.ok_or(ModelError::MissingField(FIELD_ASSIGNMENT))?;
        let assignment = Identifier::parse(FIELD_ASSIGNMENT, assignment)?;

        match kind {
            PipelineKind::Build => {
                let payload = payload.ok_or(ModelError::MissingField(kind.archive_field()))?;
                Ok(Self::Build {
                    assignment,
                    payload,
                })
            }
            PipelineKind::Grade => {
                let student = student.ok_or(ModelError::MissingField(FIELD_STUDENT))?;
                let student = Identifier::parse(FIELD_STUDENT, student)?;
                let payload = payload.ok_or(ModelError::MissingField(kind.archive_field()))?;
                Ok(Self::Grade {
                    assignment,
                    student,
                    payload,
                })
            }
        }
    }

    pub fn kind(&self) -> PipelineKind {
        match self {
            Self::Build { .. } => PipelineKind::Build,
            Self::Grade { .. } => PipelineKind::Grade,
        }
    }

    pub fn assignment(&self) -> &Identifier {
        match self {
            Self::Build { assignment, .. } | Self::Grade { assignment, .. } => assignment,
        }
    }

    pub fn student(&self) -> Option<&Identifier> {
        match self {
            Self::Build { .. } => None,
            Self::Grade { student, .. } => Some(student),
        }
    }

    /// Raw archive bytes exactly as uploaded.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Build { payload, .. } | Self::Grade { payload, .. } => payload,
        }
    }

    /// Labels identifying the job produced from this request.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::new();
        labels
            .insert(LABEL_MANAGED_BY, MANAGED_BY)
            .insert(LABEL_PIPELINE, self.kind().as_str())
            .insert(LABEL_ASSIGNMENT, self.assignment().as_str());
        if let Some(student) = self.student() {
            labels.insert(LABEL_STUDENT, student.as_str());
        }
        labels
    }
}

// Payloads can be megabytes; only their length is worth printing.
impl fmt::Debug for PipelineRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineRequest")
            .field("kind", &self.kind())
            .field("assignment", self.assignment())
            .field("student", &self.student())
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_ignores_student() {
        let req = PipelineRequest::from_fields(
            PipelineKind::Build,
            Some("HW1"),
            Some("alice"),
            Some(vec![1, 2, 3]),
        )
        .unwrap();

        assert_eq!(req.kind(), PipelineKind::Build);
        assert_eq!(req.assignment().as_str(), "hw1");
        assert!(req.student().is_none());
        assert_eq!(req.payload(), &[1, 2, 3]);
    }

    #[test]
    fn grade_requires_student() {
        let err = PipelineRequest::from_fields(
            PipelineKind::Grade,
            Some("hw1"),
            None,
            Some(vec![0]),
        )
        .unwrap_err();
        assert_eq!(err, ModelError::MissingField("student"));
    }

    #[test]
    fn missing_fields_reported_in_order() {
        let err = PipelineRequest::from_fields(PipelineKind::Grade, None, None, None).unwrap_err();
        assert_eq!(err, ModelError::MissingField("assignment"));

        let err = PipelineRequest::from_fields(PipelineKind::Grade, Some("hw1"), Some("bob"), None)
            .unwrap_err();
        assert_eq!(err, ModelError::MissingField("submission"));

        let err = PipelineRequest::from_fields(PipelineKind::Build, Some("hw1"), None, None)
            .unwrap_err();
        assert_eq!(err, ModelError::MissingField("setup"));
    }

    #[test]
    fn invalid_student_is_rejected() {
        let err = PipelineRequest::from_fields(
            PipelineKind::Grade,
            Some("hw1"),
            Some("bob; reboot"),
            Some(vec![]),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::IdentifierCharset { field: "student", .. }));
    }

    #[test]
    fn labels_carry_identifiers() {
        let req = PipelineRequest::from_fields(
            PipelineKind::Grade,
            Some("HW1"),
            Some("Bob"),
            Some(vec![]),
        )
        .unwrap();

        let labels = req.labels();
        assert_eq!(labels.get(LABEL_MANAGED_BY), Some("kgrade"));
        assert_eq!(labels.get(LABEL_PIPELINE), Some("grade"));
        assert_eq!(labels.get(LABEL_ASSIGNMENT), Some("hw1"));
        assert_eq!(labels.get(LABEL_STUDENT), Some("bob"));
    }

    #[test]
    fn debug_hides_payload() {
        let req = PipelineRequest::from_fields(
            PipelineKind::Build,
            Some("hw1"),
            None,
            Some(b"secret-bytes".to_vec()),
        )
        .unwrap();

        let dbg = format!("{req:?}");
        assert!(dbg.contains("payload_len: 12"));
        assert!(!dbg.contains("secret"));
    }
}
