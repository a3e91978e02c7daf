mod config;
pub use config::PipelineConfig;

mod domain;
pub use domain::{
    ARCHIVE_FIELD_SETUP, ARCHIVE_FIELD_SUBMISSION, BASE_IMAGE, BUILD_ENGINE_IMAGE,
    DEFAULT_NAMESPACE, FIELD_ASSIGNMENT, FIELD_STUDENT, IDENTIFIER_MAX_LEN, LABEL_ASSIGNMENT,
    LABEL_MANAGED_BY, LABEL_PIPELINE, LABEL_STUDENT, MANAGED_BY, MAX_UPLOAD_BYTES, REGISTRY_HOST,
    RETENTION_SECONDS, STAGING_IMAGE,
};
pub use domain::{Identifier, Labels};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::PipelineKind;

mod request;
pub use request::PipelineRequest;
