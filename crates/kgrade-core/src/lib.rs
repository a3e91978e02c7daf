pub mod encode;
pub mod error;
pub mod naming;
pub mod script;
pub mod spec;
pub mod submit;

pub use encode::{EncodedPayload, encode_payload};
pub use error::CoreError;
pub use naming::{Clock, job_name, system_clock};
pub use spec::JobSpecBuilder;
pub use submit::{ClusterCredentials, JobSubmitter, KubeJobSubmitter};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::spec::JobSpecBuilder;
    pub use crate::submit::{ClusterCredentials, JobSubmitter, KubeJobSubmitter};
}
