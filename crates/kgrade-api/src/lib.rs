//! HTTP surface of the grading job server.
//!
//! - `GET /`           banner
//! - `POST /configure` multipart `assignment` + `setup` archive → image build job
//! - `POST /submit`    multipart `assignment` + `student` + `submission` archive → grading job
//!
//! Both POST routes answer as soon as the cluster accepted or refused the job;
//! nothing waits for the job itself.

mod adapter;
mod error;
mod handler;
mod http;
mod intake;

pub use adapter::PipelineApiAdapter;
pub use error::ApiError;
pub use handler::ApiHandler;
pub use http::{BANNER, CreatedResponse, HttpApi};
