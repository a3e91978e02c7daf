mod pipeline_request;
pub use pipeline_request::PipelineRequest;
