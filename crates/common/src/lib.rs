//! Shared configuration for the Foxbit workspace.

mod environment;
mod logging;

pub use environment::{ParseEndpointError, RestEndpoint, BASE_URL_VAR, DEFAULT_REST_BASE_URL};
pub use logging::init_logging;
