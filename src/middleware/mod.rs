//! HTTP Middleware
//! Mission: Cross-cutting request plumbing shared by every route

pub mod logging;

pub use logging::request_logging;
