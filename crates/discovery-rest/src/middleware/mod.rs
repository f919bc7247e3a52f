//! HTTP middleware.

mod request_log;

pub use request_log::request_log_middleware;
