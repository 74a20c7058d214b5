//! Error response types shared by the stable HTTP surface.
//!
//! - RFC 9457 Problem Details (`Problem`, `ValidationViolation`)
//! - Static error catalog entries (`ErrDef`)
//!
//! With the `axum` feature (on by default) `Problem` is directly usable as a response,
//! and `ApiResult<T>` is the return type of every REST handler.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;

pub use catalog::ErrDef;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ValidationViolation};

/// Result type of REST handlers: success body or a problem response.
pub type ApiResult<T> = Result<T, Problem>;

/// Attach the request path and an optional trace id to a `Problem`.
pub fn finalize(mut p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
