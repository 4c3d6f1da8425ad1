//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (preflight answers, Access-Control-* response headers)
//!     → fetch handler
//! ```
//!
//! Target URLs are only checked for shape by `fetch::validate`; there is no
//! allow-list of upstream hosts.

pub mod cors;

pub use cors::cors_layer;
