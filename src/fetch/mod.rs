//! Fetch pipeline.
//!
//! # Data Flow
//! ```text
//! url query parameter
//!     → validate.rs (anchored regex pre-filter, no network on failure)
//!     → service.rs (scoped client, one outbound GET, status check)
//!     → normalize.rs (two-pass unescape of the body)
//!     → FetchedHtml | FetchError
//! ```
//!
//! # Design Decisions
//! - Every call is independent; the only shared state is read-only config
//! - Failures are a tagged enum, mapped to HTTP responses in one place
//!   (`http::response`)

pub mod error;
pub mod normalize;
pub mod service;
pub mod validate;

pub use error::FetchError;
pub use normalize::normalize;
pub use service::{FetchRequest, FetchService, FetchedHtml};
pub use validate::{is_valid_url, validate_url};

/// Outcome of a single fetch call.
pub type FetchResult = Result<FetchedHtml, FetchError>;
