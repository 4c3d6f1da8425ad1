//! Syntactic URL pre-filter.
//!
//! Not a URL parser: it rejects IP-literal hosts, uppercase TLDs and TLDs
//! longer than six letters, and accepts some strings a parser would refuse.
//! Callers rely on the exact accept set, so the pattern stays as is.

use std::sync::LazyLock;

use regex::Regex;

use crate::fetch::FetchError;

/// Scheme, domain, 2-6 letter TLD, optional port, optional path.
const URL_PATTERN: &str = r"^(https?://)([\w.-]+)(\.[a-z]{2,6})(:\d+)?(/.*)?$";

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"));

/// Whether `url` has the accepted shape.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Reject `url` with [`FetchError::InvalidInput`] unless it has the accepted shape.
pub fn validate_url(url: &str) -> Result<(), FetchError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(FetchError::InvalidInput)
    }
}
