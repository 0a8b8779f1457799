//! Bearer token normalization
//!
//! Turns a raw credential into the value of an `Authorization` header.

use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;

/// Canonical scheme prefix written in front of every credential.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Shortest credential accepted, in bytes. Equal to the prefix length.
pub const MIN_TOKEN_LEN: usize = BEARER_PREFIX.len();

/// Normalize a raw credential into a `Bearer <credential>` header value.
///
/// A leading `bearer ` in any ASCII case is replaced by the canonical
/// `Bearer `. Anything else is prefixed as-is, including values that already
/// contain a space such as `"Token abc"`, which becomes `"Bearer Token abc"`.
///
/// # Errors
///
/// Returns [`ChatError::InvalidToken`] if `raw` is shorter than
/// [`MIN_TOKEN_LEN`] bytes.
///
/// # Example
///
/// ```rust
/// use robert::auth::normalize;
///
/// assert_eq!(normalize("bearer sk-123").unwrap(), "Bearer sk-123");
/// assert_eq!(normalize("sk-1234567").unwrap(), "Bearer sk-1234567");
/// assert!(normalize("short").is_err());
/// ```
pub fn normalize(raw: &str) -> ChatResult<String> {
    if raw.len() < MIN_TOKEN_LEN {
        return Err(ChatError::invalid_token(raw.len(), MIN_TOKEN_LEN));
    }

    if let Some(rest) = strip_bearer(raw) {
        return Ok(format!("{BEARER_PREFIX}{rest}"));
    }

    // The first space is located but never used to split the credential:
    // "Token abc" is kept whole rather than reduced to "abc".
    let space = raw.find(' ');
    log_debug!(
        has_space = space.is_some(),
        "Credential has no bearer scheme, prefixing verbatim"
    );
    Ok(format!("{BEARER_PREFIX}{raw}"))
}

/// Return the remainder after a case-insensitive `bearer ` prefix.
fn strip_bearer(raw: &str) -> Option<&str> {
    let head = raw.get(..MIN_TOKEN_LEN)?;
    if head.eq_ignore_ascii_case(BEARER_PREFIX) {
        raw.get(MIN_TOKEN_LEN..)
    } else {
        None
    }
}
