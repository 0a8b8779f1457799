//! Logging utilities for robert
//!
//! Re-exports tracing macros with log_* naming so call sites read the same
//! across the crate. No subscriber is installed here.

pub use tracing::{debug as log_debug, error as log_error, warn as log_warn};
