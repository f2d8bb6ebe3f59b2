//! Build-time configuration for the frontend.
//!
//! The bundle is served as static files, so there is no runtime environment
//! to read from. Values are taken from the environment of the `cargo build`
//! (or `trunk build`) invocation and fall back to defaults.

/// Base URL of the articles API when `ARTICLES_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "/api";

/// Base URL every API request is built from, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("ARTICLES_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(base: &str) -> &str {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE
    } else {
        trimmed
    }
}
