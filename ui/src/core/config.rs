//! Build-time configuration.
//!
//! The backend base URL is baked in at compile time (`VERKI_BACKEND_URL`)
//! with a local-development fallback. There is no runtime environment on
//! wasm, so this mirrors how asset paths are resolved: once, at build.

/// Fallback used by local development builds.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the external verki API service.
///
/// Trailing slashes are trimmed so callers can join paths with a plain
/// `format!("{base}/api/...")`.
pub fn backend_base_url() -> String {
    option_env!("VERKI_BACKEND_URL")
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!backend_base_url().ends_with('/'));
    }

    #[test]
    fn base_url_is_absolute() {
        assert!(backend_base_url().starts_with("http"));
    }
}
