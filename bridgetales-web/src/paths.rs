//! Build-time deployment settings.
//!
//! `BRIDGETALES_API_URL` points the client at the story server and
//! `PUBLIC_URL` sets the base path when the app is hosted under a
//! subdirectory. Both are read at compile time; unset values fall back to the
//! defaults.

use bridgetales_core::ClientConfig;

/// Client configuration with any compile-time API override applied.
#[must_use]
pub fn client_config() -> ClientConfig {
    ClientConfig::default().with_api_base(option_env!("BRIDGETALES_API_URL"))
}

/// Base path for the router (e.g., `/tales` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/tales/"), Some(String::from("/tales")));
        assert_eq!(router_base_with_base("  "), None);
    }

    #[test]
    fn client_config_has_a_usable_endpoint() {
        let cfg = client_config();
        assert!(cfg.endpoint("story/generate").ends_with("/story/generate"));
    }
}
