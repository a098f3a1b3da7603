//! User-Agent helper for client requests
//!
//! Provides a consistent User-Agent string for all HTTP requests made by the
//! client. Format: `petfriends-cli/{version} ({os}; {arch})`

use std::sync::OnceLock;

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string for client requests.
///
/// Format: `petfriends-cli/0.1.0 (linux; x86_64)`
///
/// This value is computed once and cached for the lifetime of the process.
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "petfriends-cli/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    })
}
