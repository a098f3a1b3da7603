//! Exit codes for CLI commands.
//!
//! Provides standardized exit codes for different error conditions,
//! enabling scripting and automation.

/// Success - command completed successfully.
pub const SUCCESS: i32 = 0;

/// Usage error - invalid arguments or missing required options.
pub const USAGE: i32 = 2;

/// Not found - requested pet does not exist.
pub const NOT_FOUND: i32 = 3;

/// Network error - API call failed or timeout.
pub const NETWORK: i32 = 4;

/// Authentication error - invalid or missing credentials.
pub const AUTH: i32 = 5;

/// Internal error - unexpected error occurred.
pub const INTERNAL: i32 = 7;

/// Convert an anyhow::Error to an appropriate exit code.
pub fn from_error(err: &anyhow::Error) -> i32 {
    use crate::error::CliError;

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::NotAuthenticated | CliError::InvalidCredentials => AUTH,
            CliError::PetNotFound(_) | CliError::NoPetsAvailable => NOT_FOUND,
            CliError::Network(_) => NETWORK,
            CliError::UnexpectedStatus { got, .. } if *got == 403 => AUTH,
            CliError::UnexpectedStatus { got, .. } if *got == 404 => NOT_FOUND,
            CliError::UnexpectedStatus { got, .. } if *got == 400 => USAGE,
            _ => INTERNAL,
        };
    }

    // Transport errors surfaced straight from reqwest
    if err.downcast_ref::<reqwest::Error>().is_some() {
        return NETWORK;
    }

    INTERNAL
}
