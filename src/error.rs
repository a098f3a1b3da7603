use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Not logged in. Run: petfriends login")]
    NotAuthenticated,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No pets available for this account")]
    NoPetsAvailable,

    #[error("Pet '{0}' not found. Run: petfriends pets list --mine")]
    PetNotFound(String),

    #[error("Expected status {expected}, got {got}: {body}")]
    UnexpectedStatus {
        expected: u16,
        got: u16,
        body: String,
    },

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("Failed to write config: {0}")]
    ConfigWrite(std::io::Error),

    #[error("Invalid config format: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Stored credentials are corrupted; run: petfriends logout")]
    CredentialsCorrupted,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Build an error for a call that did not come back with the expected
    /// status code, keeping whatever body the server sent for diagnostics.
    pub fn unexpected_status(expected: u16, got: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            expected,
            got,
            body: body.into(),
        }
    }
}
