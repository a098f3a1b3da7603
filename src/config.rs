use crate::cli::OutputFormat;
use crate::error::CliError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Build-time default injected via build.rs; can be customized at build time
// via the API_URL env var.
const DEFAULT_API_URL: &str = env!("API_URL");

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub format: String,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load() -> Result<Self, CliError> {
        let path = Self::path()?;
        Self::load_from_path(&path)
    }

    /// Load config from a specific path (for testing).
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(CliError::ConfigRead)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), CliError> {
        let path = Self::path()?;
        self.save_to_path(&path)
    }

    /// Save config to a specific path (for testing).
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CliError::ConfigWrite)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(CliError::ConfigWrite)?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf, CliError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf, CliError> {
        let dirs = ProjectDirs::from("com", "petfriends", "petfriends")
            .ok_or_else(|| CliError::Other("Could not determine config directory".to_string()))?;
        Ok(dirs.config_dir().to_path_buf())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            format: "table".to_string(),
            color: true,
        }
    }
}

/// Runtime context combining config and CLI overrides.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    format_override: Option<OutputFormat>,
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self {
            config,
            format_override: None,
        })
    }

    /// Create context with a specific config (for testing).
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            format_override: None,
        }
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format_override = Some(format);
    }

    pub fn api_url(&self) -> String {
        std::env::var("API_URL").unwrap_or_else(|_| self.config.api_url.clone())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format_override.unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    // Helper to temporarily remove env var during test
    struct EnvVarGuard {
        name: &'static str,
        original: Option<String>,
    }

    impl EnvVarGuard {
        fn new(name: &'static str) -> Self {
            let original = std::env::var(name).ok();
            // SAFETY: Tests run serially via #[serial] attribute
            unsafe { std::env::remove_var(name) };
            Self { name, original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            if let Some(ref val) = self.original {
                // SAFETY: Tests run serially via #[serial] attribute
                unsafe { std::env::set_var(self.name, val) };
            }
        }
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.format, "table");
        assert!(config.color);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let content = r#"
api_url = "https://test.petfriends.example"
format = "json"
color = false
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.api_url, "https://test.petfriends.example");
        assert_eq!(config.format, "json");
        assert!(!config.color);
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        // Only set api_url, other fields should use defaults
        std::fs::write(&path, r#"api_url = "https://custom.example""#).unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.api_url, "https://custom.example");
        assert!(config.color); // default true
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        std::fs::write(&path, "not valid toml [[[").unwrap();

        let result = Config::load_from_path(&path);

        assert!(matches!(result, Err(CliError::ConfigParse(_))));
    }

    #[test]
    fn test_config_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("config.toml");

        let config = Config::default();
        config.save_to_path(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_config_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config {
            api_url: "https://saved.example".to_string(),
            format: "json".to_string(),
            color: false,
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();

        assert_eq!(loaded.api_url, "https://saved.example");
        assert_eq!(loaded.format, "json");
        assert!(!loaded.color);
    }

    #[test]
    #[serial]
    fn test_context_api_url_from_config() {
        let _guard = EnvVarGuard::new("API_URL");

        let config = Config {
            api_url: "https://config.example".to_string(),
            ..Config::default()
        };
        let ctx = Context::with_config(config);

        assert_eq!(ctx.api_url(), "https://config.example");
    }

    #[test]
    #[serial]
    fn test_context_api_url_from_env() {
        // SAFETY: Tests run serially via #[serial] attribute
        unsafe { std::env::set_var("API_URL", "https://env.example") };

        let config = Config {
            api_url: "https://config.example".to_string(),
            ..Config::default()
        };
        let ctx = Context::with_config(config);

        assert_eq!(ctx.api_url(), "https://env.example");

        // SAFETY: Tests run serially via #[serial] attribute
        unsafe { std::env::remove_var("API_URL") };
    }

    #[test]
    fn test_context_format_override() {
        let mut ctx = Context::with_config(Config::default());

        assert_eq!(ctx.output_format(), OutputFormat::Table);

        ctx.set_format(OutputFormat::Json);
        assert_eq!(ctx.output_format(), OutputFormat::Json);
    }
}
