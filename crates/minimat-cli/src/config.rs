use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for minimat.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MINIMAT_* prefix)
/// 3. Config file (~/.config/minimat/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text shown before each interactive line.
    ///
    /// Can be set via:
    /// - CLI: --prompt "> "
    /// - ENV: MINIMAT_PROMPT
    /// - Config: prompt = "> "
    pub prompt: String,

    /// Maximum number of stored vectors. Unbounded when absent.
    ///
    /// Can be set via:
    /// - CLI: --max-vectors 10
    /// - ENV: MINIMAT_MAX_VECTORS
    /// - Config: max_vectors = 10
    #[serde(deserialize_with = "deserialize_count")]
    pub max_vectors: Option<usize>,

    /// Log filter used when RUST_LOG is not set.
    pub log_level: String,

    /// CSV file loaded before the first prompt.
    ///
    /// Overridden by `--load`.
    pub autoload: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: String::from("minimat> "),
            max_vectors: None,
            log_level: String::from(crate::DEFAULT_LOG_LEVEL),
            autoload: None,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/minimat/config.toml
    /// Reads environment variables with MINIMAT_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("minimat");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Accept a count written as a TOML integer or as a numeric string.
///
/// Environment variables always arrive as strings.
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(usize),
        Str(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Int(n)) => Ok(Some(n)),
        Some(Count::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Count::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid count {s:?}: {e}"))),
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/minimat/config.toml
/// - macOS: ~/Library/Application Support/minimat/config.toml
/// - Windows: %APPDATA%\minimat\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("minimat")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Minimat Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MINIMAT_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Prompt shown before each line in interactive sessions
prompt = "minimat> "

# Log filter (error, warn, info, debug, trace). RUST_LOG takes precedence.
log_level = "warn"

# Cap the number of stored vectors. Leave unset for no limit.
#max_vectors = 10

# CSV file (name,x,y,z per line) to load at startup.
# Can also be given per run with: minimat --load vectors.csv
#autoload = "/path/to/vectors.csv"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
