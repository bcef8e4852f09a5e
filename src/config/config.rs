use crate::params::Endpoint;
use crate::validate::validate_metadata_flags;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub http: HttpConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Endpoint used when none is given on the command line: "words" or "sug"
    pub endpoint: String,

    /// Value for `max` when the query does not set one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Value for `md` when the query does not set one, e.g. "dp"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds, unset means no timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_score: bool,

    /// Show the raw tags column (parts of speech, pronunciation, frequency)
    pub show_tags: bool,

    pub color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a timestamped file under the data directory
    pub file: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::Words.to_string(),
            max: None,
            metadata: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_score: true,
            show_tags: false,
            color: true,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject defaults the API would refuse anyway
    pub fn validate(&self) -> Result<()> {
        self.default_endpoint()?;
        if let Some(metadata) = &self.defaults.metadata {
            validate_metadata_flags(metadata).context("Invalid defaults.metadata in config")?;
        }
        Ok(())
    }

    pub fn default_endpoint(&self) -> Result<Endpoint> {
        self.defaults
            .endpoint
            .parse::<Endpoint>()
            .context("Invalid defaults.endpoint in config")
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("datamuse").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Datamuse CLI Configuration File
# Location: ~/.config/datamuse/config.toml (Linux)
#           ~/Library/Application Support/datamuse/config.toml (macOS)
#           %APPDATA%\datamuse\config.toml (Windows)

[defaults]
# Endpoint used when --endpoint is not given: "words" or "sug"
endpoint = "words"

# Maximum number of results when the query does not set max
# max = 20

# Metadata flags requested when the query does not set md
# d = definitions, p = parts of speech, s = syllables, r = pronunciation, f = frequency
# metadata = "dp"

[http]
# Request timeout in seconds (leave commented for no timeout)
# timeout_secs = 10

# user_agent = "datamuse-cli"

[display]
show_score = true

# Show the raw tags column
show_tags = false

# Colored output
color = true

[logging]
# Also write logs to a file under the data directory
file = false
"#
        .to_string()
    }
}
