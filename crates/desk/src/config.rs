use domain::models::UserRole;
use domain::services::TransitionPolicy;
use serde::Deserialize;

/// Built-in defaults; every key has a value here so the desk starts without
/// any file on disk.
const DEFAULTS: &str = include_str!("../../../config/default.toml");

const ENV_PREFIX: &str = "DESK";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Load the demo fixture into a fresh session.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Who is looking at the desk.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub role: UserRole,

    /// Required for manager sessions.
    #[serde(default)]
    pub society: String,

    /// Required for resident sessions.
    #[serde(default)]
    pub resident_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationConfig {
    /// Resolves a requested page size against the configured bounds.
    /// A zero maximum is treated as 1.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_true() -> bool {
    true
}
fn default_page_size() -> usize {
    20
}
fn default_max_page_size() -> usize {
    100
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. built-in defaults (a copy of config/default.toml)
    /// 2. config/default.toml (optional)
    /// 3. config/local.toml - local overrides (optional, not in git)
    /// 4. Environment variables with DESK__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from the built-in defaults and the given
    /// environment-style variables (`DESK__SECTION__KEY`), ignoring files and
    /// the process environment.
    pub fn load_from_env_map(vars: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(Some(source)),
            )
            .build()?;

        Self::finish(config)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Keys use dotted paths (`session.role`). Validation is skipped so tests
    /// can inspect partial configs.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn finish(config: config::Config) -> Result<Self, config::ConfigError> {
        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.pagination.default_page_size == 0 || self.pagination.max_page_size == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Page sizes must be at least 1".to_string(),
            ));
        }

        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(ConfigValidationError::InvalidValue(
                "default_page_size cannot exceed max_page_size".to_string(),
            ));
        }

        match self.session.role {
            UserRole::Manager if self.session.society.trim().is_empty() => {
                Err(ConfigValidationError::MissingRequired(
                    "session.society must be set for manager sessions".to_string(),
                ))
            }
            UserRole::Resident if self.session.resident_name.trim().is_empty() => {
                Err(ConfigValidationError::MissingRequired(
                    "session.resident_name must be set for resident sessions".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}
