//! Configuration loading and validation.
//!
//! Loads adcraft configuration from `$ADCRAFT_CONFIG_PATH`, else
//! `./adcraft.toml`, else `adcraft.toml` in the platform config directory.
//! Environment variables override file values; file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::generation::{GeneratorSettings, DEFAULT_IMAGE_PROMPT_TEMPERATURE, DEFAULT_TEXT_MODEL};
use crate::providers::gemini::DEFAULT_GEMINI_URL;
use crate::providers::RetryPolicy;

/// File name looked up in the working and platform config directories.
pub const CONFIG_FILE_NAME: &str = "adcraft.toml";

// ── Top-level config ────────────────────────────────────────────

/// Top-level adcraft configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gemini API settings (`[gemini]`).
    pub gemini: GeminiConfig,
    /// Retry policy (`[retry]`).
    pub retry: RetryConfig,
    /// Generation tuning (`[generation]`).
    pub generation: GenerationConfig,
    /// Logging (`[logging]`).
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the merged configuration fails [`AppConfig::validate`].
    pub fn load() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok(), |p| p.exists());
        let mut config = Self::load_from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from one TOML file only, no env overrides.
    fn load_from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
                    .with_context(|| format!("invalid config at {}", path.display()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "failed to read config file {}: {e}",
                path.display()
            )),
        }
    }

    /// Resolve the config path using custom env and filesystem probes.
    fn config_path_with(
        env: impl Fn(&str) -> Option<String>,
        exists: impl Fn(&Path) -> bool,
    ) -> PathBuf {
        if let Some(p) = env("ADCRAFT_CONFIG_PATH") {
            return PathBuf::from(p);
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if exists(&local) {
            return local;
        }
        directories::ProjectDirs::from("", "", "adcraft")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .filter(|p| exists(p))
            .unwrap_or(local)
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function so tests never touch the process env.
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        // Gemini.
        if let Some(v) = env("GEMINI_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.gemini.api_key = Some(v);
        }
        if let Some(v) = env("ADCRAFT_GEMINI_BASE_URL") {
            self.gemini.base_url = v;
        }
        if let Some(v) = env("ADCRAFT_TEXT_MODEL") {
            self.gemini.text_model = v;
        }
        if let Some(v) = env("ADCRAFT_TIMEOUT_SECS") {
            match v.parse() {
                Ok(n) => self.gemini.timeout_secs = n,
                Err(_) => tracing::warn!(
                    var = "ADCRAFT_TIMEOUT_SECS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }

        // Retry.
        if let Some(v) = env("ADCRAFT_RETRY_MAX_ATTEMPTS") {
            match v.parse() {
                Ok(n) => self.retry.max_attempts = n,
                Err(_) => tracing::warn!(
                    var = "ADCRAFT_RETRY_MAX_ATTEMPTS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }

        // Logging.
        if let Some(v) = env("ADCRAFT_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = env("ADCRAFT_LOG_DIR") {
            self.logging.dir = Some(PathBuf::from(v));
        }
    }

    /// Check values that would only fail later, at request time.
    ///
    /// # Errors
    ///
    /// Returns an error for a base URL that is not http(s), a zero timeout
    /// or zero attempts, or a temperature outside `0.0..=2.0`.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.gemini.base_url)
            .with_context(|| format!("invalid gemini.base_url {:?}", self.gemini.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("gemini.base_url must be http or https, got {}", url.scheme());
        }
        if self.gemini.timeout_secs == 0 {
            anyhow::bail!("gemini.timeout_secs must be greater than zero");
        }
        if self.retry.max_attempts == 0 {
            anyhow::bail!("retry.max_attempts must be at least 1");
        }
        let t = self.generation.image_prompt_temperature;
        if !(0.0..=2.0).contains(&t) {
            anyhow::bail!("generation.image_prompt_temperature must be within 0.0..=2.0, got {t}");
        }
        Ok(())
    }

    /// Parse a TOML string into config.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid config TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }

    /// Generator settings derived from this config.
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            text_model: self.gemini.text_model.clone(),
            retry: self.retry.policy(),
            image_prompt_temperature: self.generation.image_prompt_temperature,
        }
    }
}

// ── Gemini config ───────────────────────────────────────────────

/// Gemini API settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key. Usually supplied through `GEMINI_API_KEY` instead.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Model used for every text call.
    pub text_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_URL.to_owned(),
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "__REDACTED__"))
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// ── Retry config ────────────────────────────────────────────────

/// Retry policy for model calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first.
    pub max_attempts: u32,
    /// First backoff delay in milliseconds.
    pub initial_backoff_ms: u64,
    /// Backoff cap in milliseconds.
    pub max_backoff_ms: u64,
}

impl RetryConfig {
    /// Runtime policy.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            max_backoff: Duration::from_millis(self.max_backoff_ms),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 5_000,
        }
    }
}

// ── Generation config ───────────────────────────────────────────

/// Generation tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Temperature of the image-director call.
    pub image_prompt_temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            image_prompt_temperature: DEFAULT_IMAGE_PROMPT_TEMPERATURE,
        }
    }
}

// ── Logging config ──────────────────────────────────────────────

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily JSON log files; stderr only when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}
