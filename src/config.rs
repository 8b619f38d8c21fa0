use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Settings for the `stable-match` binary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Participants per side
    #[serde(default = "default_size")]
    pub size: usize,
    /// Seed for shuffled preferences; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
        }
    }
}

fn default_size() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Case-insensitive; `None` for anything unrecognised
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl LoggingSettings {
    pub fn log_format(&self) -> Option<LogFormat> {
        LogFormat::parse(&self.format)
    }
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STABLE_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STABLE_MATCH__MATCHING__SIZE -> matching.size
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STABLE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.matching.size, 5);
        assert_eq!(settings.matching.seed, None);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("[matching]\nseed = 42\n", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.seed, Some(42));
        assert_eq!(settings.matching.size, 5);
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("xml"), None);
        assert_eq!(LogFormat::parse(""), None);
    }

    #[test]
    fn test_log_format_from_file() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("[logging]\nformat = \"json\"\n", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.logging.log_format(), Some(LogFormat::Json));

        let settings = Settings::default();
        assert_eq!(settings.logging.log_format(), Some(LogFormat::Pretty));
    }

    #[test]
    fn test_empty_source_deserializes() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.matching.size, 5);
    }
}
