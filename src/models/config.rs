//! Configuration models for quizmaker.
//!
//! Everything tunable lives here and is read from a TOML file. Every
//! section and field has a default, so an empty file is a valid config.

use crate::catalog::CriteriaCatalog;
use crate::models::{Difficulty, GenerationSettings, OutputFormat, QuestionCount, QuestionType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration for quizmaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation service endpoint
    #[serde(default)]
    pub service: ServiceConfig,

    /// Simulated progress while a request is outstanding
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Initial form values
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Submission behaviour
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Generation service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL; `${VAR}` placeholders are expanded from the environment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the JSON generation endpoint
    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    /// Path of the CSV export endpoint
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_generate_path() -> String {
    "/generate".to_string()
}

fn default_csv_path() -> String {
    "/generate/csv".to_string()
}

fn default_timeout() -> u64 {
    180
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            csv_path: default_csv_path(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ServiceConfig {
    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        join_url(&expand_env_vars(&self.base_url), &self.generate_path)
    }

    /// Full URL of the CSV export endpoint.
    pub fn csv_url(&self) -> String {
        join_url(&expand_env_vars(&self.base_url), &self.csv_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Progress simulation settings.
///
/// Progress is a percentage; it climbs by `step` every `tick_ms` while the
/// request is pending and never passes `cap` until the response arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default = "default_step")]
    pub step: u8,

    #[serde(default = "default_cap")]
    pub cap: u8,

    #[serde(default = "default_complete")]
    pub complete: u8,

    /// How long a finished request keeps its final progress before idling
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

fn default_tick_ms() -> u64 {
    500
}

fn default_step() -> u8 {
    10
}

fn default_cap() -> u8 {
    90
}

fn default_complete() -> u8 {
    100
}

fn default_reset_delay_ms() -> u64 {
    1500
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step: default_step(),
            cap: default_cap(),
            complete: default_complete(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

/// Initial values of the generation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Domain selected when a session starts
    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default)]
    pub question_type: QuestionType,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub num_questions: QuestionCount,

    #[serde(default = "default_true")]
    pub include_explanation: bool,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_domain() -> String {
    "IT".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            question_type: QuestionType::default(),
            difficulty: Difficulty::default(),
            num_questions: QuestionCount::default(),
            include_explanation: true,
            output_format: OutputFormat::default(),
        }
    }
}

impl DefaultsConfig {
    /// Generation parameters pre-filled from the defaults. The criteria path
    /// is left empty; it comes from the selection controller.
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            question_type: self.question_type,
            num_questions: self.num_questions,
            difficulty: self.difficulty,
            include_explanation: self.include_explanation,
            output_format: self.output_format,
            ..GenerationSettings::default()
        }
    }
}

/// Submission behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Drop completions of requests that are no longer the latest submission.
    /// Off by default: concurrent submissions all land, last one wins.
    #[serde(default)]
    pub dedupe_stale: bool,

    /// Where the CSV export is written
    #[serde(default = "default_csv_output")]
    pub csv_output: PathBuf,
}

fn default_csv_output() -> PathBuf {
    PathBuf::from("questions.csv")
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            dedupe_stale: false,
            csv_output: default_csv_output(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_owned(),
                source,
            },
            other => other,
        })
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.progress;
        if p.tick_ms == 0 {
            return Err(ConfigError::Invalid("progress.tick_ms must be positive".into()));
        }
        if p.step == 0 {
            return Err(ConfigError::Invalid("progress.step must be positive".into()));
        }
        if p.cap >= p.complete {
            return Err(ConfigError::Invalid(format!(
                "progress.cap ({}) must be below progress.complete ({})",
                p.cap, p.complete
            )));
        }
        if p.complete > 100 {
            return Err(ConfigError::Invalid(format!(
                "progress.complete ({}) is a percentage and cannot exceed 100",
                p.complete
            )));
        }
        if self.service.timeout_secs == 0 {
            return Err(ConfigError::Invalid("service.timeout_secs must be positive".into()));
        }

        let catalog = CriteriaCatalog::builtin();
        if !catalog.contains_domain(&self.defaults.domain) {
            return Err(ConfigError::UnknownDomain {
                domain: self.defaults.domain.clone(),
                known: catalog.domains().join(", "),
            });
        }
        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports ${VAR_NAME} syntax.
/// If the variable is not set, the placeholder is left unchanged.
pub fn expand_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(s) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown default domain '{domain}' (known: {known})")]
    UnknownDomain { domain: String, known: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.service.generate_url(), "http://localhost:5000/generate");
        assert_eq!(config.progress.tick_ms, 500);
        assert_eq!(config.progress.step, 10);
        assert_eq!(config.progress.cap, 90);
        assert_eq!(config.progress.reset_delay_ms, 1500);
        assert_eq!(config.defaults.domain, "IT");
        assert!(config.defaults.include_explanation);
        assert!(!config.submission.dedupe_stale);
    }

    #[test]
    fn test_parses_labels_and_urls() {
        let config = Config::from_toml(
            r#"
[service]
base_url = "http://quiz.internal:8080/"
csv_path = "export"

[defaults]
domain = "법률"
question_type = "사례/시나리오"
difficulty = "상"
num_questions = 7
output_format = "CSV"

[submission]
dedupe_stale = true
"#,
        )
        .unwrap();

        assert_eq!(config.service.csv_url(), "http://quiz.internal:8080/export");
        assert_eq!(config.defaults.question_type, QuestionType::Scenario);
        assert_eq!(config.defaults.num_questions.get(), 7);

        let settings = config.defaults.settings();
        assert_eq!(settings.difficulty, Difficulty::High);
        assert_eq!(settings.output_format, OutputFormat::Csv);
        assert!(settings.main_criteria.is_empty());
        assert!(config.submission.dedupe_stale);
    }

    #[test]
    fn test_rejects_cap_at_or_above_complete() {
        let err = Config::from_toml("[progress]\ncap = 100\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_default_domain() {
        let err = Config::from_toml("[defaults]\ndomain = \"역사\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDomain { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_count() {
        let err = Config::from_toml("[defaults]\nnum_questions = 11\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_base_url_env_expansion() {
        // SAFETY: test-local variable name not read by any other test
        unsafe { std::env::set_var("QUIZMAKER_TEST_HOST", "10.0.0.7") };
        let service = ServiceConfig {
            base_url: "http://${QUIZMAKER_TEST_HOST}:5000".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(service.generate_url(), "http://10.0.0.7:5000/generate");
        assert_eq!(expand_env_vars("${QUIZMAKER_UNSET_VAR}"), "${QUIZMAKER_UNSET_VAR}");
    }

    #[test]
    fn test_from_file_and_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[progress]\nstep = 5\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.progress.step, 5);

        let missing = temp_dir.path().join("absent.toml");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::FileRead { .. })
        ));
        let fallback = Config::load_or_default(&missing).unwrap();
        assert_eq!(fallback.progress.step, 10);
    }

    #[test]
    fn test_parse_error_carries_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[service\n").unwrap();

        match Config::from_file(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
