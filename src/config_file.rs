use crate::config::EvalConfig;
use crate::error::{Result, SrganError};
use crate::logging::LogConfig;
use crate::normalize::Normalization;
use std::fs;
use std::path::Path;

/// Configuration for the `srgan-eval` binary, loadable from TOML or JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalConfigFile {
    /// Model configuration
    #[serde(default)]
    pub model: ModelSection,

    /// Evaluation limits
    #[serde(default)]
    pub evaluation: EvaluationSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    /// Upscaling factor (default: 4)
    pub factor: usize,

    /// Normalization around the model: "none", "mean", "zero_one" or "minus_one_one" (default: "none")
    pub normalization: String,

    /// Per-channel mean on the 0-255 scale for "mean" normalization (default: DIV2K mean)
    pub rgb_mean: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSection {
    /// Maximum number of pairs to score (optional)
    pub max_images: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// trace, debug, info, warn or error (default: "info")
    pub level: String,

    /// compact, pretty or json (default: "compact")
    pub format: String,

    /// Directory for rolling JSON log files (optional)
    pub log_directory: Option<String>,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            factor: 4,
            normalization: "none".to_string(),
            rgb_mean: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            log_directory: None,
        }
    }
}

impl EvalConfigFile {
    /// Load configuration from a TOML or JSON file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| SrganError::Parse(format!("Failed to parse TOML config: {}", e)))
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        serde_json::from_str(&contents)
            .map_err(|e| SrganError::Parse(format!("Failed to parse JSON config: {}", e)))
    }

    /// Save configuration to a TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SrganError::Serialization(format!("Failed to serialize to TOML: {}", e)))?;

        Ok(fs::write(path, contents)?)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SrganError::Serialization(format!("Failed to serialize to JSON: {}", e)))?;

        Ok(fs::write(path, contents)?)
    }

    /// Convert to a validated EvalConfig
    pub fn to_eval_config(&self) -> Result<EvalConfig> {
        let config = EvalConfig {
            scale: self.model.factor,
            normalization: Normalization::from_label(
                &self.model.normalization.to_lowercase(),
                self.model.rgb_mean,
            )?,
            max_images: self.evaluation.max_images,
        };
        config.validate()?;
        Ok(config)
    }

    /// Convert to LogConfig
    pub fn to_log_config(&self) -> Result<LogConfig> {
        LogConfig::from_labels(
            &self.logging.level.to_lowercase(),
            &self.logging.format.to_lowercase(),
            self.logging.log_directory.clone(),
        )
    }

    /// Create an example configuration file with comments
    pub fn create_example_toml() -> String {
        r#"# srgan-eval configuration file

[model]
# Upscaling factor of the model (1 to 8)
factor = 4

# Normalization applied to inputs and inverted on predictions:
#   "none", "mean", "zero_one" or "minus_one_one"
normalization = "none"

# Per-channel mean (0-255 scale) used by "mean" normalization.
# Defaults to the DIV2K mean when omitted.
# rgb_mean = [114.444, 111.4605, 103.02]

[evaluation]
# Maximum number of (low-res, high-res) pairs to score (optional)
# max_images = 100

[logging]
# trace, debug, info, warn or error
level = "info"

# compact, pretty or json
format = "compact"

# Directory for daily rolling JSON log files (optional)
# log_directory = "./logs"
"#
        .to_string()
    }
}
