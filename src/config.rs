//! Configuration management for the ATS scorer

use crate::error::{AtsProError, Result};
use crate::job::EducationLevel;
use crate::scoring::skills::MatcherKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub weights: ScoringWeights,
    pub rules: ScoringRules,
    pub output: OutputConfig,
}

/// Relative importance of the four sub-scores. Must sum to 1.0 within 1e-6;
/// each weight must be finite and non-negative. Zero weights are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub formatting: f64,
}

/// Vocabularies and thresholds injected into the scorer at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Section headers every resume is expected to carry.
    pub required_headers: Vec<String>,

    /// Degree keyword vocabulary mapped to credential levels.
    pub degree_keywords: Vec<DegreeKeyword>,

    /// Pattern for self-reported tenure; capture group 1 must be the number.
    pub years_pattern: String,

    /// Marker tokens that suggest table or image artifacts in extracted text.
    pub table_markers: Vec<String>,

    /// Length of a consecutive non-alphanumeric, non-whitespace run that
    /// also counts as a table/image artifact.
    pub symbol_run_threshold: usize,

    /// Score deducted per formatting flag, floored at 0.0 overall.
    pub flag_penalty: f64,

    /// Skill matching strategy.
    pub matcher: MatcherKind,

    /// Similarity threshold for the fuzzy matcher, in [0, 1].
    pub fuzzy_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeKeyword {
    pub keyword: String,
    pub level: EducationLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.30,
            education: 0.15,
            formatting: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn new(skills: f64, experience: f64, education: f64, formatting: f64) -> Result<Self> {
        let weights = Self {
            skills,
            experience,
            education,
            formatting,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.formatting
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("formatting", self.formatting),
        ];

        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(AtsProError::InvalidConfiguration(format!(
                    "weight '{}' must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(AtsProError::InvalidConfiguration(format!(
                "weights must sum to 1.0, got {:.6}",
                sum
            )));
        }

        Ok(())
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        let degree = |keyword: &str, level: EducationLevel| DegreeKeyword {
            keyword: keyword.to_string(),
            level,
        };

        Self {
            required_headers: vec![
                "experience".to_string(),
                "work experience".to_string(),
                "education".to_string(),
                "skills".to_string(),
                "contact".to_string(),
                "summary".to_string(),
            ],
            degree_keywords: vec![
                degree("bachelor", EducationLevel::Bachelor),
                degree("bsc", EducationLevel::Bachelor),
                degree("ba", EducationLevel::Bachelor),
                degree("master", EducationLevel::Master),
                degree("msc", EducationLevel::Master),
                degree("mba", EducationLevel::Master),
                degree("phd", EducationLevel::Phd),
                degree("diploma", EducationLevel::Diploma),
            ],
            years_pattern: r"(\d+)\s+years?".to_string(),
            table_markers: vec![
                "<table".to_string(),
                "<img".to_string(),
                "[table]".to_string(),
                "[image]".to_string(),
                "|---".to_string(),
                "+--".to_string(),
            ],
            symbol_run_threshold: 10,
            flag_penalty: 0.15,
            matcher: MatcherKind::Substring,
            fuzzy_threshold: 0.85,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            rules: ScoringRules::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit path, or from the default location
    /// (writing the defaults there on first run).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => {
                let content = std::fs::read_to_string(explicit)?;
                let config: Config = toml::from_str(&content).map_err(|e| {
                    AtsProError::Configuration(format!("Failed to parse config: {}", e))
                })?;
                config.weights.validate()?;
                Ok(config)
            }
            None => {
                let config_path = Self::config_path();

                if config_path.exists() {
                    let content = std::fs::read_to_string(&config_path)?;
                    let config: Config = toml::from_str(&content).map_err(|e| {
                        AtsProError::Configuration(format!("Failed to parse config: {}", e))
                    })?;
                    config.weights.validate()?;
                    Ok(config)
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsProError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-pro-scorer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let weights = ScoringWeights::default();
        assert!(weights.validate().is_ok());
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let result = ScoringWeights::new(0.5, 0.5, 0.1, 0.1);
        assert!(matches!(result, Err(AtsProError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_weights_reject_negative_and_non_finite() {
        assert!(ScoringWeights::new(-0.1, 0.5, 0.3, 0.3).is_err());
        assert!(ScoringWeights::new(f64::NAN, 0.4, 0.3, 0.3).is_err());
        assert!(ScoringWeights::new(f64::INFINITY, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_zero_weights_are_allowed() {
        let weights = ScoringWeights::new(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(weights.skills, 1.0);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();

        assert_eq!(parsed.weights, config.weights);
        assert_eq!(parsed.rules.required_headers, config.rules.required_headers);
        assert_eq!(parsed.rules.matcher, MatcherKind::Substring);
        assert_eq!(parsed.rules.symbol_run_threshold, 10);
    }
}
