//! CLI interface for the ATS scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-pro-scorer")]
#[command(about = "ATS simulation tool that scores resumes against job descriptions")]
#[command(
    long_about = "Score resume compatibility the way applicant tracking systems do: skill matching, experience and education checks, and formatting analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TOML, JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Skill matching strategy: substring, token, fuzzy
        #[arg(short, long)]
        matcher: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file or directory
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate matcher strategy
pub fn parse_matcher_kind(matcher: &str) -> Result<crate::scoring::MatcherKind, String> {
    match matcher.to_lowercase().as_str() {
        "substring" => Ok(crate::scoring::MatcherKind::Substring),
        "token" => Ok(crate::scoring::MatcherKind::Token),
        "fuzzy" => Ok(crate::scoring::MatcherKind::Fuzzy),
        _ => Err(format!(
            "Invalid matcher: {}. Supported: substring, token, fuzzy",
            matcher
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::scoring::MatcherKind;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_parse_matcher_kind() {
        assert_eq!(parse_matcher_kind("substring"), Ok(MatcherKind::Substring));
        assert_eq!(parse_matcher_kind("Fuzzy"), Ok(MatcherKind::Fuzzy));
        assert!(parse_matcher_kind("semantic").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("resume.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.PDF"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &["txt", "md"]).is_err());
    }
}
