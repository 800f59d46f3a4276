//! Output formatters - console, JSON, and Markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScoreReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 ATS SCORE REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Position: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.job_title
        ));

        // Executive Summary
        output.push_str(&self.format_header("Executive Summary", 2));
        let score_badge = self.format_score_badge(report.summary.total_score);
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.summary.total_score, score_badge
        ));
        output.push_str(&format!(
            "Verdict: {}\n\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));

        // Score Breakdown
        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "🎯 Skills: {}% (weight: {:.1}%)\n",
            report.result.skills_score,
            report.summary.weights.skills * 100.0
        ));
        output.push_str(&format!(
            "💼 Experience: {}% (weight: {:.1}%)\n",
            report.result.experience_score,
            report.summary.weights.experience * 100.0
        ));
        output.push_str(&format!(
            "🎓 Education: {}% (weight: {:.1}%)\n",
            report.result.education_score,
            report.summary.weights.education * 100.0
        ));
        output.push_str(&format!(
            "📝 Formatting: {}% (weight: {:.1}%)\n",
            report.result.formatting_score,
            report.summary.weights.formatting * 100.0
        ));
        output.push('\n');

        // Missing Skills
        if !report.result.missing_skills.is_empty() {
            output.push_str(&self.format_header("❌ Missing Skills", 3));
            for skill in &report.result.missing_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
            }
            output.push('\n');
        }

        if self.detailed {
            // Matched Skills (only in detailed mode)
            if !report.result.matched_skills.is_empty() {
                output.push_str(&self.format_header("✅ Matched Skills", 3));
                for skill in &report.result.matched_skills {
                    output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
                }
                output.push('\n');
            }

            // Formatting Flags
            if !report.result.flags.is_empty() {
                output.push_str(&self.format_header("⚠️ Formatting Flags", 3));
                for flag in &report.result.flags {
                    output.push_str(&format!("  • {}\n", self.colorize(flag, Color::Yellow)));
                }
                output.push('\n');
            }
        }

        // Recommendations
        if !report.result.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Recommendations", 2));
            for (i, recommendation) in report.result.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, recommendation));
            }
            output.push('\n');
        }

        // Footer
        output.push_str(&format!(
            "\n{} Generated by ATS Pro Scorer v{} | Matcher: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.scorer_version,
            report.metadata.matcher
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        // Title
        output.push_str("# 📊 ATS Score Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Position:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.job_title
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                Path::new(&report.metadata.resume_file)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy(),
                Path::new(&report.metadata.job_file)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ));
        }

        // Executive Summary
        output.push_str("## Executive Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            report.summary.total_score,
            Self::markdown_score_badge(report.summary.total_score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        // Score Breakdown
        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        output.push_str(&format!(
            "| 🎯 Skills | {}% | {:.1}% |\n",
            report.result.skills_score,
            report.summary.weights.skills * 100.0
        ));
        output.push_str(&format!(
            "| 💼 Experience | {}% | {:.1}% |\n",
            report.result.experience_score,
            report.summary.weights.experience * 100.0
        ));
        output.push_str(&format!(
            "| 🎓 Education | {}% | {:.1}% |\n",
            report.result.education_score,
            report.summary.weights.education * 100.0
        ));
        output.push_str(&format!(
            "| 📝 Formatting | {}% | {:.1}% |\n",
            report.result.formatting_score,
            report.summary.weights.formatting * 100.0
        ));
        output.push('\n');

        // Matched Skills
        if !report.result.matched_skills.is_empty() {
            output.push_str("### ✅ Matched Skills\n\n");
            for skill in &report.result.matched_skills {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        // Missing Skills
        if !report.result.missing_skills.is_empty() {
            output.push_str("### ❌ Missing Skills\n\n");
            for skill in &report.result.missing_skills {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        // Formatting Flags
        if !report.result.flags.is_empty() {
            output.push_str("### ⚠️ Formatting Flags\n\n");
            for flag in &report.result.flags {
                output.push_str(&format!("- {}\n", flag));
            }
            output.push('\n');
        }

        // Recommendations
        if !report.result.recommendations.is_empty() {
            output.push_str("## 📋 Recommendations\n\n");
            for (i, recommendation) in report.result.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, recommendation));
            }
            output.push('\n');
        }

        // Footer
        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by ATS Pro Scorer v{} using the {} matcher*\n",
                report.metadata.scorer_version, report.metadata.matcher
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ScoreReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_score{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_score{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_score{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringWeights;
    use crate::scoring::{MatcherKind, ScoringResult};

    fn sample_report() -> ScoreReport {
        let result = ScoringResult {
            total_score: 73,
            skills_score: 50,
            experience_score: 100,
            education_score: 100,
            formatting_score: 70,
            matched_skills: vec!["java".to_string()],
            missing_skills: vec!["sql".to_string()],
            flags: vec!["missing header: contact".to_string()],
            recommendations: vec!["Add or highlight skill: sql".to_string()],
        };

        ScoreReport::new(
            result,
            ScoringWeights::default(),
            MatcherKind::Substring,
            "resume.txt",
            "job.toml",
            "Backend Engineer",
        )
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Overall Score: 73% [GOOD]"));
        assert!(output.contains("Good match - some targeted improvements recommended"));
        assert!(output.contains("🎯 Skills: 50% (weight: 40.0%)"));
        assert!(output.contains("missing header: contact"));
        assert!(output.contains("1. Add or highlight skill: sql"));
        // No ANSI escapes when colors are disabled
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_summary_hides_details() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("❌ Missing Skills"));
        assert!(!output.contains("✅ Matched Skills"));
        assert!(!output.contains("⚠️ Formatting Flags"));
    }

    #[test]
    fn test_json_round_trips() {
        let formatter = JsonFormatter::new(false);
        let json = formatter.format_report(&sample_report()).unwrap();
        let parsed: ScoreReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.summary.total_score, 73);
        assert_eq!(parsed.result.missing_skills, vec!["sql".to_string()]);
        assert_eq!(parsed.metadata.matcher, MatcherKind::Substring);
    }

    #[test]
    fn test_markdown_contains_breakdown_table() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("| Component | Score | Weight |"));
        assert!(output.contains("| 🎯 Skills | 50% | 40.0% |"));
        assert!(output.contains("**Resume:** `resume.txt` | **Job:** `job.toml`"));
        assert!(output.contains("🟠 Good"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = sample_report();

        let console = generator
            .generate_report(&report, &OutputFormat::Console)
            .unwrap();
        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        let markdown = generator
            .generate_report(&report, &OutputFormat::Markdown)
            .unwrap();

        assert!(console.contains("Overall Score"));
        assert!(json.trim_start().starts_with('{'));
        assert!(markdown.starts_with("# 📊 ATS Score Report"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }

    #[test]
    fn test_suggested_filenames() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "resume.txt", false),
            "resume_score.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Console, "cv.md", false),
            "cv_score.txt"
        );

        let stamped = suggest_filename(&OutputFormat::Markdown, "resume.txt", true);
        assert!(stamped.starts_with("resume_score_"));
        assert!(stamped.ends_with(".md"));
    }
}
