//! Scoring engine: skill extraction, sub-scores, weighted aggregation,
//! and recommendation generation

pub mod education;
pub mod experience;
pub mod formatting;
pub mod recommendations;
pub mod skills;

pub use formatting::FormattingAnalysis;
pub use skills::{MatcherKind, SkillMatcher};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ScoringRules, ScoringWeights};
use crate::error::{AtsProError, Result};
use crate::job::JobDescription;
use education::{score_education, DegreeClassifier};
use experience::{estimate_years, score_years};
use formatting::FormattingAnalyzer;
use recommendations::build_recommendations;
use skills::{build_matcher, score_required_skills};

/// Complete outcome of one scoring pass. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Weighted aggregate as an integer percentage
    pub total_score: u8,
    pub skills_score: u8,
    pub experience_score: u8,
    pub education_score: u8,
    pub formatting_score: u8,
    /// Required skills found in the resume
    pub matched_skills: Vec<String>,
    /// Required skills not found, in the job's declaration order
    pub missing_skills: Vec<String>,
    /// Formatting issues detected in the resume
    pub flags: Vec<String>,
    /// Actionable suggestions, ordered skills -> experience -> formatting
    pub recommendations: Vec<String>,
}

/// Scores resume text against a job description.
///
/// All validation happens at construction. A built scorer holds no mutable
/// state, so one instance can serve any number of `score` calls, including
/// concurrently.
pub struct AtsProScorer {
    weights: ScoringWeights,
    matcher: Box<dyn SkillMatcher>,
    years_pattern: Regex,
    degrees: DegreeClassifier,
    formatting: FormattingAnalyzer,
}

impl AtsProScorer {
    /// Create a scorer with default weights and rules
    pub fn new() -> Result<Self> {
        Self::from_parts(ScoringWeights::default(), &ScoringRules::default())
    }

    /// Create a scorer with custom weights and default rules
    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        Self::from_parts(weights, &ScoringRules::default())
    }

    /// Create a scorer from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_parts(config.weights, &config.rules)
    }

    pub fn from_parts(weights: ScoringWeights, rules: &ScoringRules) -> Result<Self> {
        weights.validate()?;

        let years_pattern = Regex::new(&rules.years_pattern).map_err(|e| {
            AtsProError::InvalidConfiguration(format!(
                "bad years pattern '{}': {}",
                rules.years_pattern, e
            ))
        })?;

        Ok(Self {
            weights,
            matcher: build_matcher(rules.matcher, rules.fuzzy_threshold),
            years_pattern,
            degrees: DegreeClassifier::new(&rules.degree_keywords)?,
            formatting: FormattingAnalyzer::new(rules)?,
        })
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn matcher_kind(&self) -> MatcherKind {
        self.matcher.kind()
    }

    /// Score resume text against a job description.
    ///
    /// Absent text is treated as empty, not as an error. Every sub-score is
    /// in [0, 1] before conversion, so the result percentages are always in
    /// [0, 100].
    pub fn score(&self, cv_text: Option<&str>, job: &JobDescription) -> ScoringResult {
        let raw = cv_text.unwrap_or("");
        let normalized = raw.to_lowercase();

        let candidates = job.all_skill_candidates();
        let matched_candidates = self.matcher.extract(&normalized, &candidates);
        let skill = score_required_skills(&job.required_skills, &matched_candidates);

        let estimated_years = estimate_years(&normalized, &self.years_pattern);
        let experience_score = score_years(estimated_years, job.min_experience_years);

        let found_level = self.degrees.classify(&normalized);
        let education_score = score_education(found_level, job.required_education_level);

        let formatting = self.formatting.analyze(raw);

        let total = self.weights.skills * skill.score
            + self.weights.experience * experience_score
            + self.weights.education * education_score
            + self.weights.formatting * formatting.formatting_score;

        debug!(
            "scored '{}': skills {:.3}, experience {:.3} ({} of {} years), education {:.3}, formatting {:.3}, total {:.3}",
            job.title,
            skill.score,
            experience_score,
            estimated_years,
            job.min_experience_years,
            education_score,
            formatting.formatting_score,
            total
        );

        let recommendations = build_recommendations(
            &skill.missing,
            estimated_years,
            job.min_experience_years,
            &formatting.flags,
        );

        ScoringResult {
            total_score: to_percent(total),
            skills_score: to_percent(skill.score),
            experience_score: to_percent(experience_score),
            education_score: to_percent(education_score),
            formatting_score: to_percent(formatting.formatting_score),
            matched_skills: skill.matched,
            missing_skills: skill.missing,
            flags: formatting.flags,
            recommendations,
        }
    }
}

/// Convert a [0, 1] score to a rounded integer percentage
fn to_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
