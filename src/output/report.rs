//! Report structures wrapping a scoring result with presentation metadata

use crate::config::ScoringWeights;
use crate::scoring::{MatcherKind, ScoringResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scoring result packaged for display and serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Headline numbers and one-line verdict
    pub summary: ScoreSummary,

    /// Full scoring output
    pub result: ScoringResult,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

/// Executive summary of a scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Overall match score (0-100)
    pub total_score: u8,

    /// One-line verdict
    pub verdict: String,

    /// Weights used for aggregation
    pub weights: ScoringWeights,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the scorer used
    pub scorer_version: String,

    /// Resume file scored
    pub resume_file: String,

    /// Job description file scored against
    pub job_file: String,

    /// Title from the job description
    pub job_title: String,

    /// Skill matching strategy in effect
    pub matcher: MatcherKind,
}

impl ScoreReport {
    pub fn new(
        result: ScoringResult,
        weights: ScoringWeights,
        matcher: MatcherKind,
        resume_file: impl Into<String>,
        job_file: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        let summary = ScoreSummary {
            total_score: result.total_score,
            verdict: verdict_for(result.total_score).to_string(),
            weights,
        };

        Self {
            summary,
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.into(),
                job_file: job_file.into(),
                job_title: job_title.into(),
                matcher,
            },
        }
    }
}

fn verdict_for(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent match - strong candidate for this role",
        80..=89 => "Very good match - minor improvements could help",
        70..=79 => "Good match - some targeted improvements recommended",
        60..=69 => "Fair match - several improvements needed",
        50..=59 => "Below average match - significant improvements required",
        _ => "Poor match - major revisions needed",
    }
}
