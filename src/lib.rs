//! ATS Pro Scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod output;
pub mod scoring;

pub use config::{Config, ScoringRules, ScoringWeights};
pub use error::{AtsProError, Result};
pub use job::{EducationLevel, JobDescription};
pub use scoring::{AtsProScorer, ScoringResult};
