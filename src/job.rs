//! Job description model consumed by the scoring engine

use crate::error::{AtsProError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Credential level on an ordinal scale. Variant order matters: comparisons
/// and `rank()` both treat later variants as more advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Diploma,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    /// Ordinal rank used for partial-credit scoring. "No credential" is
    /// modelled as `None` upstream and ranks 0.
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Diploma => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::Phd => 4,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EducationLevel::Diploma => "diploma",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Phd => "phd",
        };
        write!(f, "{}", name)
    }
}

/// Structured job requirements, supplied already parsed. The engine never
/// parses free-form job ads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,

    /// Skills the role requires, in the order the posting lists them.
    pub required_skills: Vec<String>,

    /// Synonyms and variants that should also count as evidence during
    /// extraction (e.g. "postgresql" alongside a required "sql").
    #[serde(default)]
    pub skill_aliases: Vec<String>,

    #[serde(default)]
    pub min_experience_years: u32,

    #[serde(default)]
    pub required_education_level: Option<EducationLevel>,
}

impl JobDescription {
    pub fn new(title: impl Into<String>, required_skills: Vec<String>) -> Self {
        Self {
            title: title.into(),
            required_skills,
            skill_aliases: Vec::new(),
            min_experience_years: 0,
            required_education_level: None,
        }
    }

    /// All terms the skill extractor should look for: required skills plus
    /// aliases, lower-cased, de-duplicated, declaration order preserved.
    pub fn all_skill_candidates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for skill in self.required_skills.iter().chain(self.skill_aliases.iter()) {
            let term = skill.trim().to_lowercase();
            if !term.is_empty() && seen.insert(term.clone()) {
                candidates.push(term);
            }
        }

        candidates
    }

    /// Load a job description from a TOML or JSON file, decided by extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                AtsProError::InvalidInput(format!("Failed to parse job description: {}", e))
            }),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(AtsProError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_level_ordering() {
        assert!(EducationLevel::Diploma < EducationLevel::Bachelor);
        assert!(EducationLevel::Bachelor < EducationLevel::Master);
        assert!(EducationLevel::Master < EducationLevel::Phd);
        assert_eq!(EducationLevel::Phd.rank(), 4);
        assert_eq!(EducationLevel::Diploma.rank(), 1);
    }

    #[test]
    fn test_education_level_serde_names() {
        let level: EducationLevel = serde_json::from_str("\"bachelor\"").unwrap();
        assert_eq!(level, EducationLevel::Bachelor);
        assert_eq!(serde_json::to_string(&EducationLevel::Phd).unwrap(), "\"phd\"");
    }

    #[test]
    fn test_skill_candidates_fold_case_and_dedup() {
        let mut job = JobDescription::new("Backend Engineer", vec!["Java".to_string(), "SQL".to_string()]);
        job.skill_aliases = vec!["  java ".to_string(), "PostgreSQL".to_string(), String::new()];

        let candidates = job.all_skill_candidates();
        assert_eq!(candidates, vec!["java", "sql", "postgresql"]);
    }

    #[test]
    fn test_job_from_toml_str() {
        let raw = r#"
            title = "Data Engineer"
            required_skills = ["python", "sql"]
            min_experience_years = 4
            required_education_level = "master"
        "#;

        let job: JobDescription = toml::from_str(raw).unwrap();
        assert_eq!(job.title, "Data Engineer");
        assert_eq!(job.min_experience_years, 4);
        assert_eq!(job.required_education_level, Some(EducationLevel::Master));
        assert!(job.skill_aliases.is_empty());
    }
}
