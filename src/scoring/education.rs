//! Degree classification and the education sub-scorer

use crate::config::DegreeKeyword;
use crate::error::{AtsProError, Result};
use crate::job::EducationLevel;
use regex::Regex;

/// Detects degree keywords in lower-cased resume text. Each keyword is
/// matched on word boundaries so "ba" never fires inside "database".
pub struct DegreeClassifier {
    patterns: Vec<(Regex, EducationLevel)>,
}

impl DegreeClassifier {
    pub fn new(keywords: &[DegreeKeyword]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(keywords.len());

        for entry in keywords {
            let keyword = entry.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                continue;
            }

            let pattern = format!(r"\b{}\b", regex::escape(&keyword));
            let regex = Regex::new(&pattern).map_err(|e| {
                AtsProError::InvalidConfiguration(format!(
                    "bad degree keyword '{}': {}",
                    entry.keyword, e
                ))
            })?;
            patterns.push((regex, entry.level));
        }

        Ok(Self { patterns })
    }

    /// Highest credential level claimed in the text, if any keyword matches.
    pub fn classify(&self, text: &str) -> Option<EducationLevel> {
        self.patterns
            .iter()
            .filter(|(regex, _)| regex.is_match(text))
            .map(|(_, level)| *level)
            .max()
    }
}

/// Ordinal comparison with proportional partial credit. An unspecified
/// requirement is satisfied by anything; a candidate with no detected
/// credential scores 0 against any requirement.
pub fn score_education(found: Option<EducationLevel>, required: Option<EducationLevel>) -> f64 {
    match (found, required) {
        (_, None) => 1.0,
        (None, Some(_)) => 0.0,
        (Some(found), Some(required)) if found >= required => 1.0,
        (Some(found), Some(required)) => {
            (found.rank() as f64 / required.rank() as f64).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringRules;

    fn classifier() -> DegreeClassifier {
        DegreeClassifier::new(&ScoringRules::default().degree_keywords).unwrap()
    }

    #[test]
    fn test_classify_picks_highest_level() {
        let detector = classifier();
        let text = "bachelor of science, later completed a phd in systems";
        assert_eq!(detector.classify(text), Some(EducationLevel::Phd));
    }

    #[test]
    fn test_classify_respects_word_boundaries() {
        let detector = classifier();
        assert_eq!(detector.classify("database administrator"), None);
        assert_eq!(detector.classify("ba in economics"), Some(EducationLevel::Bachelor));
        assert_eq!(detector.classify("mba graduate"), Some(EducationLevel::Master));
    }

    #[test]
    fn test_classify_nothing_found() {
        let detector = classifier();
        assert_eq!(detector.classify("self-taught engineer"), None);
        assert_eq!(detector.classify(""), None);
    }

    #[test]
    fn test_score_partial_credit_by_rank() {
        let score = score_education(Some(EducationLevel::Bachelor), Some(EducationLevel::Master));
        assert!((score - 2.0 / 3.0).abs() < 1e-9);

        let diploma_vs_phd = score_education(Some(EducationLevel::Diploma), Some(EducationLevel::Phd));
        assert_eq!(diploma_vs_phd, 0.25);
    }

    #[test]
    fn test_score_requirement_met_or_absent() {
        assert_eq!(score_education(Some(EducationLevel::Phd), Some(EducationLevel::Bachelor)), 1.0);
        assert_eq!(score_education(Some(EducationLevel::Master), Some(EducationLevel::Master)), 1.0);
        assert_eq!(score_education(None, None), 1.0);
        assert_eq!(score_education(Some(EducationLevel::Diploma), None), 1.0);
    }

    #[test]
    fn test_score_no_credential_against_requirement() {
        assert_eq!(score_education(None, Some(EducationLevel::Diploma)), 0.0);
    }
}
