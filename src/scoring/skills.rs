//! Skill extraction strategies and the skills sub-scorer

use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

/// Strategy interface for finding skill terms in resume text.
///
/// Callers pass the resume text and candidate terms already lower-cased;
/// matchers return the subset of candidates found, verbatim. Implementations
/// hold no mutable state, so one matcher can serve concurrent calls.
pub trait SkillMatcher: Send + Sync {
    fn extract(&self, text: &str, candidates: &[String]) -> HashSet<String>;
    fn kind(&self) -> MatcherKind;
}

/// Selectable matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Literal substring containment. Imprecise ("java" matches inside
    /// "javascript") but kept as the default for compatibility with the
    /// historical scoring behavior.
    Substring,
    /// Word-boundary matching over Unicode word tokens. The recommended
    /// choice when substring false positives matter more than recall on
    /// punctuated terms like "c++".
    Token,
    /// Jaro-Winkler similarity against each text token, tolerating typos.
    Fuzzy,
}

impl Default for MatcherKind {
    fn default() -> Self {
        MatcherKind::Substring
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatcherKind::Substring => "substring",
            MatcherKind::Token => "token",
            MatcherKind::Fuzzy => "fuzzy",
        };
        write!(f, "{}", name)
    }
}

/// Build the matcher for a strategy choice. The fuzzy threshold only affects
/// `MatcherKind::Fuzzy`.
pub fn build_matcher(kind: MatcherKind, fuzzy_threshold: f64) -> Box<dyn SkillMatcher> {
    match kind {
        MatcherKind::Substring => Box::new(SubstringMatcher),
        MatcherKind::Token => Box::new(TokenMatcher),
        MatcherKind::Fuzzy => Box::new(FuzzyMatcher::new(fuzzy_threshold)),
    }
}

/// Default extractor: a candidate matches if it occurs anywhere in the text,
/// word boundaries ignored.
pub struct SubstringMatcher;

impl SkillMatcher for SubstringMatcher {
    fn extract(&self, text: &str, candidates: &[String]) -> HashSet<String> {
        let terms: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        if terms.is_empty() {
            return HashSet::new();
        }

        // One automaton pass instead of a contains() scan per term. The
        // overlapping iterator is required so "java" still reports inside
        // a "javascript" hit.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms);

        match automaton {
            Ok(automaton) => {
                let mut matched = HashSet::new();
                for hit in automaton.find_overlapping_iter(text) {
                    matched.insert(terms[hit.pattern().as_usize()].to_string());
                    if matched.len() == terms.len() {
                        break;
                    }
                }
                matched
            }
            Err(err) => {
                warn!("Skill automaton build failed ({}), scanning per term instead", err);
                terms
                    .iter()
                    .filter(|term| text.contains(*term))
                    .map(|term| term.to_string())
                    .collect()
            }
        }
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Substring
    }
}

/// Word-boundary extractor over Unicode word tokens. Multi-word candidates
/// match as consecutive token runs. Terms that tokenize away their
/// punctuation ("c++" becomes "c") lose precision here; use the substring
/// strategy for such vocabularies.
pub struct TokenMatcher;

impl SkillMatcher for TokenMatcher {
    fn extract(&self, text: &str, candidates: &[String]) -> HashSet<String> {
        let tokens: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();
        let token_set: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();

        let mut matched = HashSet::new();
        for candidate in candidates {
            let needle: Vec<String> = candidate.unicode_words().map(|w| w.to_lowercase()).collect();

            let hit = match needle.len() {
                0 => false,
                1 => token_set.contains(needle[0].as_str()),
                n => tokens
                    .windows(n)
                    .any(|window| window.iter().eq(needle.iter())),
            };

            if hit {
                matched.insert(candidate.clone());
            }
        }

        matched
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Token
    }
}

/// Typo-tolerant extractor: single-word candidates match any token whose
/// Jaro-Winkler similarity clears the threshold. Multi-word candidates fall
/// back to substring containment, and an exact containment hit always counts.
pub struct FuzzyMatcher {
    threshold: f64,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SkillMatcher for FuzzyMatcher {
    fn extract(&self, text: &str, candidates: &[String]) -> HashSet<String> {
        let tokens: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();

        let mut matched = HashSet::new();
        for candidate in candidates {
            if candidate.is_empty() {
                continue;
            }

            if text.contains(candidate.as_str()) {
                matched.insert(candidate.clone());
                continue;
            }

            let is_single_word = !candidate.contains(char::is_whitespace);
            if is_single_word
                && tokens
                    .iter()
                    .any(|token| jaro_winkler(token, candidate) >= self.threshold)
            {
                matched.insert(candidate.clone());
            }
        }

        matched
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Fuzzy
    }
}

/// Skills sub-score with the matched/missing split, both in the order the
/// required skills were declared.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Score required-skill coverage against the extracted candidate set.
/// An empty requirement list scores 1.0.
pub fn score_required_skills(required: &[String], matched_candidates: &HashSet<String>) -> SkillScore {
    if required.is_empty() {
        return SkillScore {
            score: 1.0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        let term = skill.trim().to_lowercase();
        if matched_candidates.contains(&term) {
            matched.push(term);
        } else {
            missing.push(term);
        }
    }

    SkillScore {
        score: matched.len() as f64 / required.len() as f64,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_substring_matches_inside_longer_words() {
        let matcher = SubstringMatcher;
        let matched = matcher.extract(
            "senior javascript engineer",
            &owned(&["java", "javascript", "sql"]),
        );

        assert!(matched.contains("java"));
        assert!(matched.contains("javascript"));
        assert!(!matched.contains("sql"));
    }

    #[test]
    fn test_substring_multi_word_terms() {
        let matcher = SubstringMatcher;
        let matched = matcher.extract(
            "led machine learning projects",
            &owned(&["machine learning", "deep learning"]),
        );

        assert!(matched.contains("machine learning"));
        assert!(!matched.contains("deep learning"));
    }

    #[test]
    fn test_token_matcher_respects_word_boundaries() {
        let matcher = TokenMatcher;
        let matched = matcher.extract(
            "senior javascript engineer with java experience",
            &owned(&["java", "javascript", "sql"]),
        );

        assert!(matched.contains("java"));
        assert!(matched.contains("javascript"));
        assert!(!matched.contains("sql"));

        let only_longer = matcher.extract("senior javascript engineer", &owned(&["java"]));
        assert!(only_longer.is_empty());
    }

    #[test]
    fn test_token_matcher_multi_word_runs() {
        let matcher = TokenMatcher;
        let matched = matcher.extract(
            "built machine learning pipelines",
            &owned(&["machine learning", "learning pipelines", "machine pipelines"]),
        );

        assert!(matched.contains("machine learning"));
        assert!(matched.contains("learning pipelines"));
        assert!(!matched.contains("machine pipelines"));
    }

    #[test]
    fn test_fuzzy_matcher_tolerates_typos() {
        let matcher = FuzzyMatcher::new(0.85);
        let matched = matcher.extract("expert in pythn and sql", &owned(&["python", "sql", "java"]));

        assert!(matched.contains("python"));
        assert!(matched.contains("sql"));
        assert!(!matched.contains("java"));
    }

    #[test]
    fn test_fuzzy_threshold_is_clamped() {
        assert_eq!(FuzzyMatcher::new(2.0).threshold(), 1.0);
        assert_eq!(FuzzyMatcher::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_score_required_skills_ratio_and_order() {
        let matched: HashSet<String> = ["java".to_string(), "sql".to_string()].into_iter().collect();
        let result = score_required_skills(&owned(&["java", "python", "sql"]), &matched);

        assert!((result.score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.matched, vec!["java", "sql"]);
        assert_eq!(result.missing, vec!["python"]);
    }

    #[test]
    fn test_empty_requirements_score_full() {
        let result = score_required_skills(&[], &HashSet::new());
        assert_eq!(result.score, 1.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_build_matcher_kinds() {
        assert_eq!(build_matcher(MatcherKind::Substring, 0.85).kind(), MatcherKind::Substring);
        assert_eq!(build_matcher(MatcherKind::Token, 0.85).kind(), MatcherKind::Token);
        assert_eq!(build_matcher(MatcherKind::Fuzzy, 0.85).kind(), MatcherKind::Fuzzy);
    }
}
