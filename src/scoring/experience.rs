//! Self-reported tenure estimation and the experience sub-scorer

use regex::Regex;

/// Scan lower-cased resume text for "<n> year(s)" statements and return the
/// largest figure claimed. Numbers that overflow are skipped rather than
/// failing; no match means 0.
pub fn estimate_years(text: &str, years_pattern: &Regex) -> u32 {
    years_pattern
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Linear partial credit against the required minimum. No requirement, or
/// meeting it, scores 1.0.
pub fn score_years(estimated: u32, required: u32) -> f64 {
    if required == 0 || estimated >= required {
        return 1.0;
    }
    (estimated as f64 / required as f64).clamp(0.0, 1.0)
}
