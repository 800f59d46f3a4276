//! ATS-friendliness checks on the raw resume text

use crate::config::ScoringRules;
use crate::error::{AtsProError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Outcome of the formatting pass: a normalized score plus one flag per
/// detected issue, in check order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingAnalysis {
    pub formatting_score: f64,
    pub flags: Vec<String>,
}

/// Detects missing section headers and probable table/image artifacts.
/// Works on the raw text; header comparison is case-insensitive internally.
pub struct FormattingAnalyzer {
    headers: Vec<String>,
    marker_scan: AhoCorasick,
    symbol_run_threshold: usize,
    flag_penalty: f64,
}

impl FormattingAnalyzer {
    pub fn new(rules: &ScoringRules) -> Result<Self> {
        if !(0.0..=1.0).contains(&rules.flag_penalty) {
            return Err(AtsProError::InvalidConfiguration(format!(
                "flag penalty must be in [0, 1], got {}",
                rules.flag_penalty
            )));
        }

        let headers = rules
            .required_headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        let marker_scan = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&rules.table_markers)
            .map_err(|e| {
                AtsProError::InvalidConfiguration(format!("bad table marker set: {}", e))
            })?;

        Ok(Self {
            headers,
            marker_scan,
            // A zero threshold would flag every non-alphanumeric character.
            symbol_run_threshold: rules.symbol_run_threshold.max(1),
            flag_penalty: rules.flag_penalty,
        })
    }

    pub fn analyze(&self, text: &str) -> FormattingAnalysis {
        let lowered = text.to_lowercase();
        let mut flags = Vec::new();

        for header in &self.headers {
            if !lowered.contains(header.as_str()) {
                flags.push(format!("missing header: {}", header));
            }
        }

        if self.marker_scan.is_match(text) || self.has_dense_symbol_run(text) {
            flags.push("possible table/image detected".to_string());
        }

        let formatting_score = (1.0 - self.flag_penalty * flags.len() as f64).max(0.0);

        FormattingAnalysis {
            formatting_score,
            flags,
        }
    }

    fn has_dense_symbol_run(&self, text: &str) -> bool {
        let mut run = 0usize;
        for ch in text.chars() {
            if ch.is_alphanumeric() || ch.is_whitespace() {
                run = 0;
            } else {
                run += 1;
                if run >= self.symbol_run_threshold {
                    return true;
                }
            }
        }
        false
    }
}
