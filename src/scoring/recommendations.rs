//! Actionable suggestions derived from the scoring pass

/// Build the recommendation list in a stable order: missing skills first,
/// then the experience gap, then one entry per formatting flag.
pub fn build_recommendations(
    missing_skills: &[String],
    estimated_years: u32,
    required_years: u32,
    flags: &[String],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    for skill in missing_skills {
        recommendations.push(format!("Add or highlight skill: {}", skill));
    }

    if estimated_years < required_years {
        recommendations.push(format!(
            "Highlight more relevant experience (need ~{} more years or reframe existing roles).",
            required_years - estimated_years
        ));
    }

    for flag in flags {
        if let Some(header) = flag.strip_prefix("missing header: ") {
            recommendations.push(format!("Add a clearly labeled '{}' section", header));
        } else {
            recommendations
                .push("Avoid tables/images; use plain text for ATS compatibility".to_string());
        }
    }

    recommendations
}
