//! Skill search: case-insensitive superset matching over each candidate's
//! `skills` array.

use serde_json::Value;

/// Parses the comma-separated `skills` query into trimmed, lowercased,
/// non-empty terms.
pub fn parse_skill_query(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// True when the candidate's skill set contains every requested skill.
/// An empty request matches every candidate; a candidate without skills
/// matches nothing else.
pub fn has_all_skills(candidate: &Value, requested: &[String]) -> bool {
    let skills: Vec<String> = candidate
        .get("skills")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_lowercase)
                .collect()
        })
        .unwrap_or_default();
    requested.iter().all(|skill| skills.contains(skill))
}
