//! Aggregate statistics over the whole store: skill frequencies and the
//! university distribution from nested education entries.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_candidates: usize,
    pub common_skills: HashMap<String, u64>,
    pub university_distribution: HashMap<String, u64>,
}

/// Tallies exact skill strings and `education[].university` values across
/// all records. Non-string entries are skipped, matching the schema-free
/// posture of the store.
pub fn compute_stats(candidates: &[Value]) -> StatsResponse {
    let mut common_skills: HashMap<String, u64> = HashMap::new();
    let mut university_distribution: HashMap<String, u64> = HashMap::new();

    for candidate in candidates {
        if let Some(skills) = candidate.get("skills").and_then(Value::as_array) {
            for skill in skills.iter().filter_map(Value::as_str) {
                *common_skills.entry(skill.to_string()).or_insert(0) += 1;
            }
        }
        if let Some(education) = candidate.get("education").and_then(Value::as_array) {
            for entry in education {
                if let Some(university) = entry.get("university").and_then(Value::as_str) {
                    *university_distribution
                        .entry(university.to_string())
                        .or_insert(0) += 1;
                }
            }
        }
    }

    StatsResponse {
        total_candidates: candidates.len(),
        common_skills,
        university_distribution,
    }
}
