use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response for a successful resume upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// The stored candidate record, including its assigned number.
    pub data: Value,
}

/// Form body for `POST /showall`. Without a prompt the endpoint returns
/// the raw listing instead of asking the LLM to filter it.
#[derive(Debug, Deserialize)]
pub struct ShowAllForm {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub total: usize,
    pub candidates: Vec<Value>,
}

/// LLM-filtered listing. `result` is the completion verbatim, not
/// machine-parseable data.
#[derive(Debug, Serialize)]
pub struct FilteredListResponse {
    pub query: String,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct CandidateNumberQuery {
    pub candidate_number: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillSearchQuery {
    /// Comma-separated skill names, e.g. `skills=python,sql`.
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct SkillSearchResponse {
    pub query_skills: Vec<String>,
    pub matched: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Body for `POST /compare`. Both fields tolerate being omitted.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub candidate_ids: Vec<i64>,
    #[serde(default)]
    pub job_description: String,
}

/// Comparison result: the LLM's ranking as free text.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: String,
}
