use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::candidates::models::{
    CandidateListResponse, CandidateNumberQuery, CompareRequest, CompareResponse,
    FilteredListResponse, MessageResponse, ShowAllForm, SkillSearchQuery, SkillSearchResponse,
    SummaryResponse, UploadResponse,
};
use crate::candidates::prompts::{self, CANDIDATE_SUMMARY_PROMPT, RESUME_EXTRACT_PROMPT};
use crate::candidates::search::{has_all_skills, parse_skill_query};
use crate::candidates::stats::{compute_stats, StatsResponse};
use crate::errors::AppError;
use crate::extract::{extract_text, json::extract_json};
use crate::state::AppState;
use crate::store::candidate_number;

/// POST /
/// Uploads one resume, extracts structured fields via the LLM, and appends
/// the record to the store.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.txt").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
            file = Some((filename, data.to_vec()));
            break;
        }
    }
    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let raw_text = extract_text(&filename, &data)?;
    info!("Extracted {} chars of text from '{filename}'", raw_text.len());

    let completion = state
        .llm
        .call(RESUME_EXTRACT_PROMPT, &raw_text)
        .await
        .map_err(|e| AppError::Llm(format!("Resume extraction failed: {e}")))?;

    let Some(Value::Object(candidate)) = extract_json(&completion) else {
        return Err(AppError::LlmParse);
    };

    let stored = state.store.insert(candidate).await?;
    info!(
        "Stored candidate #{}",
        candidate_number(&stored).unwrap_or_default()
    );

    Ok(Json(UploadResponse {
        message: "Successfully uploaded and parsed.".to_string(),
        data: stored,
    }))
}

/// POST /showall
/// Without a prompt: the full listing with a count. With one: the store is
/// serialized as LLM content and the completion is returned verbatim.
pub async fn handle_show_all(
    State(state): State<AppState>,
    form: Option<Form<ShowAllForm>>,
) -> Result<Response, AppError> {
    let candidates = state.store.read_all().await?;

    let prompt = form
        .and_then(|Form(f)| f.prompt)
        .filter(|p| !p.is_empty());
    let Some(query) = prompt else {
        return Ok(Json(CandidateListResponse {
            total: candidates.len(),
            candidates,
        })
        .into_response());
    };

    let result = state
        .llm
        .call(&prompts::filter_prompt(&query), &pretty_json(&candidates)?)
        .await
        .map_err(|e| AppError::Llm(format!("Candidate filtering failed: {e}")))?;

    Ok(Json(FilteredListResponse { query, result }).into_response())
}

/// GET /candidate?candidate_number=n
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Query(params): Query<CandidateNumberQuery>,
) -> Result<Json<Value>, AppError> {
    let candidates = state.store.read_all().await?;
    candidates
        .into_iter()
        .find(|c| candidate_number(c) == Some(params.candidate_number))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))
}

/// PUT /candidate/:candidate_number
/// Replaces the whole record; the path number always wins over the body's.
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(number): Path<i64>,
    Json(updated): Json<Map<String, Value>>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .store
        .update(number, updated)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;
    info!("Updated candidate #{number}");
    Ok(Json(MessageResponse {
        message: "Candidate updated".to_string(),
    }))
}

/// DELETE /candidate/:candidate_number
/// Idempotent: deleting an unknown number still succeeds.
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete(number).await?;
    Ok(Json(MessageResponse {
        message: format!("Candidate {number} deleted"),
    }))
}

/// GET /search/skills?skills=python,sql
pub async fn handle_skill_search(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchQuery>,
) -> Result<Json<SkillSearchResponse>, AppError> {
    let query_skills = parse_skill_query(&params.skills);
    let candidates = state.store.read_all().await?;
    let matched = candidates
        .into_iter()
        .filter(|c| has_all_skills(c, &query_skills))
        .collect();
    Ok(Json(SkillSearchResponse {
        query_skills,
        matched,
    }))
}

/// GET /candidate/:candidate_number/summary
pub async fn handle_candidate_summary(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<SummaryResponse>, AppError> {
    let candidates = state.store.read_all().await?;
    let candidate = candidates
        .iter()
        .find(|c| candidate_number(c) == Some(number))
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

    let summary = state
        .llm
        .call(CANDIDATE_SUMMARY_PROMPT, &pretty_json(candidate)?)
        .await
        .map_err(|e| AppError::Llm(format!("Summary generation failed: {e}")))?;

    Ok(Json(SummaryResponse { summary }))
}

/// POST /compare
/// Ranks the selected candidates against a job description; the LLM's
/// free-text ranking is returned as-is.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let candidates = state.store.read_all().await?;
    let selected: Vec<Value> = candidates
        .into_iter()
        .filter(|c| candidate_number(c).is_some_and(|n| req.candidate_ids.contains(&n)))
        .collect();
    if selected.is_empty() {
        return Err(AppError::NotFound("No matching candidates".to_string()));
    }

    let comparison = state
        .llm
        .call(
            &prompts::compare_prompt(&req.job_description),
            &pretty_json(&selected)?,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Candidate comparison failed: {e}")))?;

    Ok(Json(CompareResponse { comparison }))
}

/// GET /stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let candidates = state.store.read_all().await?;
    Ok(Json(compute_stats(&candidates)))
}

/// Serializes LLM content the same way the store is persisted, so the model
/// sees records exactly as they are kept on disk.
fn pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))
}
