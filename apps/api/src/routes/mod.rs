pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", post(handlers::handle_upload))
        .route("/showall", post(handlers::handle_show_all))
        .route("/candidate", get(handlers::handle_get_candidate))
        .route(
            "/candidate/:candidate_number",
            put(handlers::handle_update_candidate).delete(handlers::handle_delete_candidate),
        )
        .route(
            "/candidate/:candidate_number/summary",
            get(handlers::handle_candidate_summary),
        )
        .route("/search/skills", get(handlers::handle_skill_search))
        .route("/compare", post(handlers::handle_compare))
        .route("/stats", get(handlers::handle_stats))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::*;
    use crate::llm_client::LlmClient;
    use crate::store::CandidateStore;

    // Covers every endpoint that works without the external LLM. The
    // LLM-backed paths are exercised down to the gateway boundary by the
    // unit tests in their own modules.

    async fn test_state(dir: &tempfile::TempDir) -> AppState {
        let store = CandidateStore::open(dir.path().join("candidates.json"))
            .await
            .unwrap();
        AppState {
            store: Arc::new(store),
            llm: LlmClient::new(String::new()),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_stats_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let response = app
            .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["total_candidates"], 0);
        assert_eq!(stats["common_skills"], json!({}));
        assert_eq!(stats["university_distribution"], json!({}));
    }

    #[tokio::test]
    async fn test_get_unknown_candidate_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let response = app
            .oneshot(
                Request::get("/candidate?candidate_number=42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_showall_without_prompt_lists_store() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;
        let record = json!({"name": "Ada", "skills": ["rust"]});
        state
            .store
            .insert(record.as_object().unwrap().clone())
            .await
            .unwrap();

        let app = build_router(state);
        let response = app
            .oneshot(Request::post("/showall").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listing = body_json(response).await;
        assert_eq!(listing["total"], 1);
        assert_eq!(listing["candidates"][0]["name"], "Ada");
        assert_eq!(listing["candidates"][0]["candidate_number"], 1);
    }

    #[tokio::test]
    async fn test_get_candidate_by_number() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;
        state
            .store
            .insert(json!({"name": "Ada"}).as_object().unwrap().clone())
            .await
            .unwrap();

        let app = build_router(state);
        let response = app
            .oneshot(
                Request::get("/candidate?candidate_number=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Ada");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;
        state
            .store
            .insert(json!({"name": "Ada"}).as_object().unwrap().clone())
            .await
            .unwrap();

        let app = build_router(state);
        let delete = app
            .clone()
            .oneshot(
                Request::delete("/candidate/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::OK);

        let get = app
            .oneshot(
                Request::get("/candidate?candidate_number=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(get.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_replaces_record_and_keeps_number() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;
        state
            .store
            .insert(json!({"name": "Ada"}).as_object().unwrap().clone())
            .await
            .unwrap();

        let app = build_router(state.clone());
        let body = json!({"name": "Ada Lovelace", "candidate_number": 99}).to_string();
        let response = app
            .oneshot(
                Request::put("/candidate/1")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let records = state.store.read_all().await.unwrap();
        assert_eq!(records[0]["name"], "Ada Lovelace");
        assert_eq!(records[0]["candidate_number"], 1);
    }

    #[tokio::test]
    async fn test_update_unknown_candidate_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let response = app
            .oneshot(
                Request::put("/candidate/5")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Nobody"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_skill_search_superset_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;
        state
            .store
            .insert(
                json!({"name": "Ada", "skills": ["python", "sql"]})
                    .as_object()
                    .unwrap()
                    .clone(),
            )
            .await
            .unwrap();

        let app = build_router(state);
        let hit = app
            .clone()
            .oneshot(
                Request::get("/search/skills?skills=python")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let hit_body = body_json(hit).await;
        assert_eq!(hit_body["matched"].as_array().unwrap().len(), 1);

        let miss = app
            .oneshot(
                Request::get("/search/skills?skills=python,java")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let miss_body = body_json(miss).await;
        assert!(miss_body["matched"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_compare_with_no_matching_candidates_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let response = app
            .oneshot(
                Request::post("/compare")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"candidate_ids": [1, 2], "job_description": "Rust engineer"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir).await);
        let body = "--boundary\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--boundary--\r\n";
        let response = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "multipart/form-data; boundary=boundary")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
