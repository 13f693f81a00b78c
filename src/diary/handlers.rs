use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{DiaryQuery, NewEntryRequest, UpdateDraftRequest};
use super::repo_types::DiaryEntry;
use crate::clock::today;
use crate::state::AppState;

pub fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/diary", get(list_entries).post(add_entry))
        .route("/diary/current", get(get_current).put(update_current))
        .route("/diary/current/save", post(save_current))
        .route("/diary/:id", get(get_entry))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(q): Query<DiaryQuery>,
) -> Json<Vec<DiaryEntry>> {
    let entries = match q.date {
        Some(date) => state.diary.by_date(date),
        None => state.diary.entries(),
    };
    Json(entries)
}

#[instrument(skip(state, payload))]
pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> (StatusCode, Json<DiaryEntry>) {
    let entry = DiaryEntry {
        mood: payload.mood,
        content: payload.content,
        ..DiaryEntry::draft(payload.date.unwrap_or_else(today))
    };
    state.diary.add(entry.clone());
    (StatusCode::CREATED, Json(entry))
}

#[instrument(skip(state))]
pub async fn get_current(State(state): State<AppState>) -> Json<DiaryEntry> {
    Json(state.diary.current())
}

#[instrument(skip(state, payload))]
pub async fn update_current(
    State(state): State<AppState>,
    Json(payload): Json<UpdateDraftRequest>,
) -> Json<DiaryEntry> {
    Json(state.diary.update_current(payload.mood, payload.content))
}

#[instrument(skip(state))]
pub async fn save_current(State(state): State<AppState>) -> (StatusCode, Json<DiaryEntry>) {
    let saved = state.diary.save_current();
    info!(entry_id = %saved.id, "diary entry saved");
    (StatusCode::CREATED, Json(saved))
}

#[instrument(skip(state))]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiaryEntry>, (StatusCode, String)> {
    state.diary.get(id).map(Json).ok_or_else(|| {
        warn!(%id, "diary entry not found");
        (StatusCode::NOT_FOUND, "Diary entry not found".into())
    })
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn call(state: &AppState, req: Request<Body>) -> (StatusCode, Value) {
        let res = diary_routes()
            .with_state(state.clone())
            .oneshot(req)
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn write_save_and_read_back() {
        let state = AppState::fake();

        let req = Request::put("/diary/current")
            .header("content-type", "application/json")
            .body(Body::from(json!({"mood": "😊", "content": "ran 5k"}).to_string()))
            .unwrap();
        let (status, draft) = call(&state, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(draft["content"], "ran 5k");

        let req = Request::post("/diary/current/save").body(Body::empty()).unwrap();
        let (status, saved) = call(&state, req).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["mood"], "😊");

        let id = saved["id"].as_str().unwrap().to_string();
        let (status, fetched) =
            call(&state, Request::get(format!("/diary/{id}")).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, saved);

        let (_, current) =
            call(&state, Request::get("/diary/current").body(Body::empty()).unwrap()).await;
        assert_eq!(current["content"], "");
        assert_ne!(current["id"], saved["id"]);

        let (_, list) = call(&state, Request::get("/diary").body(Body::empty()).unwrap()).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn posted_entries_list_ahead_of_saved_ones() {
        let state = AppState::fake();
        let post = |body: Value| {
            Request::post("/diary")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let (status, old) =
            call(&state, post(json!({"date": "2024-03-01", "content": "imported"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(old["date"], "2024-03-01");
        assert_eq!(old["mood"], "");

        state.diary.update_current(None, Some("today".into()));
        call(&state, Request::post("/diary/current/save").body(Body::empty()).unwrap()).await;
        let (_, latest) = call(&state, post(json!({"content": "late import"}))).await;
        assert_eq!(latest["date"], state.diary.current().date.to_string());

        let (_, list) = call(&state, Request::get("/diary").body(Body::empty()).unwrap()).await;
        let contents: Vec<_> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, ["late import", "today", "imported"]);

        let (_, by_day) = call(
            &state,
            Request::get("/diary?date=2024-03-01").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(by_day.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_entry_is_not_found() {
        let state = AppState::fake();
        let uri = format!("/diary/{}", Uuid::new_v4());
        let (status, _) = call(&state, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
