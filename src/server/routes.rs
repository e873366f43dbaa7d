use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::card::{Sentence, StudyCard};
use crate::import;
use crate::query::StudyQueries;
use crate::server::AppState;
use crate::storage::StoreStats;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
    pub deck: Option<String>,
}

#[derive(Deserialize)]
pub struct StudyDeckParams {
    #[serde(default)]
    pub starred: bool,
}

#[derive(Deserialize)]
pub struct AddCardRequest {
    pub sentence_id: i64,
}

#[derive(Deserialize)]
pub struct StarRequest {
    pub starred: bool,
}

#[derive(Serialize)]
pub struct MutationResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /search?term=&deck=
///
/// Store failures degrade to an empty list so the browsing surface never
/// sees an error, only fewer results. The failure itself goes to the log.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Sentence>> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    match queries.search(&params.term, params.deck.as_deref()) {
        Ok(results) => Json(results),
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Json(Vec::new())
        }
    }
}

/// GET /decks
pub async fn deck_names(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    match queries.deck_names() {
        Ok(names) => Json(names),
        Err(e) => {
            tracing::error!("Deck listing failed: {}", e);
            Json(Vec::new())
        }
    }
}

/// GET /study-deck?starred=
pub async fn study_deck(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StudyDeckParams>,
) -> Json<Vec<StudyCard>> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    match queries.study_deck(params.starred) {
        Ok(cards) => Json(cards),
        Err(e) => {
            tracing::error!("Study deck fetch failed: {}", e);
            Json(Vec::new())
        }
    }
}

/// POST /study-deck with {"sentence_id": N}
///
/// Adding an already-adopted sentence still reports success; the call is
/// idempotent all the way down.
pub async fn add_to_study_deck(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddCardRequest>,
) -> Json<MutationResponse> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    let success = match queries.add_to_study_deck(request.sentence_id) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Add to study deck failed: {}", e);
            false
        }
    };

    Json(MutationResponse { success })
}

/// PUT /study-deck/{sentence_id}/star with {"starred": bool}
pub async fn set_starred(
    State(state): State<Arc<AppState>>,
    Path(sentence_id): Path<i64>,
    Json(request): Json<StarRequest>,
) -> Json<MutationResponse> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    let success = match queries.set_starred(sentence_id, request.starred) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Star update failed: {}", e);
            false
        }
    };

    Json(MutationResponse { success })
}

/// DELETE /study-deck/{sentence_id}
pub async fn remove_from_study_deck(
    State(state): State<Arc<AppState>>,
    Path(sentence_id): Path<i64>,
) -> Json<MutationResponse> {
    let store = state.store.lock().await;
    let queries = StudyQueries::new(&store);

    let success = match queries.remove_from_study_deck(sentence_id) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Remove from study deck failed: {}", e);
            false
        }
    };

    Json(MutationResponse { success })
}

/// POST /import, multipart with a required `file` part and an optional
/// `deckName` part.
pub async fn import_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut file_text: Option<String> = None;
    let mut deck_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Import upload could not be read: {}", e);
        generic_import_failure()
    })? {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.map_err(|e| {
            tracing::error!("Import field could not be read: {}", e);
            generic_import_failure()
        })?;

        match name.as_str() {
            "file" => file_text = Some(value),
            "deckName" => deck_name = Some(value),
            _ => {}
        }
    }

    let Some(text) = file_text else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file provided".to_string(),
            }),
        ));
    };

    let mut store = state.store.lock().await;
    let imported =
        import::import_sentences(&mut store, &text, deck_name.as_deref()).map_err(|e| {
            tracing::error!("Import insert failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(ImportResponse {
        success: true,
        message: format!("Imported {} sentences successfully", imported),
    }))
}

/// GET /stats
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoreStats>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let stats = store.stats().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(stats))
}

fn generic_import_failure() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to process import".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::NewSentence;
    use crate::server::build_router;
    use crate::storage::SqliteStore;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::response::Response;
    use axum::Router;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    const BOUNDARY: &str = "X-REPASO-TEST-BOUNDARY";

    fn seeded_app() -> Router {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .insert_sentence(&NewSentence::new("The house is big", "La casa es grande", "Lesson 1"))
            .unwrap();
        store
            .insert_sentence(&NewSentence::new("Good morning", "Buenos dias", "Lesson 2"))
            .unwrap();

        build_router(Arc::new(AppState {
            store: Mutex::new(store),
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(file: Option<&str>, deck_name: Option<&str>) -> Request<Body> {
        let mut body = String::new();
        if let Some(text) = file {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"lessons.csv\"\r\nContent-Type: text/csv\r\n\r\n{text}\r\n"
            ));
        }
        if let Some(deck) = deck_name {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"deckName\"\r\n\r\n{deck}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method(Method::POST)
            .uri("/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let app = seeded_app();

        let response = app.oneshot(get("/search?term=casa")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let results = body_json(response).await;
        assert_eq!(results.as_array().unwrap().len(), 1);
        assert_eq!(results[0]["english"], "The house is big");
    }

    #[tokio::test]
    async fn test_search_deck_filter_and_sentinel() {
        let app = seeded_app();

        let response = app
            .clone()
            .oneshot(get("/search?term=&deck=Lesson%202"))
            .await
            .unwrap();
        let results = body_json(response).await;
        assert_eq!(results.as_array().unwrap().len(), 1);
        assert_eq!(results[0]["spanish"], "Buenos dias");

        let response = app
            .oneshot(get("/search?term=&deck=All%20Lessons"))
            .await
            .unwrap();
        let results = body_json(response).await;
        assert_eq!(results.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_decks_endpoint() {
        let app = seeded_app();

        let response = app.oneshot(get("/decks")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let names = body_json(response).await;
        assert_eq!(names, serde_json::json!(["Lesson 1", "Lesson 2"]));
    }

    #[tokio::test]
    async fn test_study_deck_flow() {
        let app = seeded_app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/study-deck",
                serde_json::json!({"sentence_id": 1}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["success"], true);

        // Second add is idempotent and still succeeds
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/study-deck",
                serde_json::json!({"sentence_id": 1}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["success"], true);

        let response = app.clone().oneshot(get("/study-deck")).await.unwrap();
        let cards = body_json(response).await;
        assert_eq!(cards.as_array().unwrap().len(), 1);
        assert_eq!(cards[0]["id"], 1);
        assert_eq!(cards[0]["is_starred"], false);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/study-deck/1/star",
                serde_json::json!({"starred": true}),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["success"], true);

        let response = app
            .clone()
            .oneshot(get("/study-deck?starred=true"))
            .await
            .unwrap();
        let starred = body_json(response).await;
        assert_eq!(starred.as_array().unwrap().len(), 1);
        assert_eq!(starred[0]["is_starred"], true);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/study-deck/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["success"], true);

        let response = app.oneshot(get("/study-deck")).await.unwrap();
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_entry_reports_success() {
        let app = seeded_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/study-deck/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["success"], true);
    }

    #[tokio::test]
    async fn test_import_endpoint() {
        let app = seeded_app();

        let csv = "english,spanish\nHello,Hola\nGoodbye,Adios";
        let response = app
            .clone()
            .oneshot(multipart_request(Some(csv), Some("Default")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["success"], true);
        assert_eq!(payload["message"], "Imported 2 sentences successfully");

        let response = app
            .oneshot(get("/search?term=&deck=Default"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_without_file_is_rejected() {
        let app = seeded_app();

        let response = app
            .oneshot(multipart_request(None, Some("Default")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_import_empty_deck_name_falls_back() {
        let app = seeded_app();

        let csv = "english,spanish\nHello,Hola";
        let response = app
            .clone()
            .oneshot(multipart_request(Some(csv), Some("")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get("/search?term=&deck=Unknown%20Deck"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = seeded_app();

        let response = app.oneshot(get("/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stats = body_json(response).await;
        assert_eq!(stats["sentences"], 2);
        assert_eq!(stats["decks"], 2);
        assert_eq!(stats["study_entries"], 0);
    }
}
