//! End-to-end router tests
//!
//! Run the complete worker (domain routes, 404 fallback, CORS, tracing)
//! against in-memory providers.

use ai_worker::{AppState, app};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_catalog::{CatalogResult, MovieCatalog, TopRatedPage};
use domain_llm::{ChatMessage, ChatModel, LlmProvider, LlmResult};
use domain_vector::{
    BatchConfig, EmbeddedChunk, EmbeddedMovie, EmbeddingProvider, MatchFunction, MatchParams,
    MatchRecord, VectorResult, VectorStore,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // For oneshot()

struct EchoLlm;

#[async_trait]
impl LlmProvider for EchoLlm {
    async fn complete_chat(
        &self,
        _model: ChatModel,
        messages: Vec<ChatMessage>,
    ) -> LlmResult<ChatMessage> {
        Ok(messages.into_iter().last().unwrap_or_else(|| ChatMessage::assistant("")))
    }

    async fn generate_image(&self, _prompt: &str) -> LlmResult<String> {
        Ok("aW1hZ2U=".to_string())
    }
}

struct LengthEmbedder;

#[async_trait]
impl EmbeddingProvider for LengthEmbedder {
    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>> {
        Ok(vec![text.len() as f32])
    }

    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| vec![t.len() as f32]).collect())
    }
}

/// Accepts every insert and returns `matches` for every RPC
struct MemoryStore {
    matches: Vec<MatchRecord>,
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn insert_chunks(&self, rows: &[EmbeddedChunk]) -> VectorResult<usize> {
        Ok(rows.len())
    }

    async fn insert_movies(&self, rows: &[EmbeddedMovie]) -> VectorResult<usize> {
        Ok(rows.len())
    }

    async fn match_rows(
        &self,
        _function: MatchFunction,
        _query_embedding: &[f32],
        _params: MatchParams,
    ) -> VectorResult<Vec<MatchRecord>> {
        Ok(self.matches.clone())
    }
}

/// Catalog where no movie has a poster
struct EmptyCatalog;

#[async_trait]
impl MovieCatalog for EmptyCatalog {
    async fn top_rated(&self, page: &str) -> CatalogResult<TopRatedPage> {
        Ok(TopRatedPage {
            page: page.parse().unwrap_or(1),
            results: vec![],
            total_pages: 0,
            total_results: 0,
        })
    }

    async fn poster_url(&self, _movie_id: i64) -> CatalogResult<Option<String>> {
        Ok(None)
    }
}

fn test_app(matches: Vec<MatchRecord>) -> Router {
    let batch = BatchConfig {
        delay: Duration::ZERO,
        ..BatchConfig::default()
    };
    app(AppState::new(
        Arc::new(EchoLlm),
        Arc::new(LengthEmbedder),
        MemoryStore { matches },
        Arc::new(EmptyCatalog),
        batch,
    ))
}

fn request(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    request("POST", uri, Body::from(body.to_string()))
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

#[tokio::test]
async fn test_options_on_any_path_is_empty_200_with_cors() {
    for path in ["/chat", "/embed-chunks", "/does-not-exist"] {
        let response = test_app(vec![])
            .oneshot(request("OPTIONS", path, Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "path {path}");
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        for method in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(method), "{methods}");
        }
        assert!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
                .to_str()
                .unwrap()
                .eq_ignore_ascii_case("content-type")
        );
        assert!(body_bytes(response.into_body()).await.is_empty());
    }
}

#[tokio::test]
async fn test_unknown_path_is_404_text() {
    for method in ["GET", "POST", "DELETE"] {
        let response = test_app(vec![])
            .oneshot(request(method, "/nope", Body::from("{}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body_bytes(response.into_body()).await, b"Not Found");
    }
}

#[tokio::test]
async fn test_another_endpoint_any_method() {
    for method in ["GET", "POST", "PUT"] {
        let response = test_app(vec![])
            .oneshot(request(method, "/another-endpoint", Body::from("ignored")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_bytes(response.into_body()).await,
            b"This is another endpoint"
        );
    }
}

#[tokio::test]
async fn test_wrong_method_is_405_json() {
    let response = test_app(vec![])
        .oneshot(request("GET", "/chat", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "GET Method not allowed"}));
}

#[tokio::test]
async fn test_chat_round_trip_with_cors() {
    let response = test_app(vec![])
        .oneshot(post_json(
            "/chat",
            json!([{"role": "user", "content": "hello", "name": "ana"}]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"role": "user", "content": "hello", "name": "ana"}));
}

#[tokio::test]
async fn test_embed_chunks_embeds_only_non_blank() {
    let response = test_app(vec![])
        .oneshot(post_json(
            "/embed-chunks",
            json!({"chunks": [{"content": "a"}, {"content": ""}, {"pageContent": "b"}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let contents: Vec<&str> = body["embeddings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["a", "b"]);
    assert_eq!(body["totalChunks"], 2);
    assert_eq!(body["supabaseInserted"], 2);
}

#[tokio::test]
async fn test_handle_matching_without_rows() {
    let response = test_app(vec![])
        .oneshot(post_json(
            "/handle-matching",
            json!({"prompt": {"embedding": [0.1, 0.2, 0.3]}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"result": "No matches found"}));
}

#[tokio::test]
async fn test_handle_matching_object_poster_url_null() {
    let matches: Vec<MatchRecord> = serde_json::from_value(json!([{
        "content": "A detective hunts a killer.",
        "movie_db_id": 807
    }]))
    .unwrap();

    let response = test_app(matches)
        .oneshot(post_json(
            "/handle-matching-object",
            json!({"prompt": {"embedding": [0.1]}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"result": [{
            "content": "A detective hunts a killer.",
            "movie_db_id": 807,
            "posterUrl": null
        }]})
    );
}

#[tokio::test]
async fn test_top_rated_movies_empty_listing() {
    let response = test_app(vec![])
        .oneshot(request("GET", "/top-rated-movies?page=2", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"movies": ""}));
}

#[tokio::test]
async fn test_malformed_json_is_500_envelope() {
    let response = test_app(vec![])
        .oneshot(request("POST", "/generate-image", Body::from("{\"prompt\":")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    assert!(body.get("details").is_none());
}
