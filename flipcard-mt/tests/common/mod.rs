//! In-process translation provider for integration tests
//!
//! Serves `POST /translate` on an ephemeral localhost port and records every
//! request it receives.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use flipcard_mt::{TranslationService, TranslatorConfig};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "test-api-key";

type Responder = Arc<dyn Fn(&Value) -> (StatusCode, String) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FixtureState {
    responder: Responder,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FixtureProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FixtureProvider {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Config pointing at this provider with the default call spacing
    pub fn config(&self) -> TranslatorConfig {
        TranslatorConfig::default()
            .with_api_key(TEST_API_KEY)
            .with_base_url(&self.base_url)
    }

    pub fn service(&self) -> TranslationService {
        TranslationService::from_config(&self.config()).unwrap()
    }
}

async fn translate(
    State(state): State<FixtureState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        authorization,
        body: body.clone(),
    });
    (state.responder)(&body)
}

pub async fn spawn_provider<F>(responder: F) -> FixtureProvider
where
    F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FixtureState {
        responder: Arc::new(responder),
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/translate", post(translate))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FixtureProvider {
        base_url: format!("http://{}", addr),
        requests,
    }
}

/// Provider that knows a handful of English → Spanish phrases
pub async fn spanish_provider() -> FixtureProvider {
    spawn_provider(|body| {
        let text = body["text"].as_str().unwrap_or_default();
        let translated = match text {
            "Hi" => "Hola",
            "Bye" => "Adiós",
            "Hello" => "Hola",
            "cat" => "gato",
            other => other,
        };
        let reply = json!({
            "translated_text": translated,
            "source_language": body.get("source_language").cloned().unwrap_or(json!("en")),
            "target_language": body["target_language"],
            "confidence": 0.9
        });
        (StatusCode::OK, reply.to_string())
    })
    .await
}

/// Provider that translates every text but reports zero confidence
pub async fn unsure_provider() -> FixtureProvider {
    spawn_provider(|_| {
        (
            StatusCode::OK,
            json!({"translated_text": "Hola", "confidence": 0.0}).to_string(),
        )
    })
    .await
}

/// Provider that fails every request with the given status
pub async fn failing_provider(status: StatusCode) -> FixtureProvider {
    spawn_provider(move |_| (status, "provider exploded".to_string())).await
}

/// Base URL on which nothing is listening
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
