//! End-to-end tests for the chat widget and landing page endpoints.
//!
//! The remote prediction service is stood in for by a small Axum app bound
//! to an ephemeral port, so the full request path (form submit -> outbound
//! call -> transcript fragment) runs against real HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde::Serialize;
use serde_json::{Value, json};

use omega_web::AppState;
use omega_web::chart;
use omega_web::config::{AppConfig, PredictConfig, ResilienceConfig, ServerConfig};
use omega_web::predict::PredictClient;
use omega_web::server::router;
use omega_web::session::TranscriptStore;

#[derive(Debug, Serialize)]
struct SendForm<'a> {
    message: &'a str,
    session_id: &'a str,
}

/// Spawn a stub prediction service and return its base URL.
async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    format!("http://{addr}")
}

/// Stub that echoes the input back as the reply message.
fn echo_stub() -> Router {
    async fn predict(Json(body): Json<Value>) -> Json<Value> {
        let input = body.get("input").and_then(Value::as_str).unwrap_or_default();
        Json(json!({ "message": format!("echo: {input}") }))
    }
    Router::new().route("/predict", post(predict))
}

/// Stub that echoes immediately, except for the input "slow" which is held
/// back long enough for a later request to finish first.
fn delayed_echo_stub() -> Router {
    async fn predict(Json(body): Json<Value>) -> Json<Value> {
        let input = body.get("input").and_then(Value::as_str).unwrap_or_default();
        if input == "slow" {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        Json(json!({ "message": format!("echo: {input}") }))
    }
    Router::new().route("/predict", post(predict))
}

/// Stub that always fails with a server error.
fn failing_stub() -> Router {
    async fn predict() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    Router::new().route("/predict", post(predict))
}

/// Stub that answers 200 with a body missing the `message` field.
fn malformed_stub() -> Router {
    async fn predict() -> Json<Value> {
        Json(json!({}))
    }
    Router::new().route("/predict", post(predict))
}

fn test_state(base_url: &str) -> AppState {
    let config = Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        predict: PredictConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
        },
        resilience: ResilienceConfig {
            timeout_disabled: false,
        },
    });

    AppState {
        predict: Arc::new(
            PredictClient::new(base_url, Some(Duration::from_secs(5)))
                .expect("build predict client"),
        ),
        transcripts: TranscriptStore::new(),
        config,
    }
}

#[tokio::test]
async fn whitespace_submit_is_a_noop() {
    let base = spawn_stub(echo_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    let res = server
        .post("/chat/send")
        .form(&SendForm {
            message: "   \t  ",
            session_id: &id,
        })
        .await;

    res.assert_status_ok();
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn successful_submit_appends_user_then_bot() {
    let base = spawn_stub(echo_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    let res = server
        .post("/chat/send")
        .form(&SendForm {
            message: "hello there",
            session_id: &id,
        })
        .await;

    res.assert_status_ok();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "hello there");
    assert!(messages[0].is_user);
    assert_eq!(messages[1].text, "echo: hello there");
    assert!(!messages[1].is_user);

    // The fragment renders both entries with their role markers.
    let body = res.text();
    assert!(body.contains("hello there"));
    assert!(body.contains("echo: hello there"));
    assert!(body.contains("data-role=\"user\""));
    assert!(body.contains("data-role=\"bot\""));
}

#[tokio::test]
async fn failed_status_keeps_user_entry_only() {
    let base = spawn_stub(failing_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    let res = server
        .post("/chat/send")
        .form(&SendForm {
            message: "does this work?",
            session_id: &id,
        })
        .await;

    // The widget never surfaces the failure to the end user.
    res.assert_status_ok();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_user);
    assert!(!res.text().contains("data-role=\"bot\""));
}

#[tokio::test]
async fn malformed_reply_keeps_user_entry_only() {
    let base = spawn_stub(malformed_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    let res = server
        .post("/chat/send")
        .form(&SendForm {
            message: "ping",
            session_id: &id,
        })
        .await;

    res.assert_status_ok();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "ping");
    assert!(messages[0].is_user);
}

#[tokio::test]
async fn connection_refused_keeps_user_entry_only() {
    // Bind and immediately drop a listener to obtain a dead port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let state = test_state(&dead);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    let res = server
        .post("/chat/send")
        .form(&SendForm {
            message: "anyone home?",
            session_id: &id,
        })
        .await;

    res.assert_status_ok();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_user);
}

#[tokio::test]
async fn rapid_submissions_keep_user_entries_in_call_order() {
    let base = spawn_stub(echo_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    for text in ["a", "b"] {
        server
            .post("/chat/send")
            .form(&SendForm {
                message: text,
                session_id: &id,
            })
            .await
            .assert_status_ok();
    }

    let user_entries: Vec<String> = transcript
        .messages()
        .into_iter()
        .filter(|m| m.is_user)
        .map(|m| m.text)
        .collect();
    assert_eq!(user_entries, vec!["a".to_string(), "b".to_string()]);

    // Each submission also produced its reply; replies are allowed to
    // interleave in completion order, so only count them.
    let bot_entries = transcript.messages().iter().filter(|m| !m.is_user).count();
    assert_eq!(bot_entries, 2);
}

#[tokio::test]
async fn overlapping_submissions_append_replies_in_completion_order() {
    let base = spawn_stub(delayed_echo_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    let transcript = state.transcripts.create();
    let id = transcript.id().to_string();

    // The first submission's reply is held back by the stub; the second is
    // issued while the first is still in flight and answers immediately.
    let slow = async {
        server
            .post("/chat/send")
            .form(&SendForm {
                message: "slow",
                session_id: &id,
            })
            .await
    };
    let fast = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        server
            .post("/chat/send")
            .form(&SendForm {
                message: "fast",
                session_id: &id,
            })
            .await
    };

    let (slow_res, fast_res) = tokio::join!(slow, fast);
    slow_res.assert_status_ok();
    fast_res.assert_status_ok();

    let messages = transcript.messages();
    assert_eq!(messages.len(), 4);

    // User entries land in call order.
    let users: Vec<&str> = messages
        .iter()
        .filter(|m| m.is_user)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(users, ["slow", "fast"]);

    // Replies are not correlated with their requests: the fast reply lands
    // first even though its submission came second.
    let bots: Vec<&str> = messages
        .iter()
        .filter(|m| !m.is_user)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(bots, ["echo: fast", "echo: slow"]);
}

#[tokio::test]
async fn unknown_session_id_is_created_on_demand() {
    let base = spawn_stub(echo_stub()).await;
    let state = test_state(&base);
    let server = TestServer::new(router(state.clone())).unwrap();

    server
        .post("/chat/send")
        .form(&SendForm {
            message: "hi",
            session_id: "fresh-session",
        })
        .await
        .assert_status_ok();

    let res = server
        .get("/chat/transcript")
        .add_query_param("session_id", "fresh-session")
        .await;
    res.assert_status_ok();
    assert!(res.text().contains("hi"));
}

#[tokio::test]
async fn chart_endpoint_matches_fixed_configuration() {
    let base = spawn_stub(echo_stub()).await;
    let server = TestServer::new(router(test_state(&base))).unwrap();

    let first: chart::ChartConfig = server.get("/api/charts/model-evolution").await.json();
    let second: chart::ChartConfig = server.get("/api/charts/model-evolution").await.json();

    assert_eq!(first, chart::model_evolution());
    assert_eq!(first, second);
}

#[tokio::test]
async fn pages_render() {
    let base = spawn_stub(echo_stub()).await;
    let server = TestServer::new(router(test_state(&base))).unwrap();

    let landing = server.get("/").await;
    landing.assert_status_ok();
    let body = landing.text();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("id=\"model-evolution\""));
    assert!(body.contains("Omega AI"));

    let chat = server.get("/chat").await;
    chat.assert_status_ok();
    let body = chat.text();
    assert!(body.contains("hx-post=\"/chat/send\""));
    assert!(body.contains("id=\"transcript\""));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let base = spawn_stub(echo_stub()).await;
    let server = TestServer::new(router(test_state(&base))).unwrap();

    let res = server.get("/health").await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>(), json!({ "status": "ok" }));
}
