//! Axum router and request handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Form, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::chart::{self, ChartConfig};
use crate::config::AppConfig;
use crate::predict::PredictClient;
use crate::session::TranscriptStore;
use crate::ui::chat::{ChatShell, TranscriptView};
use crate::ui::landing::LandingPage;
use crate::ui::layout::Shell;
use crate::ui::{render_fragment, render_page};

/// Start the server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let predict = Arc::new(PredictClient::new(
        config.predict.base_url.clone(),
        config.predict.timeout_secs.map(Duration::from_secs),
    )?);

    info!(
        name: "predict.config.loaded",
        base_url = %predict.base_url(),
        "Prediction service configured"
    );

    let state = AppState {
        predict,
        transcripts: TranscriptStore::new(),
        config: Arc::clone(&config),
    };

    // Periodic sweep of inactive chat sessions.
    let transcripts = state.transcripts.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let removed =
                transcripts.cleanup_expired_with_timeout(crate::session::DEFAULT_SESSION_TIMEOUT);
            if removed > 0 {
                info!(
                    name: "session.cleanup",
                    removed,
                    "Expired chat sessions removed"
                );
            }
        }
    });

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // Axum's Router type changes with every layer, so a disabled timeout is
    // expressed as an effectively unbounded duration instead of a
    // conditionally applied layer.
    let timeout_duration = if state.config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(30)
    };

    Router::new()
        // HTML pages
        .route("/", get(landing_handler))
        .route("/chat", get(chat_page_handler))
        // Chat widget
        .route("/chat/send", post(chat_send_handler))
        .route("/chat/transcript", get(transcript_handler))
        // Data endpoints
        .route("/api/charts/model-evolution", get(chart_handler))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Marketing landing page.
async fn landing_handler() -> Html<String> {
    Html(render_page(|| {
        view! {
            <Shell title="Omega AI">
                <LandingPage />
            </Shell>
        }
    }))
}

/// GET /chat - Chat page with a fresh transcript.
async fn chat_page_handler(State(state): State<AppState>) -> Html<String> {
    let transcript = state.transcripts.create();
    let session_id = transcript.id().to_string();

    tracing::debug!(session_id = %session_id, "Created chat session");

    Html(render_page(move || {
        view! {
            <Shell title="Assistant">
                <ChatShell session_id=session_id messages=Vec::new() />
            </Shell>
        }
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat Widget Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body for chat submission.
#[derive(Debug, Deserialize)]
struct SendForm {
    /// Raw user input.
    message: String,
    /// Session ID from the hidden form field.
    #[serde(default)]
    session_id: String,
}

/// Query parameters for the transcript fragment.
#[derive(Debug, Deserialize)]
struct TranscriptQuery {
    session_id: String,
}

/// POST /chat/send - Submit user text and exchange it with the prediction
/// service.
///
/// Whitespace-only input is a no-op. Otherwise the user entry is appended
/// first, then one outbound call is made; a successful reply appends a bot
/// entry, any failure is logged and swallowed. The response is always the
/// re-rendered transcript fragment, so the widget stays interactive no
/// matter what the remote service did.
async fn chat_send_handler(
    State(state): State<AppState>,
    Form(form): Form<SendForm>,
) -> Html<String> {
    let transcript = if form.session_id.is_empty() {
        state.transcripts.create()
    } else {
        state.transcripts.get_or_create(&form.session_id)
    };

    if form.message.trim().is_empty() {
        return transcript_fragment(&transcript.messages());
    }

    tracing::info!(
        session_id = %transcript.id(),
        message_len = form.message.len(),
        "Received chat message"
    );

    // The user entry lands before the outbound call and survives any
    // failure; there is no rollback.
    transcript.push_user(form.message.clone());

    // No correlation between overlapping submissions; replies append in
    // completion order.
    match state.predict.predict(&form.message).await {
        Ok(reply) => {
            tracing::debug!(
                session_id = %transcript.id(),
                reply_len = reply.len(),
                "Prediction reply received"
            );
            transcript.push_bot(reply);
        }
        Err(e) => {
            // Operator-visible only; the end user sees no error state.
            tracing::error!(
                session_id = %transcript.id(),
                error = %e,
                "Prediction request failed"
            );
        }
    }

    transcript_fragment(&transcript.messages())
}

/// GET /chat/transcript - Current transcript fragment for a session.
async fn transcript_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Html<String> {
    let messages = state
        .transcripts
        .get(&query.session_id)
        .map(|t| t.messages())
        .unwrap_or_default();

    transcript_fragment(&messages)
}

/// Render the transcript swap fragment.
fn transcript_fragment(messages: &[crate::session::ChatMessage]) -> Html<String> {
    let messages = messages.to_vec();
    Html(render_fragment(move || {
        view! { <TranscriptView messages=messages /> }
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Data Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/charts/model-evolution - Fixed chart configuration.
async fn chart_handler() -> Json<ChartConfig> {
    Json(chart::model_evolution())
}

/// GET /health - Liveness probe.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
