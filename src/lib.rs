//! Omega AI web front-ends.
//!
//! Two presentational surfaces served by a single Axum process:
//!
//! - **Landing page**: static marketing sections plus the model-evolution
//!   line chart, initialized from a fixed declarative configuration.
//! - **Chat widget**: an in-memory transcript and an HTMX form that relays
//!   user text to the remote prediction service and appends the reply.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering full pages and fragments
//! - **UI**: Leptos SSR components + HTMX form interactions
//! - **Prediction client**: one `POST /predict` per submission, no retries
//! - **Sessions**: append-only transcripts held in memory for the life of
//!   the process
//!
//! # Modules
//!
//! - [`chart`]: declarative chart configuration for the landing page
//! - [`predict`]: HTTP client for the remote prediction service
//! - [`session`]: transcript types and the in-memory store
//! - [`server`]: router, handlers, and middleware
//! - [`ui`]: Leptos SSR components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::unused_async)]
#![allow(clippy::default_trait_access)]

pub mod chart;
pub mod config;
pub mod predict;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::predict::PredictClient;
use crate::session::TranscriptStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the remote prediction service.
    pub predict: Arc<PredictClient>,
    /// Transcript store for chat sessions.
    pub transcripts: TranscriptStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}
