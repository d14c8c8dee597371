//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatHeader, ChatInputArea, TranscriptView};
use crate::session::ChatMessage;

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with title
/// - Scrollable transcript area (HTMX swap target)
/// - Input area for new messages
#[component]
pub fn ChatShell(
    /// Title displayed in the header.
    #[prop(default = "Omega Assistant")]
    title: &'static str,
    /// Session ID for this transcript.
    #[prop(into)]
    session_id: String,
    /// Messages rendered on initial load.
    messages: Vec<ChatMessage>,
) -> impl IntoView {
    view! {
        <div class="chat-shell flex flex-col h-[calc(100vh-12rem)] bg-panel border border-panelBorder rounded-2xl overflow-hidden">
            <ChatHeader title=title />

            <div id="transcript" class="flex-1 overflow-y-auto p-6">
                <TranscriptView messages=messages />
            </div>

            <ChatInputArea session_id=session_id />
        </div>
    }
}
