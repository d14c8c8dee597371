//! Transcript rendering.

use leptos::prelude::*;

use crate::session::ChatMessage;

/// Render the transcript as a pure function of the message list.
///
/// User entries are right-aligned with the primary treatment, replies
/// left-aligned with the muted one. Entries appear strictly in insertion
/// order.
#[component]
pub fn TranscriptView(
    /// Messages in display order.
    messages: Vec<ChatMessage>,
) -> impl IntoView {
    messages
        .into_iter()
        .map(|msg| {
            let (align, bubble, role) = if msg.is_user {
                ("text-right", "bg-primary text-white", "user")
            } else {
                ("text-left", "bg-panelBorder text-textPrimary", "bot")
            };

            view! {
                <div class=format!("mb-4 {align}") data-role=role>
                    <div class=format!("inline-block px-4 py-3 rounded-2xl max-w-[80%] text-left {bubble}")>
                        {msg.text}
                    </div>
                </div>
            }
        })
        .collect_view()
}
