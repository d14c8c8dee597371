//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, SendIcon};

/// Chat message input area with HTMX form submission.
///
/// The response fragment replaces the transcript contents; the field itself
/// is cleared after every request by the `htmx:afterRequest` listener in
/// `static/main.js`, success or failure alike.
#[component]
pub fn ChatInputArea(
    /// Session ID for the transcript.
    #[prop(into)]
    session_id: String,
) -> impl IntoView {
    view! {
        <div class="border-t border-panelBorder p-4 bg-panel/50 backdrop-blur-sm">
            <form
                class="flex gap-2"
                hx-post="/chat/send"
                hx-target="#transcript"
                hx-swap="innerHTML"
            >
                <input type="hidden" name="session_id" value=session_id />

                <input
                    type="text"
                    name="message"
                    placeholder="Type your message..."
                    autocomplete="off"
                    class="flex-1 h-11 px-4 rounded-xl border border-panelBorder bg-background \
                           text-textPrimary placeholder:text-textMuted \
                           focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent"
                />

                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    button_type="submit"
                    class="shrink-0 h-11 w-11 rounded-xl"
                >
                    <SendIcon class="h-5 w-5" />
                </Button>
            </form>

            <p class="text-xs text-textMuted mt-2 text-center">
                "Press Enter to send"
            </p>
        </div>
    }
}
