//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Badge, BadgeVariant, SparklesIcon};

/// Chat header with the Omega brand mark and service status.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(default = "Omega Assistant")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-panelBorder bg-panel/50 backdrop-blur-sm">
            <div class="flex items-center gap-2">
                <SparklesIcon class="h-5 w-5 text-primary" />
                <div class="flex flex-col">
                    <h2 class="font-semibold text-lg leading-tight">{title}</h2>
                    <span class="text-xs text-textMuted">"Powered by Omega models"</span>
                </div>
            </div>

            <Badge variant=BadgeVariant::Secondary class="gap-1.5">
                <span class="status-dot" aria-hidden="true"></span>
                <span class="text-xs">"Online"</span>
            </Badge>
        </header>
    }
}
