//! Document shell with header and footer.

use leptos::prelude::*;

use crate::ui::components::{ArrowRightIcon, Button, ButtonVariant, SparklesIcon};

/// Full-page document shell.
///
/// Wraps page content with the html head, navigation header, and footer.
/// HTMX and Highcharts load from their CDNs; app assets are served from
/// `/static`.
#[component]
pub fn Shell(
    /// Page title, shown as "{title} - Omega AI".
    #[prop(default = "Omega AI")]
    title: &'static str,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let full_title = format!("{title} - Omega AI");

    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Automate tasks and optimize your system with advanced AI" />

                <title>{full_title}</title>

                <script src="https://unpkg.com/htmx.org@2.0.4"></script>
                <script src="https://code.highcharts.com/highcharts.js"></script>

                <script defer src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <div id="app-shell" class="flex flex-col min-h-screen">
                    <Header />
                    <main id="app" class="flex-1 container mx-auto px-4 py-6 max-w-5xl">
                        {children()}
                    </main>
                    <Footer />
                </div>
            </body>
        </html>
    }
}

/// Navigation header.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b border-panelBorder bg-background/95 backdrop-blur">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-5xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <SparklesIcon class="h-5 w-5 text-primary" />
                    <span class="text-lg">"Omega AI"</span>
                </a>

                <nav class="flex items-center gap-4">
                    <a href="/" class="text-sm text-textMuted hover:text-textPrimary transition-colors">
                        "Home"
                    </a>
                    <a href="/chat" class="text-sm text-textMuted hover:text-textPrimary transition-colors">
                        "Assistant"
                    </a>
                    <Button variant=ButtonVariant::Ghost>"Login"</Button>
                    <Button variant=ButtonVariant::Primary>
                        "Get Started"
                        <ArrowRightIcon />
                    </Button>
                </nav>
            </div>
        </header>
    }
}

/// Footer component.
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-panelBorder py-4">
            <div class="container mx-auto px-4 max-w-5xl">
                <p class="text-xs text-textMuted text-center">
                    "Omega AI - your computer, smarter"
                </p>
            </div>
        </footer>
    }
}
