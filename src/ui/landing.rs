//! Marketing landing page sections.

use leptos::prelude::*;
use rand::Rng;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, Card, CardContent, DownloadIcon};

/// Number of decorative background dots.
const DOT_COUNT: usize = 20;

/// Full landing page content.
///
/// Static marketing copy plus the model-evolution chart container. The
/// chart itself is drawn client-side from `/api/charts/model-evolution`;
/// see `static/main.js`.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <FloatingDots />
        <Hero />
        <EvolutionSection />
        <FeatureGrid />
        <CompatibilitySection />
    }
}

/// Decorative background dots with randomized positions and delays.
///
/// Purely cosmetic; positions are rolled fresh on every render and carry no
/// semantic meaning.
#[component]
fn FloatingDots() -> impl IntoView {
    let mut rng = rand::thread_rng();
    let dots: Vec<String> = (0..DOT_COUNT)
        .map(|_| {
            let left: f64 = rng.gen_range(0.0..100.0);
            let top: f64 = rng.gen_range(0.0..100.0);
            let delay: f64 = rng.gen_range(0.0..5.0);
            format!("left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s")
        })
        .collect();

    view! {
        <div class="floating-dots" aria-hidden="true">
            {dots
                .into_iter()
                .map(|style| view! { <div class="dot" style=style></div> })
                .collect_view()}
        </div>
    }
}

/// Hero section with headline, call-to-action buttons, and stats.
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero py-16">
            <div class="grid gap-10 md:grid-cols-2 items-center">
                <div class="hero-text space-y-6">
                    <h1 class="text-4xl font-bold leading-tight">
                        <span class="block">"Your Computer,"</span>
                        <span class="hero-gradient-text block">"Smarter"</span>
                    </h1>
                    <p class="text-lg text-textMuted">
                        "Automate tasks and optimize your system with advanced AI and intelligent features"
                    </p>
                    <div class="flex gap-3">
                        <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>
                            "Install Now"
                            <DownloadIcon />
                        </Button>
                        <Button variant=ButtonVariant::Ghost size=ButtonSize::Lg>
                            "Watch Demo"
                        </Button>
                    </div>

                    <div class="stats grid grid-cols-3 gap-6 pt-6">
                        <Stat value="98%" label="Satisfaction" />
                        <Stat value="24/7" label="Support" />
                        <Stat value="+50k" label="Users" />
                    </div>
                </div>

                <div class="hero-image relative">
                    <div class="animate-pulse"></div>
                    <img src="/static/hero-image.svg" alt="AI interface" />
                </div>
            </div>
        </section>
    }
}

/// A single stat in the hero row.
#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="stat-value text-2xl font-bold">{value}</div>
            <div class="stat-label text-sm text-textMuted">{label}</div>
        </div>
    }
}

/// Model evolution section with the chart container.
#[component]
fn EvolutionSection() -> impl IntoView {
    view! {
        <section class="evolution py-16">
            <SectionHeader
                title="Constant Evolution"
                description="Track the progress of our AI models across different capabilities"
            />
            <div id="model-evolution" class="chart-container h-96"></div>
        </section>
    }
}

/// Feature cards describing what Omega AI does.
#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="features py-16">
            <SectionHeader
                title="What Omega AI does on your computer"
                description="A complete automation and optimization platform for your system"
            />

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <FeatureCard
                    icon="📁"
                    title="Organizes Files"
                    description="Automatically classifies and organizes your documents intelligently"
                />
                <FeatureCard
                    icon="⚡"
                    title="Optimizes Performance"
                    description="Monitors and improves your system's performance in real time"
                />
                <FeatureCard
                    icon="🛡️"
                    title="Smart Backup"
                    description="Identifies and protects your important files automatically"
                />
                <FeatureCard
                    icon="🤖"
                    title="Virtual Assistant"
                    description="Helps with daily tasks through intelligent automation"
                />
            </div>
        </section>
    }
}

/// Supported operating systems.
#[component]
fn CompatibilitySection() -> impl IntoView {
    view! {
        <section class="compatibility py-16">
            <SectionHeader
                title="Compatible with every system"
                description="Works seamlessly on any operating system"
            />

            <div class="grid gap-4 md:grid-cols-3">
                <OsCard icon="🪟" name="Windows 10/11" />
                <OsCard icon="🍎" name="macOS 12+" />
                <OsCard icon="🐧" name="Ubuntu 20.04+" />
            </div>
        </section>
    }
}

/// Centered section title and description.
#[component]
fn SectionHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="section-header text-center mb-10 space-y-2">
            <h2 class="text-3xl font-bold">{title}</h2>
            <p class="text-textMuted">{description}</p>
        </div>
    }
}

/// Feature card for the landing page grid.
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="pt-6 space-y-2">
                <div class="feature-icon text-2xl">{icon}</div>
                <h3 class="font-semibold">{title}</h3>
                <p class="text-sm text-textMuted">{description}</p>
            </CardContent>
        </Card>
    }
}

/// Operating system compatibility card.
#[component]
fn OsCard(icon: &'static str, name: &'static str) -> impl IntoView {
    view! {
        <Card class="text-center">
            <CardContent class="pt-6 space-y-2">
                <div class="os-icon text-3xl">{icon}</div>
                <span class="text-sm">{name}</span>
            </CardContent>
        </Card>
    }
}
