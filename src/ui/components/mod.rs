//! Reusable UI components.
//!
//! A small set of composable components in the ShadCN style, rendered via
//! Leptos SSR. Only the pieces the Omega pages actually use.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Badge`]: Status badge/tag
//! - [`icons`]: SVG icon components

mod badge;
mod button;
mod card;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
