//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `ui`) and provided as
//! `RwSignal`s through Leptos context, so components depend on small
//! focused models.

pub mod auth;
pub mod toast;
pub mod ui;
