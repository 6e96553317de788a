//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables' supporting controls, dialogs
//! and charts, reading shared state from Leptos context providers.

pub mod charts;
pub mod confirm_dialog;
pub mod dashboard_header;
pub mod loader;
pub mod page_header;
pub mod pagination_bar;
pub mod record_modal;
pub mod sidebar;
pub mod stat_card;
pub mod toast_host;
