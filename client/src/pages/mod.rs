//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, filters, modal state)
//! and delegates rendering details to `components`. `dashboard` is the
//! authenticated layout the four dashboard pages render inside.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod statistics;
pub mod sugar_history;
pub mod users;
