//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic (table pipeline, pagination, validation, chart geometry,
//! formatting) plus the thin browser glue for storage and auth redirects.

pub mod auth;
pub mod chart;
pub mod format;
pub mod pagination;
pub mod records;
pub mod storage;
pub mod validation;
