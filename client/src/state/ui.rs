//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and service data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard chrome toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile sidebar overlay visibility.
    pub sidebar_open: bool,
}
