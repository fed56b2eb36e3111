//! Local UI chrome state (theme, mobile navigation).

/// UI state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}
