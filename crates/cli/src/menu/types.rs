//! Type definitions for the scenario menu and its UI state.

/// What the user did with a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Index into the options the menu was shown with.
    Index(usize),
    /// Left the menu without choosing.
    Back,
}

/// Direction to cycle through options in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the option list when there are more
/// options than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the menu.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position of the highlighted row among the displayed options
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the user is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
}

impl UiState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                // Header and filter line
                height: height.saturating_sub(2),
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}
