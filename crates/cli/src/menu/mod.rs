//! Full-screen menu for picking a scenario.
//!
//! # User Interface
//!
//! The menu supports:
//! - Arrow keys, vim-style (j/k) navigation or the mouse wheel
//! - Enter or a click to run the highlighted scenario
//! - '/' to start filtering (fuzzy search, or by number)
//! - 'q', Escape or Ctrl-C to go back

pub mod types;
pub mod ui;

pub use types::MenuChoice;
pub use ui::prompt_for_menu_choice;
