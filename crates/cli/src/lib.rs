//! Scenario Deck CLI Library
//!
//! This crate provides the terminal front end for scenario-deck: a console
//! that draws menus and colored output, the partner API samples, and the
//! catalog arranging those samples into one tree of scenarios.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`terminal`]: The [`Console`](scenario_deck_core::console::Console) used interactively
//! - [`menu`]: Full-screen menu with fuzzy filtering
//! - [`samples`]: One function per sample, grouped by API area
//! - [`catalog`]: Wraps the samples into scenarios
//!
//! # Examples
//!
//! ```bash
//! # Interactive mode - pick samples from menus
//! sdeck
//!
//! # Use another settings file
//! sdeck --settings ./settings.yml
//!
//! # Run every sample once, in order
//! sdeck --batch
//! ```

pub mod catalog;
pub mod cli_args;
pub mod menu;
pub mod samples;
pub mod terminal;
