//! Scenario Deck Core Library
//!
//! This crate provides the engine behind scenario-deck, a menu-driven harness
//! that organizes demonstration scenarios against a partner commerce API into
//! a navigable tree and runs them one at a time.
//!
//! # Key Features
//!
//! - **Scenarios**: Leaf scenarios doing work and aggregates grouping them
//! - **Runner Loop**: Failure isolation and repeat decisions shared by every scenario
//! - **Execution Strategies**: Interactive "run again?" or single pass for batch runs
//! - **Value Resolution**: Configured identifiers take precedence over prompts
//! - **Console Facade**: All interaction goes through the [`console::Console`] trait
//! - **Sandbox**: An in-memory partner account for running every scenario offline
//!
//! # Examples
//!
//! Building and running a tiny tree with scripted input:
//!
//! ```
//! use std::rc::Rc;
//! use scenario_deck_core::config::ScenarioSettings;
//! use scenario_deck_core::console::ScriptedConsole;
//! use scenario_deck_core::context::ScenarioContext;
//! use scenario_deck_core::sandbox::SandboxPartner;
//! use scenario_deck_core::scenario::{AggregateScenario, LeafScenario, Scenario};
//! use scenario_deck_core::strategy::SinglePassStrategy;
//!
//! let console = Rc::new(ScriptedConsole::new().with_choices([Some(0)]));
//! let context = Rc::new(ScenarioContext::new(
//!     console.clone(),
//!     ScenarioSettings::default(),
//!     Rc::new(SandboxPartner::seeded()?),
//! ));
//!
//! let hello = LeafScenario::new("Say hello", context.clone(), |context| {
//!     context.console().success("Hello!")
//! })?
//! .with_strategy(Rc::new(SinglePassStrategy));
//!
//! let root = AggregateScenario::new("Samples", context, vec![Box::new(hello)])?
//!     .with_strategy(Rc::new(SinglePassStrategy));
//! root.run();
//!
//! assert_eq!(console.successes(), vec!["Hello!"]);
//! # Ok::<(), scenario_deck_core::error::Error>(())
//! ```

pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod file_handling;
pub mod models;
pub mod operations;
pub mod resolver;
pub mod runner;
pub mod sandbox;
pub mod scenario;
pub mod strategy;
