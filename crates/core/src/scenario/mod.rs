//! Runnable scenarios.
//!
//! Every scenario carries a [`ScenarioBase`] (title, shared context and
//! execution strategy) and implements [`Scenario::run_scenario`]. Leaves wrap
//! a closure doing the actual work, [`AggregateScenario`] groups children
//! behind a menu.

pub mod aggregate;

pub use aggregate::{AggregateScenario, Selection};

use std::rc::Rc;

use crate::context::ScenarioContext;
use crate::error::{Error, Result};
use crate::runner;
use crate::strategy::{ExecutionStrategy, PromptStrategy};

/// State shared by every kind of scenario.
pub struct ScenarioBase {
    title: String,
    context: Rc<ScenarioContext>,
    strategy: Rc<dyn ExecutionStrategy>,
}

impl ScenarioBase {
    /// Creates a base that asks the user whether to repeat after each run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`] if `title` is empty or whitespace only.
    pub fn new(title: impl Into<String>, context: Rc<ScenarioContext>) -> Result<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        Ok(Self {
            title,
            context,
            strategy: Rc::new(PromptStrategy),
        })
    }

    /// Replaces the execution strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Rc<dyn ExecutionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    #[must_use]
    pub fn strategy(&self) -> &dyn ExecutionStrategy {
        self.strategy.as_ref()
    }
}

/// A titled unit of work the runner can execute.
pub trait Scenario {
    fn base(&self) -> &ScenarioBase;

    /// The scenario's own logic. Errors are reported by the runner and never
    /// escape [`Scenario::run`].
    fn run_scenario(&self) -> Result<()>;

    fn title(&self) -> &str {
        self.base().title()
    }

    fn context(&self) -> &ScenarioContext {
        self.base().context()
    }

    /// Runs the scenario until its strategy reports it complete.
    fn run(&self)
    where
        Self: Sized,
    {
        runner::run(self);
    }
}

type Action = Box<dyn Fn(&ScenarioContext) -> Result<()>>;

/// A scenario doing actual work through the partner operations.
pub struct LeafScenario {
    base: ScenarioBase,
    action: Action,
}

impl LeafScenario {
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`] if `title` is empty or whitespace only.
    pub fn new<F>(title: impl Into<String>, context: Rc<ScenarioContext>, action: F) -> Result<Self>
    where
        F: Fn(&ScenarioContext) -> Result<()> + 'static,
    {
        Ok(Self {
            base: ScenarioBase::new(title, context)?,
            action: Box::new(action),
        })
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Rc<dyn ExecutionStrategy>) -> Self {
        self.base = self.base.with_strategy(strategy);
        self
    }
}

impl Scenario for LeafScenario {
    fn base(&self) -> &ScenarioBase {
        &self.base
    }

    fn run_scenario(&self) -> Result<()> {
        (self.action)(self.base.context())
    }
}
