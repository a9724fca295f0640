//! Scenarios grouping other scenarios.

use std::rc::Rc;

use log::debug;

use crate::context::ScenarioContext;
use crate::error::{Error, Result};
use crate::runner;
use crate::scenario::{Scenario, ScenarioBase};
use crate::strategy::ExecutionStrategy;

/// How an [`AggregateScenario`] picks the child to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Let the user choose one child from a menu.
    #[default]
    Menu,
    /// Run every child in order.
    Sequential,
}

/// A named, fixed group of child scenarios.
pub struct AggregateScenario {
    base: ScenarioBase,
    children: Vec<Box<dyn Scenario>>,
    selection: Selection,
}

impl AggregateScenario {
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`] for a blank title and
    /// [`Error::EmptyAggregate`] when `children` is empty.
    pub fn new(
        title: impl Into<String>,
        context: Rc<ScenarioContext>,
        children: Vec<Box<dyn Scenario>>,
    ) -> Result<Self> {
        let base = ScenarioBase::new(title, context)?;

        if children.is_empty() {
            return Err(Error::EmptyAggregate(base.title().to_string()));
        }

        Ok(Self {
            base,
            children,
            selection: Selection::Menu,
        })
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Rc<dyn ExecutionStrategy>) -> Self {
        self.base = self.base.with_strategy(strategy);
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn children(&self) -> &[Box<dyn Scenario>] {
        &self.children
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn child_titles(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|child| child.title().to_string())
            .collect()
    }
}

impl Scenario for AggregateScenario {
    fn base(&self) -> &ScenarioBase {
        &self.base
    }

    fn run_scenario(&self) -> Result<()> {
        match self.selection {
            Selection::Sequential => {
                for child in &self.children {
                    runner::run(child.as_ref());
                }
            }
            Selection::Menu => {
                let console = self.context().console();
                let Some(index) = console.choose(self.title(), &self.child_titles())? else {
                    debug!("Backed out of `{}`", self.title());
                    return Ok(());
                };

                let child = self.children.get(index).ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "`{}` has no scenario number {}",
                        self.title(),
                        index + 1
                    ))
                })?;

                runner::run(child.as_ref());
            }
        }

        Ok(())
    }
}
