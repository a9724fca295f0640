//! The collaborators shared by every scenario in a tree.

use std::rc::Rc;

use crate::config::ScenarioSettings;
use crate::console::Console;
use crate::operations::PartnerOperations;
use crate::resolver::ValueResolver;

/// Console, settings and partner operations, shared read-only by the whole
/// scenario tree.
pub struct ScenarioContext {
    console: Rc<dyn Console>,
    settings: ScenarioSettings,
    operations: Rc<dyn PartnerOperations>,
}

impl ScenarioContext {
    pub fn new(
        console: Rc<dyn Console>,
        settings: ScenarioSettings,
        operations: Rc<dyn PartnerOperations>,
    ) -> Self {
        Self {
            console,
            settings,
            operations,
        }
    }

    #[must_use]
    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &ScenarioSettings {
        &self.settings
    }

    #[must_use]
    pub fn operations(&self) -> &dyn PartnerOperations {
        self.operations.as_ref()
    }

    /// A resolver preferring configured values over prompts.
    #[must_use]
    pub fn resolver(&self) -> ValueResolver<'_> {
        ValueResolver::new(self)
    }
}
