//! A [`Console`] that replays canned input and records everything written.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::console::Console;
use crate::error::{Error, Result};

/// One call made against a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    Clear,
    Title(String),
    Separator,
    Line(String),
    ProgressStarted(String),
    ProgressStopped,
    Error(String),
    Success(String),
    Object {
        caption: String,
        value: serde_yaml::Value,
    },
    Prompt(String),
    Menu {
        title: String,
        options: Vec<String>,
    },
}

/// Console double driven by scripted input lines and menu choices.
///
/// Reading past the scripted input fails with [`Error::Stdio`], the same way
/// a closed stdin does. Choosing past the scripted choices backs out of the
/// menu.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: RefCell<VecDeque<String>>,
    choices: RefCell<VecDeque<Option<usize>>>,
    events: RefCell<Vec<ConsoleEvent>>,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues lines returned by [`Console::read_line`], in order.
    #[must_use]
    pub fn with_inputs<I, S>(self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs
            .borrow_mut()
            .extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Queues menu selections returned by [`Console::choose`], in order.
    #[must_use]
    pub fn with_choices<I>(self, choices: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        self.choices.borrow_mut().extend(choices);
        self
    }

    #[must_use]
    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.borrow().clone()
    }

    /// Number of times input was read.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, ConsoleEvent::Prompt(_)))
            .count()
    }

    /// Number of menus shown.
    #[must_use]
    pub fn menu_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, ConsoleEvent::Menu { .. }))
            .count()
    }

    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.collect(|event| match event {
            ConsoleEvent::Title(title) => Some(title.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.collect(|event| match event {
            ConsoleEvent::Line(line) => Some(line.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.collect(|event| match event {
            ConsoleEvent::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.collect(|event| match event {
            ConsoleEvent::Success(message) => Some(message.clone()),
            _ => None,
        })
    }

    /// Rendered objects as `(caption, value)` pairs.
    #[must_use]
    pub fn objects(&self) -> Vec<(String, serde_yaml::Value)> {
        self.collect(|event| match event {
            ConsoleEvent::Object { caption, value } => Some((caption.clone(), value.clone())),
            _ => None,
        })
    }

    /// Scripted input lines not consumed yet.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.borrow().len()
    }

    fn collect<T>(&self, pick: impl Fn(&ConsoleEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }

    fn record(&self, event: ConsoleEvent) -> Result<()> {
        self.events.borrow_mut().push(event);
        Ok(())
    }
}

impl Console for ScriptedConsole {
    fn clear(&self) -> Result<()> {
        self.record(ConsoleEvent::Clear)
    }

    fn write_title(&self, title: &str) -> Result<()> {
        self.record(ConsoleEvent::Title(title.to_string()))
    }

    fn write_separator(&self) -> Result<()> {
        self.record(ConsoleEvent::Separator)
    }

    fn write_line(&self, line: &str) -> Result<()> {
        self.record(ConsoleEvent::Line(line.to_string()))
    }

    fn start_progress(&self, label: &str) -> Result<()> {
        self.record(ConsoleEvent::ProgressStarted(label.to_string()))
    }

    fn stop_progress(&self) -> Result<()> {
        self.record(ConsoleEvent::ProgressStopped)
    }

    fn error(&self, message: &str) -> Result<()> {
        self.record(ConsoleEvent::Error(message.to_string()))
    }

    fn success(&self, message: &str) -> Result<()> {
        self.record(ConsoleEvent::Success(message.to_string()))
    }

    fn write_object(&self, value: &serde_yaml::Value, caption: &str) -> Result<()> {
        self.record(ConsoleEvent::Object {
            caption: caption.to_string(),
            value: value.clone(),
        })
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        self.record(ConsoleEvent::Prompt(prompt.to_string()))?;

        self.inputs.borrow_mut().pop_front().ok_or_else(|| {
            Error::Stdio(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted input left",
            ))
        })
    }

    fn choose(&self, title: &str, options: &[String]) -> Result<Option<usize>> {
        self.record(ConsoleEvent::Menu {
            title: title.to_string(),
            options: options.to_vec(),
        })?;

        Ok(self.choices.borrow_mut().pop_front().flatten())
    }
}
