//! The interactive display facade every scenario talks to.
//!
//! Scenarios never touch the terminal directly: they go through the
//! [`Console`] handed to them by their [`ScenarioContext`](crate::context::ScenarioContext).
//! The terminal implementation lives in the CLI crate, [`ScriptedConsole`]
//! replays canned input for tests and headless runs.

pub mod scripted;

pub use scripted::{ConsoleEvent, ScriptedConsole};

use serde::Serialize;

use crate::error::{Error, Result};

/// Interactive input and output used by the scenario engine.
///
/// Methods take `&self`: the console is shared by the whole scenario tree,
/// implementations keep whatever state they need behind interior mutability.
pub trait Console {
    /// Clears the display.
    fn clear(&self) -> Result<()>;

    /// Writes a scenario title prominently.
    fn write_title(&self, title: &str) -> Result<()>;

    /// Writes a horizontal separator under a title.
    fn write_separator(&self) -> Result<()>;

    /// Writes a plain line of text.
    fn write_line(&self, line: &str) -> Result<()>;

    /// Shows a progress indicator until [`Console::stop_progress`] is called.
    fn start_progress(&self, label: &str) -> Result<()>;

    /// Removes the progress indicator. Does nothing if none is shown.
    fn stop_progress(&self) -> Result<()>;

    /// Reports a failure.
    fn error(&self, message: &str) -> Result<()>;

    /// Reports a success.
    fn success(&self, message: &str) -> Result<()>;

    /// Renders a structured value under a caption.
    fn write_object(&self, value: &serde_yaml::Value, caption: &str) -> Result<()>;

    /// Reads one line of input after showing `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stdio`] when input is exhausted.
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// Lets the user pick one of `options`.
    ///
    /// Returns `None` when the user backs out without choosing.
    fn choose(&self, title: &str, options: &[String]) -> Result<Option<usize>>;

    /// Reads a non-empty, trimmed string, reporting `error_message` and
    /// asking again after every empty submission.
    fn read_non_empty_string(&self, prompt: &str, error_message: &str) -> Result<String> {
        loop {
            let input = self.read_line(prompt)?;
            let value = input.trim();

            if !value.is_empty() {
                return Ok(value.to_string());
            }

            self.error(error_message)?;
        }
    }

    /// Asks a yes/no question. Anything but `y` or `yes` is a no.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.read_line(&format!("{prompt} [y/N]"))?;
        let answer = answer.trim().to_lowercase();

        Ok(answer == "y" || answer == "yes")
    }
}

/// Converts `value` to a YAML tree and hands it to [`Console::write_object`].
///
/// # Errors
///
/// Returns [`Error::Render`] if the value cannot be represented as YAML.
pub fn render_object<T: Serialize + ?Sized>(
    console: &dyn Console,
    value: &T,
    caption: &str,
) -> Result<()> {
    let value =
        serde_yaml::to_value(value).map_err(|e| Error::Render(caption.to_string(), e))?;

    console.write_object(&value, caption)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_read_non_empty_string_reprompts_on_empty_input() {
        let console = ScriptedConsole::new().with_inputs(["", "   ", "", "value"]);

        let value = console
            .read_non_empty_string("Enter a value", "The value can't be empty")
            .unwrap();

        assert_eq!(value, "value");
        assert_eq!(console.prompt_count(), 4);
        assert_eq!(
            console.errors(),
            vec!["The value can't be empty".to_string(); 3]
        );
    }

    #[test]
    fn test_read_non_empty_string_trims_value() {
        let console = ScriptedConsole::new().with_inputs(["  cust-1  "]);
        let value = console.read_non_empty_string("Enter", "Empty").unwrap();
        assert_eq!(value, "cust-1");
        assert!(console.errors().is_empty());
    }

    #[test]
    fn test_read_non_empty_string_fails_when_input_exhausted() {
        let console = ScriptedConsole::new().with_inputs([""]);
        let result = console.read_non_empty_string("Enter", "Empty");
        assert!(matches!(result, Err(Error::Stdio(_))));
    }

    #[test]
    fn test_confirm_answers() {
        let console = ScriptedConsole::new().with_inputs(["y", "YES", "n", "", "maybe"]);
        assert!(console.confirm("Again?").unwrap());
        assert!(console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
    }

    #[test]
    fn test_render_object_converts_to_yaml() {
        let console = ScriptedConsole::new();
        let sample = Sample {
            id: "sub-1".to_string(),
            quantity: 3,
        };

        render_object(&console, &sample, "Subscription").unwrap();

        let objects = console.objects();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].0, "Subscription");
        assert_eq!(objects[0].1["id"], serde_yaml::Value::from("sub-1"));
        assert_eq!(objects[0].1["quantity"], serde_yaml::Value::from(3u32));
    }
}
