//! The [`Console`] used when running interactively in a terminal.

use std::cell::Cell;
use std::io::{self, stdin, stdout, Write};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::style::Color::{DarkCyan, DarkYellow, Green, Red};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use log::debug;

use crate::menu::{prompt_for_menu_choice, MenuChoice};
use scenario_deck_core::console::Console;
use scenario_deck_core::error::{Error, Result};

const SEPARATOR_WIDTH: usize = 80;

/// Colored stdout output, line input from stdin and a full-screen menu.
#[derive(Default)]
pub struct TerminalConsole {
    progress_shown: Cell<bool>,
}

impl TerminalConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_colored(&self, color: Color, text: &str) -> Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )?;

        Ok(())
    }
}

/// Indents every line of a rendered YAML document below its caption.
fn indent_document(document: &str) -> String {
    document
        .lines()
        .filter(|line| *line != "---")
        .map(|line| format!("  {line}\n"))
        .collect()
}

impl Console for TerminalConsole {
    fn clear(&self) -> Result<()> {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_title(&self, title: &str) -> Result<()> {
        self.write_colored(DarkCyan, title)
    }

    fn write_separator(&self) -> Result<()> {
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        Ok(())
    }

    fn write_line(&self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }

    fn start_progress(&self, label: &str) -> Result<()> {
        self.stop_progress()?;

        execute!(
            stdout(),
            SetForegroundColor(DarkYellow),
            Print(format!("{label}...")),
            ResetColor
        )?;
        self.progress_shown.set(true);

        Ok(())
    }

    fn stop_progress(&self) -> Result<()> {
        if self.progress_shown.replace(false) {
            execute!(stdout(), MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        }

        Ok(())
    }

    fn error(&self, message: &str) -> Result<()> {
        self.write_colored(Red, message)
    }

    fn success(&self, message: &str) -> Result<()> {
        self.write_colored(Green, message)
    }

    fn write_object(&self, value: &serde_yaml::Value, caption: &str) -> Result<()> {
        let document =
            serde_yaml::to_string(value).map_err(|e| Error::Render(caption.to_string(), e))?;
        let mut stdout = stdout();

        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("{caption}:\n")),
            SetAttribute(Attribute::Reset),
            Print(indent_document(&document))
        )?;
        stdout.flush()?;

        Ok(())
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        print!("{prompt}: ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(Error::Stdio(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input was closed",
            )));
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn choose(&self, title: &str, options: &[String]) -> Result<Option<usize>> {
        self.stop_progress()?;

        match prompt_for_menu_choice(title, options)? {
            MenuChoice::Index(index) => {
                debug!("Chose `{}` in `{title}`", options.get(index).map_or("", String::as_str));
                Ok(Some(index))
            }
            MenuChoice::Back => Ok(None),
        }
    }
}
