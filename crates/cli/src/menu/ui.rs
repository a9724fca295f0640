use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    DisableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, execute, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, MenuChoice, UiState};
use scenario_deck_core::error::Result;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

fn redraw_ui(
    title: &str,
    ui_state: &UiState,
    indexes_to_display: &[usize],
    options: &[String],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(title, ui_state, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching scenarios!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_options_with_selection(ui_state, options, indexes_to_display)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Shows `options` full screen and waits for the user to pick one or back out.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched to raw mode or read.
pub fn prompt_for_menu_choice(title: &str, options: &[String]) -> Result<MenuChoice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(event::EnableMouseCapture)?;

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, height);
    let mut indexes_to_display = filter_displayed_indexes(options, &ui_state.filter_text);
    let mut down_row: Option<u16> = None;

    redraw_ui(title, &ui_state, &indexes_to_display, options)?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let mut new_ui_state: Option<UiState> = None;
        let mut index_change_direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Mouse(MouseEvent {
                kind,
                row,
                modifiers,
                ..
            }) if modifiers == KeyModifiers::NONE => match kind {
                MouseEventKind::Down(MouseButton::Left) => down_row = Some(row),
                MouseEventKind::Up(MouseButton::Left) => {
                    let clicked = down_row
                        .take()
                        .and_then(|down_row| clicked_option(down_row, &ui_state, &indexes_to_display));

                    if let Some(option_index) = clicked {
                        return Ok(MenuChoice::Index(option_index));
                    }
                }
                MouseEventKind::ScrollDown => index_change_direction = Some(Down),
                MouseEventKind::ScrollUp => index_change_direction = Some(Up),
                _ => {}
            },
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let (menu_choice, new_state, new_direction) =
                    handle_key_event(key_event, &ui_state, &indexes_to_display)?;

                if let Some(choice) = menu_choice {
                    debug!("Menu `{title}` closed with {choice:?}");
                    return Ok(choice);
                }

                new_ui_state = new_state;
                index_change_direction = new_direction;
            }
            Event::Resize(width, height) => {
                new_ui_state = Some(handle_resize(
                    width,
                    height,
                    &ui_state,
                    indexes_to_display.len(),
                ));
            }
            _ => {}
        }

        if let Some(direction) = index_change_direction {
            let current = new_ui_state.as_ref().unwrap_or(&ui_state);
            new_ui_state = Some(move_selected_index(
                current,
                indexes_to_display.len(),
                direction,
            ));
        }

        if let Some(mut state) = new_ui_state {
            if state == ui_state {
                continue;
            }

            if state.filter_text != ui_state.filter_text {
                indexes_to_display = filter_displayed_indexes(options, &state.filter_text);
                state.selected_index = 0;
                state.viewport.offset = 0;
            }

            redraw_ui(title, &state, &indexes_to_display, options)?;
            ui_state = state;
        }
    }
}

/// Maps a clicked terminal row to the option displayed there.
fn clicked_option(row: u16, ui_state: &UiState, indexes_to_display: &[usize]) -> Option<usize> {
    if row == 0 {
        // Click on header
        return None;
    }

    let position = (row - 1) as usize + ui_state.viewport.offset;

    if position >= ui_state.viewport.offset + ui_state.viewport.height as usize {
        return None;
    }

    indexes_to_display.get(position).copied()
}

type KeyOutcome = (Option<MenuChoice>, Option<UiState>, Option<CycleDirection>);

/// Handle keyboard events in the menu
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> Result<KeyOutcome> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Ok((Some(MenuChoice::Back), None, None))
        }
        KeyCode::Up => Ok((None, None, Some(Up))),
        KeyCode::Down => Ok((None, None, Some(Down))),
        KeyCode::Enter => {
            if let Some(option_index) = indexes_to_display.get(ui_state.selected_index) {
                return Ok((Some(MenuChoice::Index(*option_index)), None, None));
            }

            execute!(stdout(), Print("\x07"))?;
            Ok((None, None, None))
        }
        KeyCode::Backspace if !ui_state.filter_text.is_empty() => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.pop();
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.push(c);
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            updated_state.filter_text = String::new();
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Char('k') => Ok((None, None, Some(Up))),
        KeyCode::Char('j') => Ok((None, None, Some(Down))),
        KeyCode::Char('q') | KeyCode::Esc => Ok((Some(MenuChoice::Back), None, None)),
        _ => Ok((None, None, None)),
    }
}

/// Handle window resize events
fn handle_resize(width: u16, height: u16, ui_state: &UiState, displayed_count: usize) -> UiState {
    let new_height = height.saturating_sub(2);
    let mut ui_state = ui_state.clone();
    let mut offset = ui_state.viewport.offset;

    match new_height.cmp(&ui_state.viewport.height) {
        // If growing taller, try to show more items above current selection
        std::cmp::Ordering::Greater if offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            offset = offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if new_height > 0 && ui_state.selected_index >= offset + new_height as usize =>
        {
            offset = ui_state.selected_index + 1 - new_height as usize;

            if offset + new_height as usize > displayed_count {
                offset = displayed_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport.width = width;
    ui_state.viewport.height = new_height;
    ui_state.viewport.offset = offset;
    ui_state
}

/// Print the header for the menu
fn print_header(title: &str, ui_state: &UiState, displayed_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);

    let instructions = if ui_state.is_filtering {
        format!("{title}   |   <esc>: Stop Filtering")
    } else {
        format!(
            "{title}   |   /: Filter   |   {}/{}   |   q: Back",
            pad_to_width_of(ui_state.selected_index + 1, displayed_count),
            displayed_count
        )
    };

    let right_padding = " ".repeat(
        width
            .saturating_sub(left_padding_size)
            .saturating_sub(instructions.chars().count()),
    );

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = max_number.to_string().len();
    format!("{:>width$}", value.to_string())
}

/// Formats one menu row as `[n] title`, numbered from 1.
fn format_option_row(option_index: usize, option_count: usize, option: &str) -> String {
    let index_as_string = pad_to_width_of(option_index + 1, option_count);
    format!("[{index_as_string}] {option}")
}

/// Clear and write an option row in the menu
fn clear_and_write_option_row(
    row: u16,
    content: &str,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let padding = " ".repeat((terminal_width as usize).saturating_sub(content.chars().count()));

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else {
        queue!(
            stdout,
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset)
        )?;
    }

    queue!(
        stdout,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print all visible options with the selected one highlighted
fn print_options_with_selection(
    ui_state: &UiState,
    options: &[String],
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;

    let visible_options = indexes_to_display
        .iter()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (i, option_index) in visible_options.enumerate() {
        let is_selected = i + viewport.offset == ui_state.selected_index;
        let option = options.get(*option_index).map_or("", String::as_str);
        let content = format_option_row(*option_index, options.len(), option);

        clear_and_write_option_row(i as u16 + 1, &content, is_selected, viewport.width)?;
        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    Ok(())
}

/// Move the selected index in the given direction, wrapping at both ends
fn move_selected_index(
    ui_state: &UiState,
    displayed_count: usize,
    direction: CycleDirection,
) -> UiState {
    if displayed_count == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let height = (ui_state.viewport.height as usize).max(1);

    match direction {
        Up => {
            if new_index == 0 {
                new_index = displayed_count - 1;
                ui_state.viewport.offset = new_index.saturating_sub(height - 1);
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % displayed_count;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = new_index + 1 - height;
            }
        }
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Filter the displayed option indexes by number or fuzzy title match
fn filter_displayed_indexes(options: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let predicate_index = predicate.parse::<usize>().ok();

    options
        .iter()
        .enumerate()
        .filter_map(|(i, option)| {
            if let Some(pred_idx) = predicate_index {
                // Index-based filtering on the 1-based number shown
                (i + 1)
                    .to_string()
                    .contains(&pred_idx.to_string())
                    .then_some(i)
            } else {
                // Fuzzy title filtering
                matcher.fuzzy_match(option, predicate).map(|_| i)
            }
        })
        .collect()
}
