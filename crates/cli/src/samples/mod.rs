//! The sample scenarios, one module per area of the partner API.
//!
//! Every sample is a plain function over the [`ScenarioContext`]; the
//! [`catalog`](crate::catalog) wraps them into scenarios.

pub mod customers;
pub mod indirect;
pub mod invoices;
pub mod offers;
pub mod orders;
pub mod profiles;
pub mod service_requests;
pub mod subscriptions;
pub mod usage;

use serde::Serialize;

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::{Error, Result};
use scenario_deck_core::models::Page;

/// Runs `operation` with a progress indicator labelled `label`.
///
/// On failure the indicator is left to the runner, which stops it before
/// reporting the error.
pub(crate) fn with_progress<T>(
    context: &ScenarioContext,
    label: &str,
    operation: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let console = context.console();

    console.start_progress(label)?;
    let result = operation()?;
    console.stop_progress()?;

    Ok(result)
}

/// Runs `operation` under a progress indicator, then renders its result
/// under `caption`.
pub(crate) fn show<T: Serialize>(
    context: &ScenarioContext,
    label: &str,
    caption: &str,
    operation: impl FnOnce() -> Result<T>,
) -> Result<()> {
    let value = with_progress(context, label, operation)?;
    render_object(context.console(), &value, caption)
}

/// Walks a paged listing, asking before fetching each following page.
pub(crate) fn show_pages<T: Serialize>(
    context: &ScenarioContext,
    label: &str,
    caption: &str,
    page_size: usize,
    fetch_page: impl Fn(usize, usize) -> Result<Page<T>>,
) -> Result<()> {
    let console = context.console();
    let mut offset = 0;

    loop {
        let page = with_progress(context, label, || fetch_page(offset, page_size))?;

        if page.items.is_empty() {
            console.write_line(&format!("{caption}: none found."))?;
            return Ok(());
        }

        let page_caption = format!(
            "{caption} {}-{} of {}",
            page.offset + 1,
            page.offset + page.items.len(),
            page.total_count
        );
        render_object(console, &page.items, &page_caption)?;

        match page.next_offset() {
            Some(next_offset) if console.confirm("Fetch the next page?")? => offset = next_offset,
            _ => return Ok(()),
        }
    }
}

/// Offers `items` in a menu, each shown by `name`.
///
/// `None` means the user backed out. An index outside `items` is an error,
/// the same as for a scenario group's menu.
pub(crate) fn choose_item<'a, T>(
    context: &ScenarioContext,
    title: &str,
    items: &'a [T],
    name: impl Fn(&T) -> String,
) -> Result<Option<&'a T>> {
    let names: Vec<String> = items.iter().map(name).collect();

    let Some(index) = context.console().choose(title, &names)? else {
        return Ok(None);
    };

    items.get(index).map(Some).ok_or_else(|| {
        Error::InvalidInput(format!("`{title}` has no option number {}", index + 1))
    })
}

/// Reads a positive whole number, asking again until one is entered.
pub(crate) fn read_quantity(context: &ScenarioContext, prompt: &str) -> Result<u32> {
    let console = context.console();

    loop {
        let input = console.read_non_empty_string(prompt, "The quantity can't be empty")?;

        match input.parse::<u32>() {
            Ok(quantity) if quantity > 0 => return Ok(quantity),
            _ => console.error(&format!("`{input}` is not a positive whole number"))?,
        }
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::testing::context;
    use super::*;
    use scenario_deck_core::console::ScriptedConsole;

    #[test]
    fn test_show_pages_stops_when_declined() {
        let console = Rc::new(ScriptedConsole::new().with_inputs(["n"]));
        let context = context(&console);
        let items: Vec<u32> = (0..25).collect();

        show_pages(&context, "Listing", "Numbers", 10, |offset, size| {
            Ok(Page::slice(&items, offset, size))
        })
        .unwrap();

        let objects = console.objects();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].0, "Numbers 1-10 of 25");
    }

    #[test]
    fn test_show_pages_walks_every_page() {
        let console = Rc::new(ScriptedConsole::new().with_inputs(["y", "y"]));
        let context = context(&console);
        let items: Vec<u32> = (0..25).collect();

        show_pages(&context, "Listing", "Numbers", 10, |offset, size| {
            Ok(Page::slice(&items, offset, size))
        })
        .unwrap();

        let captions: Vec<String> = console.objects().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            captions,
            vec!["Numbers 1-10 of 25", "Numbers 11-20 of 25", "Numbers 21-25 of 25"]
        );
        // No question after the last page
        assert_eq!(console.prompt_count(), 2);
    }

    #[test]
    fn test_show_pages_empty_listing() {
        let console = Rc::new(ScriptedConsole::new());
        let context = context(&console);

        show_pages(&context, "Listing", "Numbers", 10, |offset, size| {
            Ok(Page::<u32>::slice(&[], offset, size))
        })
        .unwrap();

        assert_eq!(console.lines(), vec!["Numbers: none found."]);
    }

    #[test]
    fn test_with_progress_leaves_indicator_on_failure() {
        let console = Rc::new(ScriptedConsole::new());
        let context = context(&console);

        let result: Result<()> = with_progress(&context, "Working", || {
            Err(Error::Conflict("busy".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(
            console.events(),
            vec![scenario_deck_core::console::ConsoleEvent::ProgressStarted(
                "Working".to_string()
            )]
        );
    }

    #[test]
    fn test_read_quantity_rejects_non_numbers() {
        let console = Rc::new(ScriptedConsole::new().with_inputs(["many", "0", "12"]));
        let context = context(&console);

        assert_eq!(read_quantity(&context, "Enter the quantity").unwrap(), 12);
        assert_eq!(console.errors().len(), 2);
    }

    #[test]
    fn test_choose_item() {
        let console = Rc::new(ScriptedConsole::new().with_choices([Some(1), None]));
        let context = context(&console);
        let items = ["first", "second"];

        let chosen = choose_item(&context, "Pick", &items, |item| item.to_string()).unwrap();
        assert_eq!(chosen, Some(&"second"));

        let backed_out = choose_item(&context, "Pick", &items, |item| item.to_string()).unwrap();
        assert_eq!(backed_out, None);
    }

    #[test]
    fn test_choose_item_out_of_range() {
        let console = Rc::new(ScriptedConsole::new().with_choices([Some(2)]));
        let context = context(&console);

        let result = choose_item(&context, "Pick", &["first", "second"], |item| item.to_string());

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
