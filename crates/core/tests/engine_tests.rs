//! Integration tests for scenario-deck-core
//!
//! These tests drive whole scenario trees through a scripted console and
//! check the behaviour a user observes.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use scenario_deck_core::config::ScenarioSettings;
use scenario_deck_core::console::{ConsoleEvent, ScriptedConsole};
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Error;
use scenario_deck_core::file_handling::get_settings;
use scenario_deck_core::sandbox::SandboxPartner;
use scenario_deck_core::scenario::{AggregateScenario, LeafScenario, Scenario, Selection};
use scenario_deck_core::strategy::{PromptStrategy, SinglePassStrategy};
use tempfile::NamedTempFile;

fn context_with(console: &Rc<ScriptedConsole>, settings: ScenarioSettings) -> Rc<ScenarioContext> {
    Rc::new(ScenarioContext::new(
        console.clone(),
        settings,
        Rc::new(SandboxPartner::seeded().unwrap()),
    ))
}

fn context(console: &Rc<ScriptedConsole>) -> Rc<ScenarioContext> {
    context_with(console, ScenarioSettings::default())
}

fn single_pass_leaf<F>(title: &str, context: &Rc<ScenarioContext>, action: F) -> Box<dyn Scenario>
where
    F: Fn(&ScenarioContext) -> scenario_deck_core::error::Result<()> + 'static,
{
    Box::new(
        LeafScenario::new(title, context.clone(), action)
            .unwrap()
            .with_strategy(Rc::new(SinglePassStrategy)),
    )
}

/// A successful and a failing leaf picked one after the other from the same menu
#[test]
fn test_success_then_failure_returns_to_menu() {
    let console = Rc::new(
        ScriptedConsole::new()
            .with_choices([Some(0), Some(1)])
            .with_inputs(["y", "n"]),
    );
    let context = context(&console);

    let root = AggregateScenario::new(
        "Samples",
        context.clone(),
        vec![
            single_pass_leaf("L1", &context, |context| context.console().success("Done")),
            single_pass_leaf("L2", &context, |_| {
                Err(Error::InvalidInput("always fails".to_string()))
            }),
        ],
    )
    .unwrap();

    root.run();

    assert_eq!(console.successes(), vec!["Done"]);
    assert_eq!(console.errors(), vec!["Invalid input: always fails"]);
    assert_eq!(console.menu_count(), 2);
    assert_eq!(console.remaining_inputs(), 0);
}

/// The menu is offered again after the failing leaf, and the other leaf still runs
#[test]
fn test_failure_then_menu_again() {
    let console = Rc::new(
        ScriptedConsole::new()
            .with_choices([Some(1), Some(0)])
            .with_inputs(["y", "n"]),
    );
    let context = context(&console);

    let root = AggregateScenario::new(
        "Samples",
        context.clone(),
        vec![
            single_pass_leaf("L1", &context, |context| context.console().success("Done")),
            single_pass_leaf("L2", &context, |_| {
                Err(Error::InvalidInput("always fails".to_string()))
            }),
        ],
    )
    .unwrap();

    root.run();

    let events = console.events();
    let position = |wanted: &dyn Fn(&ConsoleEvent) -> bool| {
        events.iter().position(|event| wanted(event)).unwrap()
    };
    let failure = position(&|event: &ConsoleEvent| matches!(event, ConsoleEvent::Error(_)));
    let second_menu = events
        .iter()
        .enumerate()
        .filter(|(_, event)| matches!(event, ConsoleEvent::Menu { .. }))
        .map(|(index, _)| index)
        .nth(1)
        .unwrap();
    let success = position(&|event: &ConsoleEvent| *event == ConsoleEvent::Success("Done".to_string()));

    assert_eq!(console.menu_count(), 2);
    assert!(failure < second_menu);
    assert!(second_menu < success);
    assert_eq!(console.remaining_inputs(), 0);
}

#[test]
fn test_all_failing_children_never_escape() {
    let console = Rc::new(ScriptedConsole::new());
    let context = context(&console);

    let failing = |title: &str| {
        single_pass_leaf(title, &context, |_| Err(Error::Conflict("nope".to_string())))
    };
    let inner = AggregateScenario::new("Inner", context.clone(), vec![failing("A"), failing("B")])
        .unwrap()
        .with_selection(Selection::Sequential)
        .with_strategy(Rc::new(SinglePassStrategy));
    let root = AggregateScenario::new(
        "Root",
        context.clone(),
        vec![Box::new(inner), failing("C")],
    )
    .unwrap()
    .with_selection(Selection::Sequential)
    .with_strategy(Rc::new(SinglePassStrategy));

    root.run();

    assert_eq!(console.errors().len(), 3);
    assert_eq!(console.titles(), vec!["Root", "Inner", "A", "B", "C"]);
}

#[test]
fn test_selected_children_visited_once_and_tree_unchanged() {
    let console = Rc::new(ScriptedConsole::new().with_choices([Some(2), Some(0), None]));
    let context = context(&console);
    let visits: Vec<Rc<Cell<usize>>> = (0..3).map(|_| Rc::new(Cell::new(0))).collect();

    let children = visits
        .iter()
        .enumerate()
        .map(|(index, counter)| {
            let counter = counter.clone();
            single_pass_leaf(&format!("Child {index}"), &context, move |_| {
                counter.set(counter.get() + 1);
                Ok(())
            })
        })
        .collect();

    let root = AggregateScenario::new("Root", context.clone(), children)
        .unwrap()
        .with_strategy(Rc::new(SinglePassStrategy));
    let titles_before: Vec<String> = root.children().iter().map(|c| c.title().to_string()).collect();

    root.run();
    root.run();
    root.run();

    let counts: Vec<usize> = visits.iter().map(|counter| counter.get()).collect();
    assert_eq!(counts, vec![1, 0, 1]);

    let titles_after: Vec<String> = root.children().iter().map(|c| c.title().to_string()).collect();
    assert_eq!(titles_before, titles_after);
}

#[test]
fn test_prompt_strategy_three_repeats_four_runs() {
    let console = Rc::new(ScriptedConsole::new().with_inputs(["y", "Y", "yes", "no"]));
    let context = context(&console);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    let leaf = LeafScenario::new("Repeat me", context, move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    })
    .unwrap()
    .with_strategy(Rc::new(PromptStrategy));

    leaf.run();

    assert_eq!(calls.get(), 4);
}

#[test]
fn test_single_pass_completes_after_failure() {
    let console = Rc::new(ScriptedConsole::new().with_inputs(["y"]));
    let context = context(&console);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    let leaf = LeafScenario::new("Once", context, move |_| {
        counter.set(counter.get() + 1);
        Err(Error::InvalidInput("bad".to_string()))
    })
    .unwrap()
    .with_strategy(Rc::new(SinglePassStrategy));

    leaf.run();

    assert_eq!(calls.get(), 1);
    assert_eq!(console.remaining_inputs(), 1);
}

#[test]
fn test_blank_titles_rejected() {
    let console = Rc::new(ScriptedConsole::new());
    let context = context(&console);

    assert!(matches!(
        LeafScenario::new("   ", context.clone(), |_| Ok(())),
        Err(Error::EmptyTitle)
    ));
    assert!(matches!(
        AggregateScenario::new("", context.clone(), vec![single_pass_leaf("A", &context, |_| Ok(()))]),
        Err(Error::EmptyTitle)
    ));
}

/// A configured customer ID loaded from disk is used without prompting
#[test]
fn test_configured_customer_id_never_prompts() {
    let mut settings_file = NamedTempFile::new().unwrap();
    writeln!(settings_file, "default_customer_id: cust-123").unwrap();
    let settings = get_settings(settings_file.path().to_str().unwrap()).unwrap();

    let console = Rc::new(ScriptedConsole::new());
    let context = context_with(&console, settings);
    let used = Rc::new(std::cell::RefCell::new(String::new()));
    let seen = used.clone();

    let leaf = LeafScenario::new("Get customer", context, move |context| {
        let customer_id = context.resolver().obtain_customer_id(None)?;
        *seen.borrow_mut() = customer_id;
        Ok(())
    })
    .unwrap()
    .with_strategy(Rc::new(SinglePassStrategy));

    leaf.run();

    assert_eq!(*used.borrow(), "cust-123");
    assert_eq!(console.prompt_count(), 0);
    assert!(console
        .events()
        .contains(&ConsoleEvent::Line("Found customer ID: cust-123 in configuration.".to_string())));
}

#[test]
fn test_unconfigured_customer_id_prompts_after_empty_answers() {
    let console = Rc::new(ScriptedConsole::new().with_inputs(["", " ", "cust-0001"]));
    let context = context(&console);

    let leaf = LeafScenario::new("Get customer", context, |context| {
        let customer_id = context.resolver().obtain_customer_id(None)?;
        let customer = context.operations().customer(&customer_id)?;
        context.console().success(&customer.billing_profile.company_name)
    })
    .unwrap()
    .with_strategy(Rc::new(SinglePassStrategy));

    leaf.run();

    assert_eq!(console.prompt_count(), 3);
    assert_eq!(console.errors(), vec!["The customer ID can't be empty"; 2]);
    assert_eq!(console.successes(), vec!["Contoso Ltd"]);
}
