//! Integration tests for the sample catalog
//!
//! The whole tree is driven through a scripted console against the seeded
//! sandbox, the way `sdeck` drives it through the terminal.

use std::io::Write;
use std::rc::Rc;

use scenario_deck_cli::catalog::{build_catalog, CatalogOptions, ROOT_TITLE};
use scenario_deck_core::config::ScenarioSettings;
use scenario_deck_core::console::ScriptedConsole;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::file_handling::get_settings;
use scenario_deck_core::sandbox::SandboxPartner;
use scenario_deck_core::scenario::Scenario;
use tempfile::NamedTempFile;

/// Every scenario in the tree: the root, 10 groups and 50 samples.
const SCENARIO_COUNT: usize = 61;

fn context_with(console: &Rc<ScriptedConsole>, settings: ScenarioSettings) -> Rc<ScenarioContext> {
    Rc::new(ScenarioContext::new(
        console.clone(),
        settings,
        Rc::new(SandboxPartner::seeded().unwrap()),
    ))
}

#[test]
fn test_interactive_run_of_one_sample() {
    // Partner profile samples, then Get billing profile, then decline every rerun
    let console = Rc::new(
        ScriptedConsole::new()
            .with_choices([Some(8), Some(0)])
            .with_inputs(["n", "n", "n"]),
    );
    let root = build_catalog(
        context_with(&console, ScenarioSettings::default()),
        CatalogOptions::default(),
    )
    .unwrap();

    root.run();

    assert_eq!(
        console.titles(),
        vec![ROOT_TITLE, "Partner profile samples", "Get billing profile"]
    );
    assert_eq!(console.objects()[0].0, "Partner billing profile");
    assert_eq!(console.remaining_inputs(), 0);
    assert!(console.errors().is_empty());
}

#[test]
fn test_backing_out_of_root_menu() {
    let console = Rc::new(ScriptedConsole::new().with_choices([None]).with_inputs(["n"]));
    let root = build_catalog(
        context_with(&console, ScenarioSettings::default()),
        CatalogOptions::default(),
    )
    .unwrap();

    root.run();

    assert_eq!(console.titles(), vec![ROOT_TITLE]);
    assert_eq!(console.menu_count(), 1);
}

#[test]
fn test_batch_run_visits_every_scenario_once() {
    let console = Rc::new(ScriptedConsole::new());
    let root = build_catalog(
        context_with(&console, ScenarioSettings::default()),
        CatalogOptions { batch: true },
    )
    .unwrap();

    root.run();

    // Samples needing input fail once input runs out, without stopping the run
    assert_eq!(console.titles().len(), SCENARIO_COUNT);
    assert_eq!(console.menu_count(), 0);
    assert!(!console.errors().is_empty());
    assert!(console
        .objects()
        .iter()
        .any(|(caption, _)| caption == "Created user Information"));
}

#[test]
fn test_batch_run_with_settings_file() {
    let mut settings_file = NamedTempFile::new().unwrap();
    writeln!(
        settings_file,
        "default_customer_id: cust-0001\ndefault_subscription_id: sub-0006\ninvoice_page_size: 50"
    )
    .unwrap();
    let settings = get_settings(settings_file.path().to_str().unwrap()).unwrap();

    let console = Rc::new(ScriptedConsole::new());
    let root = build_catalog(context_with(&console, settings), CatalogOptions { batch: true })
        .unwrap();

    root.run();

    let lines = console.lines();
    assert!(lines.contains(&"Found customer ID: cust-0001 in configuration.".to_string()));
    assert!(lines.contains(&"Found subscription ID: sub-0006 in configuration.".to_string()));
    assert!(console
        .objects()
        .iter()
        .any(|(caption, _)| caption == "Invoices 1-3 of 3"));
}

#[test]
fn test_invalid_settings_file_is_rejected() {
    let mut settings_file = NamedTempFile::new().unwrap();
    writeln!(settings_file, "customer_page_size: 0").unwrap();

    let result = get_settings(settings_file.path().to_str().unwrap());

    assert!(result.is_err());
}
