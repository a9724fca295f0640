use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use log::debug;

use scenario_deck_cli::catalog::build_catalog;
use scenario_deck_cli::cli_args::Args;
use scenario_deck_cli::terminal::TerminalConsole;
use scenario_deck_core::config;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::file_handling;
use scenario_deck_core::sandbox::SandboxPartner;
use scenario_deck_core::scenario::Scenario;

fn execute() -> Result<()> {
    let args = Args::parse();

    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{settings_path}`");
    let settings = file_handling::get_settings(&settings_path)?;

    let context = Rc::new(ScenarioContext::new(
        Rc::new(TerminalConsole::new()),
        settings,
        Rc::new(SandboxPartner::seeded()?),
    ));

    let root = build_catalog(context, args.catalog_options())?;
    root.run();

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
