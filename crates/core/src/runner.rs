//! The repeat loop every scenario runs in.

use log::{debug, info, warn};

use crate::console::Console;
use crate::error::Result;
use crate::scenario::Scenario;

/// Runs `scenario` until its execution strategy reports it complete.
///
/// Each iteration clears the display, shows the title and calls
/// [`Scenario::run_scenario`]. An error is reported through the console and
/// then dropped: nothing a scenario does can end its caller's loop.
pub fn run(scenario: &dyn Scenario) {
    let console = scenario.context().console();
    let mut iterations = 0usize;

    loop {
        iterations += 1;
        debug!("Running `{}`, iteration {iterations}", scenario.title());

        write_heading(console, scenario.title());

        if let Err(e) = scenario.run_scenario() {
            debug!("`{}` failed: {e}", scenario.title());
            report(console.stop_progress());
            report(console.error(&e.to_string()));
        }

        report(console.write_line(""));

        if scenario.base().strategy().is_scenario_complete(scenario) {
            break;
        }
    }

    info!(
        "Finished `{}` after {iterations} iteration(s)",
        scenario.title()
    );
}

fn write_heading(console: &dyn Console, title: &str) {
    report(console.clear());
    report(console.write_title(title));
    report(console.write_separator());
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        warn!("Console failure: {e}");
    }
}
