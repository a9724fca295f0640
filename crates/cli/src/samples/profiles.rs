//! Partner profile samples.

use log::debug;

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::ProfileKind;

use super::{choose_item, show, with_progress};

pub fn get_profile(context: &ScenarioContext, kind: ProfileKind) -> Result<()> {
    show(
        context,
        &format!("Retrieving {kind} profile"),
        &format!("Partner {kind} profile"),
        || context.operations().profile(kind),
    )
}

/// Lets the user pick one field of the profile and give it a new value.
pub fn update_profile(context: &ScenarioContext, kind: ProfileKind) -> Result<()> {
    let console = context.console();
    let operations = context.operations();

    let profile = with_progress(context, &format!("Retrieving {kind} profile"), || {
        operations.profile(kind)
    })?;
    render_object(console, &profile.fields, &format!("Current {kind} profile"))?;

    let field_names: Vec<String> = profile.fields.keys().cloned().collect();
    let Some(field) = choose_item(context, "Select the field to update", &field_names, |name| {
        name.clone()
    })?
    else {
        debug!("No field of the {kind} profile chosen");
        return Ok(());
    };

    let value = console.read_non_empty_string(
        &format!("Enter the new value of {field}"),
        "The value can't be empty",
    )?;

    let updated = with_progress(context, &format!("Updating {kind} profile"), || {
        operations.update_profile(kind, field, &value)
    })?;

    console.success(&format!("Partner {kind} profile updated"))?;
    render_object(console, &updated.fields, &format!("Updated {kind} profile"))
}
