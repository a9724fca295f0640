//! Subscription samples.

use log::debug;

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::SubscriptionUpdate;

use super::{choose_item, read_quantity, show, with_progress};

/// Resolves the customer and then one of its subscriptions.
fn obtain_customer_subscription(context: &ScenarioContext, prompt: &str) -> Result<(String, String)> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let subscription_id = resolver.obtain_subscription_id(&customer_id, Some(prompt))?;

    Ok((customer_id, subscription_id))
}

pub fn get_subscription(context: &ScenarioContext) -> Result<()> {
    let (customer_id, subscription_id) =
        obtain_customer_subscription(context, "Enter the ID of the subscription to retrieve")?;

    show(context, "Retrieving subscription", "Subscription details", || {
        context
            .operations()
            .subscription(&customer_id, &subscription_id)
    })
}

pub fn get_subscriptions(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;

    show(
        context,
        "Retrieving customer subscriptions",
        "Customer subscriptions",
        || context.operations().customer_subscriptions(&customer_id),
    )
}

pub fn get_subscriptions_by_order(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let order_id = resolver.obtain_order_id(None)?;

    show(
        context,
        "Retrieving order subscriptions",
        "Order subscriptions",
        || {
            context
                .operations()
                .subscriptions_by_order(&customer_id, &order_id)
        },
    )
}

pub fn update_subscription(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let (customer_id, subscription_id) =
        obtain_customer_subscription(context, "Enter the ID of the subscription to update")?;

    let friendly_name = console.read_non_empty_string(
        "Enter the new friendly name",
        "The friendly name can't be empty",
    )?;
    let quantity = read_quantity(context, "Enter the new quantity")?;

    let update = SubscriptionUpdate {
        friendly_name: Some(friendly_name),
        quantity: Some(quantity),
    };

    let subscription = with_progress(context, "Updating subscription", || {
        context
            .operations()
            .update_subscription(&customer_id, &subscription_id, update)
    })?;

    console.success("Subscription updated")?;
    render_object(console, &subscription, "Updated subscription")
}

pub fn upgrade_subscription(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let (customer_id, subscription_id) =
        obtain_customer_subscription(context, "Enter the ID of the subscription to upgrade")?;

    let upgrades = with_progress(context, "Retrieving upgrade targets", || {
        context
            .operations()
            .subscription_upgrades(&customer_id, &subscription_id)
    })?;

    if upgrades.is_empty() {
        return console.write_line("No upgrades are available for this subscription.");
    }

    let Some(target) = choose_item(context, "Select the offer to upgrade to", &upgrades, |offer| {
        offer.name.clone()
    })?
    else {
        debug!("No upgrade target chosen for `{subscription_id}`");
        return Ok(());
    };

    let subscription = with_progress(context, "Upgrading subscription", || {
        context
            .operations()
            .upgrade_subscription(&customer_id, &subscription_id, &target.id)
    })?;

    console.success(&format!("Subscription upgraded to {}", target.name))?;
    render_object(console, &subscription, "Upgraded subscription")
}

pub fn add_subscription_add_on(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let operations = context.operations();
    let (customer_id, subscription_id) =
        obtain_customer_subscription(context, "Enter the ID of the subscription to extend")?;

    let add_ons = with_progress(context, "Retrieving add-ons", || {
        let subscription = operations.subscription(&customer_id, &subscription_id)?;
        let offer = operations.offer(&subscription.offer_id)?;

        offer
            .add_on_ids
            .iter()
            .map(|add_on_id| operations.offer(add_on_id))
            .collect::<Result<Vec<_>>>()
    })?;

    if add_ons.is_empty() {
        return console.write_line("No add-ons are available for this subscription.");
    }

    let Some(add_on) = choose_item(context, "Select the add-on to purchase", &add_ons, |offer| {
        offer.name.clone()
    })?
    else {
        return Ok(());
    };

    let order = with_progress(context, "Purchasing add-on", || {
        operations.add_subscription_add_on(&customer_id, &subscription_id, &add_on.id)
    })?;

    console.success("Add-on purchased")?;
    render_object(console, &order, "Add-on order")
}
