//! Order samples.

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::NewOrderLine;

use super::{read_quantity, show, with_progress};

pub fn create_order(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(Some("Enter the ID of the customer making the purchase"))?;
    let offer_id = resolver.obtain_offer_id(Some("Enter the ID of the offer to purchase"))?;
    let quantity = read_quantity(context, "Enter the quantity")?;

    let line = NewOrderLine {
        offer_id,
        quantity,
        friendly_name: None,
    };

    let order = with_progress(context, "Creating order", || {
        context.operations().create_order(&customer_id, vec![line])
    })?;

    context.console().success("Order created")?;
    render_object(context.console(), &order, "Created order")
}

pub fn get_order_details(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let order_id = resolver.obtain_order_id(Some("Enter the ID of the order to retrieve"))?;

    show(context, "Retrieving order", "Order details", || {
        context.operations().order(&customer_id, &order_id)
    })
}

pub fn get_orders(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;

    show(context, "Retrieving orders", "Customer orders", || {
        context.operations().orders(&customer_id)
    })
}
