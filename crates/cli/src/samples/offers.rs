//! Offer samples.

use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;

use super::{show, show_pages};

pub fn get_offer(context: &ScenarioContext) -> Result<()> {
    let offer_id = context
        .resolver()
        .obtain_offer_id(Some("Enter the ID of the offer to retrieve"))?;

    show(context, "Retrieving offer", "Offer details", || {
        context.operations().offer(&offer_id)
    })
}

pub fn get_offer_categories(context: &ScenarioContext) -> Result<()> {
    show(context, "Retrieving offer categories", "Offer categories", || {
        context.operations().offer_categories()
    })
}

pub fn get_offers(context: &ScenarioContext) -> Result<()> {
    show(context, "Retrieving offers", "Offers", || {
        context.operations().offers()
    })
}

pub fn get_paged_offers(context: &ScenarioContext) -> Result<()> {
    show_pages(
        context,
        "Querying offers",
        "Offers",
        context.settings().offer_page_size(),
        |offset, size| context.operations().offers_page(offset, size),
    )
}
