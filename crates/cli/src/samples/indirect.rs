//! Indirect partner samples.

use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;

use super::show;

pub fn verify_partner_mpn_id(context: &ScenarioContext) -> Result<()> {
    let mpn_id = context
        .resolver()
        .obtain_mpn_id(Some("Enter the MPN ID of the indirect reseller"))?;

    show(context, "Verifying MPN ID", "Partner MPN profile", || {
        context.operations().verify_mpn_id(&mpn_id)
    })
}

pub fn get_subscriptions_by_mpn_id(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let mpn_id = resolver.obtain_mpn_id(Some("Enter the MPN ID of the indirect reseller"))?;

    show(
        context,
        "Retrieving subscriptions",
        "Customer subscriptions sold by the reseller",
        || {
            context
                .operations()
                .subscriptions_by_mpn_id(&customer_id, &mpn_id)
        },
    )
}
