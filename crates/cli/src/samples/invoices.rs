//! Invoice samples.

use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;

use super::{show, show_pages};

pub fn get_account_balance(context: &ScenarioContext) -> Result<()> {
    show(context, "Retrieving account balance", "Account balance", || {
        context.operations().account_balance()
    })
}

pub fn get_invoice(context: &ScenarioContext) -> Result<()> {
    let invoice_id = context.resolver().obtain_invoice_id(None)?;

    show(context, "Retrieving invoice", "Invoice", || {
        context.operations().invoice(&invoice_id)
    })
}

pub fn get_invoice_line_items(context: &ScenarioContext) -> Result<()> {
    let invoice_id = context.resolver().obtain_invoice_id(None)?;

    show_pages(
        context,
        "Querying invoice line items",
        "Invoice line items",
        context.settings().invoice_page_size(),
        |offset, size| {
            context
                .operations()
                .invoice_line_items(&invoice_id, offset, size)
        },
    )
}

pub fn get_paged_invoices(context: &ScenarioContext) -> Result<()> {
    show_pages(
        context,
        "Querying invoices",
        "Invoices",
        context.settings().invoice_page_size(),
        |offset, size| context.operations().invoices_page(offset, size),
    )
}
