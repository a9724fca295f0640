//! The tree of sample scenarios shown by `sdeck`.

use std::rc::Rc;

use log::debug;

use crate::samples::{
    customers, indirect, invoices, offers, orders, profiles, service_requests, subscriptions,
    usage,
};
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::{CustomerSearchField, ProfileKind};
use scenario_deck_core::scenario::{AggregateScenario, LeafScenario, Scenario, Selection};
use scenario_deck_core::strategy::SinglePassStrategy;

pub const ROOT_TITLE: &str = "Partner SDK samples";

/// How the catalog's scenarios are run.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogOptions {
    /// Run every scenario once and every group in order, without menus.
    pub batch: bool,
}

struct CatalogBuilder {
    context: Rc<ScenarioContext>,
    options: CatalogOptions,
}

impl CatalogBuilder {
    fn leaf<F>(&self, title: &str, action: F) -> Result<Box<dyn Scenario>>
    where
        F: Fn(&ScenarioContext) -> Result<()> + 'static,
    {
        let leaf = LeafScenario::new(title, self.context.clone(), action)?;

        if self.options.batch {
            Ok(Box::new(leaf.with_strategy(Rc::new(SinglePassStrategy))))
        } else {
            Ok(Box::new(leaf))
        }
    }

    fn aggregate(
        &self,
        title: &str,
        children: Vec<Box<dyn Scenario>>,
    ) -> Result<AggregateScenario> {
        let aggregate = AggregateScenario::new(title, self.context.clone(), children)?;

        if self.options.batch {
            Ok(aggregate
                .with_strategy(Rc::new(SinglePassStrategy))
                .with_selection(Selection::Sequential))
        } else {
            Ok(aggregate)
        }
    }

    fn group(&self, title: &str, children: Vec<Box<dyn Scenario>>) -> Result<Box<dyn Scenario>> {
        Ok(Box::new(self.aggregate(title, children)?))
    }

    fn customer_samples(&self) -> Result<Box<dyn Scenario>> {
        let filtering = self.group(
            "Customer filtering",
            vec![
                self.leaf("Filter by company name", |context| {
                    customers::filter_customers(context, CustomerSearchField::CompanyName)
                })?,
                self.leaf("Filter by domain name", |context| {
                    customers::filter_customers(context, CustomerSearchField::Domain)
                })?,
            ],
        )?;

        self.group(
            "Customer samples",
            vec![
                self.leaf("Create a new customer", customers::create_customer)?,
                self.leaf(
                    "Check domain availability",
                    customers::check_domain_availability,
                )?,
                self.leaf("Get paged customers", customers::get_paged_customers)?,
                filtering,
                self.leaf("Get customer details", customers::get_customer_details)?,
                self.leaf("Delete a customer", customers::delete_customer)?,
                self.leaf(
                    "Get customer managed services",
                    customers::get_customer_managed_services,
                )?,
                self.leaf(
                    "Get customer relationship request",
                    customers::get_customer_relationship_request,
                )?,
                self.leaf(
                    "Update customer billing profile",
                    customers::update_customer_billing_profile,
                )?,
                self.leaf("Validate a customer address", customers::validate_customer_address)?,
            ],
        )
    }

    fn indirect_partner_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Indirect partner samples",
            vec![
                self.leaf("Verify a partner MPN ID", indirect::verify_partner_mpn_id)?,
                self.leaf(
                    "Get customer subscriptions by MPN ID",
                    indirect::get_subscriptions_by_mpn_id,
                )?,
            ],
        )
    }

    fn offer_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Offer samples",
            vec![
                self.leaf("Get an offer", offers::get_offer)?,
                self.leaf("Get offer categories", offers::get_offer_categories)?,
                self.leaf("Get offers", offers::get_offers)?,
                self.leaf("Get paged offers", offers::get_paged_offers)?,
            ],
        )
    }

    fn order_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Order samples",
            vec![
                self.leaf("Create an order", orders::create_order)?,
                self.leaf("Get order details", orders::get_order_details)?,
                self.leaf("Get all customer orders", orders::get_orders)?,
            ],
        )
    }

    fn subscription_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Subscription samples",
            vec![
                self.leaf("Get a subscription", subscriptions::get_subscription)?,
                self.leaf(
                    "Get all customer subscriptions",
                    subscriptions::get_subscriptions,
                )?,
                self.leaf(
                    "Get subscriptions by order",
                    subscriptions::get_subscriptions_by_order,
                )?,
                self.leaf("Update a subscription", subscriptions::update_subscription)?,
                self.leaf("Upgrade a subscription", subscriptions::upgrade_subscription)?,
                self.leaf(
                    "Add an add-on to a subscription",
                    subscriptions::add_subscription_add_on,
                )?,
            ],
        )
    }

    fn rated_usage_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Rated usage samples",
            vec![
                self.leaf("Get customer usage summary", usage::get_customer_usage_summary)?,
                self.leaf(
                    "Get customer subscriptions usage",
                    usage::get_customer_subscriptions_usage,
                )?,
                self.leaf(
                    "Get subscription resource usage",
                    usage::get_subscription_resource_usage,
                )?,
                self.leaf(
                    "Get subscription usage records",
                    usage::get_subscription_usage_records,
                )?,
                self.leaf(
                    "Get subscription usage summary",
                    usage::get_subscription_usage_summary,
                )?,
            ],
        )
    }

    fn service_request_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Service request samples",
            vec![
                self.leaf(
                    "Create a service request",
                    service_requests::create_service_request,
                )?,
                self.leaf(
                    "Get customer service requests",
                    service_requests::get_customer_service_requests,
                )?,
                self.leaf(
                    "Get paged service requests",
                    service_requests::get_paged_service_requests,
                )?,
                self.leaf(
                    "Get service request details",
                    service_requests::get_service_request_details,
                )?,
                self.leaf("Get support topics", service_requests::get_support_topics)?,
                self.leaf(
                    "Update a service request",
                    service_requests::update_service_request,
                )?,
            ],
        )
    }

    fn invoice_samples(&self) -> Result<Box<dyn Scenario>> {
        self.group(
            "Invoice samples",
            vec![
                self.leaf("Get account balance", invoices::get_account_balance)?,
                self.leaf("Get an invoice", invoices::get_invoice)?,
                self.leaf("Get invoice line items", invoices::get_invoice_line_items)?,
                self.leaf("Get paged invoices", invoices::get_paged_invoices)?,
            ],
        )
    }

    fn partner_profile_samples(&self) -> Result<Box<dyn Scenario>> {
        let readable = [
            ProfileKind::Billing,
            ProfileKind::LegalBusiness,
            ProfileKind::Organization,
            ProfileKind::Mpn,
            ProfileKind::Support,
        ];
        // The MPN profile is read only
        let updatable = readable
            .iter()
            .copied()
            .filter(|kind| *kind != ProfileKind::Mpn);

        let mut children = Vec::new();
        for kind in readable {
            children.push(self.leaf(&format!("Get {kind} profile"), move |context| {
                profiles::get_profile(context, kind)
            })?);
        }
        for kind in updatable {
            children.push(self.leaf(&format!("Update {kind} profile"), move |context| {
                profiles::update_profile(context, kind)
            })?);
        }

        self.group("Partner profile samples", children)
    }
}

/// Builds the sample tree over `context`.
///
/// # Errors
///
/// Returns an error if any scenario in the tree fails construction.
pub fn build_catalog(
    context: Rc<ScenarioContext>,
    options: CatalogOptions,
) -> Result<AggregateScenario> {
    let builder = CatalogBuilder { context, options };

    let groups = vec![
        builder.customer_samples()?,
        builder.indirect_partner_samples()?,
        builder.offer_samples()?,
        builder.order_samples()?,
        builder.subscription_samples()?,
        builder.rated_usage_samples()?,
        builder.service_request_samples()?,
        builder.invoice_samples()?,
        builder.partner_profile_samples()?,
    ];
    debug!("Built {} sample groups (batch: {})", groups.len(), options.batch);

    builder.aggregate(ROOT_TITLE, groups)
}
