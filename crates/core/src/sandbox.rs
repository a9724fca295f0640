//! An in-memory partner account implementing [`PartnerOperations`].
//!
//! The sandbox is seeded with a handful of customers, offers, orders,
//! subscriptions, invoices and service requests so that every sample scenario
//! has real data to work with. Mutations only live as long as the process.

use std::cell::RefCell;

use indexmap::IndexMap;
use itertools::Itertools;
use log::info;

use crate::error::{Error, Result};
use crate::models::{
    AccountBalance, Address, Customer, CustomerBillingProfile, CustomerSearchField, Invoice,
    InvoiceLineItem, ManagedService, NewCustomer, NewOrderLine, NewServiceRequest, Offer,
    OfferCategory, Order, OrderLineItem, Page, PartnerProfile, ProfileKind, ResourceUsage,
    ServiceRequest, ServiceRequestStatus, ServiceRequestUpdate, Severity, Subscription,
    SubscriptionStatus, SubscriptionUpdate, SupportTopic, UsageSummary,
};
use crate::operations::PartnerOperations;

const CURRENCY: &str = "USD";
const PARTNER_ID: &str = "partner-0001";
const PARTNER_MPN_ID: &str = "4847383";

#[derive(Default)]
struct SandboxState {
    next_id: usize,
    customers: Vec<Customer>,
    categories: Vec<OfferCategory>,
    offers: Vec<Offer>,
    orders: Vec<Order>,
    subscriptions: Vec<Subscription>,
    support_topics: Vec<SupportTopic>,
    service_requests: Vec<ServiceRequest>,
    invoices: Vec<Invoice>,
    invoice_line_items: Vec<InvoiceLineItem>,
    profiles: IndexMap<ProfileKind, PartnerProfile>,
    resellers: IndexMap<String, String>,
}

impl SandboxState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{:04}", self.next_id)
    }

    fn customer(&self, customer_id: &str) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id == customer_id)
            .ok_or_else(|| Error::not_found("customer", customer_id))
    }

    fn offer(&self, offer_id: &str) -> Result<&Offer> {
        self.offers
            .iter()
            .find(|offer| offer.id == offer_id)
            .ok_or_else(|| Error::not_found("offer", offer_id))
    }

    fn subscription_index(&self, customer_id: &str, subscription_id: &str) -> Result<usize> {
        self.customer(customer_id)?;

        self.subscriptions
            .iter()
            .position(|s| s.id == subscription_id && s.customer_id == customer_id)
            .ok_or_else(|| Error::not_found("subscription", subscription_id))
    }

    fn check_quantity(offer: &Offer, quantity: u32) -> Result<()> {
        if quantity < offer.minimum_quantity || quantity > offer.maximum_quantity {
            return Err(Error::InvalidInput(format!(
                "quantity {quantity} for offer `{}` must be between {} and {}",
                offer.id, offer.minimum_quantity, offer.maximum_quantity
            )));
        }

        Ok(())
    }

    fn place_order(
        &mut self,
        customer_id: &str,
        lines: &[NewOrderLine],
        parent_subscription_id: Option<&str>,
    ) -> Result<Order> {
        let order_id = self.next_id("order");
        let mut line_items = Vec::with_capacity(lines.len());

        for (line_item_number, line) in lines.iter().enumerate() {
            let offer = self.offer(&line.offer_id)?.clone();
            let subscription_id = self.next_id("sub");

            self.subscriptions.push(Subscription {
                id: subscription_id.clone(),
                customer_id: customer_id.to_string(),
                offer_id: offer.id.clone(),
                order_id: order_id.clone(),
                friendly_name: line.friendly_name.clone().unwrap_or(offer.name),
                quantity: line.quantity,
                status: SubscriptionStatus::Active,
                parent_subscription_id: parent_subscription_id.map(ToString::to_string),
                partner_mpn_id: None,
            });

            line_items.push(OrderLineItem {
                line_item_number,
                offer_id: line.offer_id.clone(),
                quantity: line.quantity,
                friendly_name: line.friendly_name.clone(),
                subscription_id: Some(subscription_id),
            });
        }

        let order = Order {
            id: order_id,
            customer_id: customer_id.to_string(),
            line_items,
        };

        self.orders.push(order.clone());
        info!(
            "Placed order `{}` for customer `{customer_id}` with {} line item(s)",
            order.id,
            order.line_items.len()
        );

        Ok(order)
    }

    fn usage_cost(&self, subscription: &Subscription) -> f64 {
        self.offer(&subscription.offer_id)
            .map(|offer| offer.unit_price * f64::from(subscription.quantity))
            .unwrap_or_default()
    }
}

/// In-memory partner account.
pub struct SandboxPartner {
    state: RefCell<SandboxState>,
}

impl SandboxPartner {
    /// A sandbox with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: RefCell::new(SandboxState::default()),
        }
    }

    /// A sandbox seeded with sample customers, offers and billing data.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed orders can't be placed.
    pub fn seeded() -> Result<Self> {
        let sandbox = Self::empty();
        seed(&mut sandbox.state.borrow_mut())?;
        Ok(sandbox)
    }
}

impl PartnerOperations for SandboxPartner {
    fn create_customer(&self, customer: NewCustomer) -> Result<Customer> {
        let domain = customer.domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(Error::InvalidInput("the customer domain is empty".to_string()));
        }

        if !self.check_domain_availability(&domain)? {
            return Err(Error::Conflict(format!("domain `{domain}` is already taken")));
        }

        let mut state = self.state.borrow_mut();
        let created = Customer {
            id: state.next_id("cust"),
            domain,
            billing_profile: customer.billing_profile,
        };

        state.customers.push(created.clone());
        info!("Created customer `{}` ({})", created.id, created.domain);

        Ok(created)
    }

    fn check_domain_availability(&self, domain: &str) -> Result<bool> {
        let domain = domain.trim().to_lowercase();

        Ok(!self
            .state
            .borrow()
            .customers
            .iter()
            .any(|customer| customer.domain == domain))
    }

    fn customers_page(&self, offset: usize, size: usize) -> Result<Page<Customer>> {
        Ok(Page::slice(&self.state.borrow().customers, offset, size))
    }

    fn query_customers(&self, field: CustomerSearchField, prefix: &str) -> Result<Vec<Customer>> {
        let prefix = prefix.to_lowercase();
        let state = self.state.borrow();

        Ok(state
            .customers
            .iter()
            .filter(|customer| {
                let value = match field {
                    CustomerSearchField::CompanyName => &customer.billing_profile.company_name,
                    CustomerSearchField::Domain => &customer.domain,
                };
                value.to_lowercase().starts_with(&prefix)
            })
            .sorted_by(|a, b| {
                a.billing_profile
                    .company_name
                    .cmp(&b.billing_profile.company_name)
            })
            .cloned()
            .collect())
    }

    fn customer(&self, customer_id: &str) -> Result<Customer> {
        self.state.borrow().customer(customer_id).cloned()
    }

    fn delete_customer(&self, customer_id: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.customer(customer_id)?;

        state.customers.retain(|customer| customer.id != customer_id);
        state.orders.retain(|order| order.customer_id != customer_id);
        state
            .subscriptions
            .retain(|subscription| subscription.customer_id != customer_id);
        info!("Deleted customer `{customer_id}` with its orders and subscriptions");

        Ok(())
    }

    fn customer_subscriptions(&self, customer_id: &str) -> Result<Vec<Subscription>> {
        let state = self.state.borrow();
        state.customer(customer_id)?;

        Ok(state
            .subscriptions
            .iter()
            .filter(|subscription| subscription.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn update_customer_billing_profile(
        &self,
        customer_id: &str,
        billing_profile: CustomerBillingProfile,
    ) -> Result<Customer> {
        if !self.validate_address(&billing_profile.default_address)? {
            return Err(Error::InvalidInput(
                "the billing address is incomplete".to_string(),
            ));
        }

        let mut state = self.state.borrow_mut();
        let customer = state
            .customers
            .iter_mut()
            .find(|customer| customer.id == customer_id)
            .ok_or_else(|| Error::not_found("customer", customer_id))?;

        customer.billing_profile = billing_profile;
        info!("Updated billing profile of customer `{customer_id}`");

        Ok(customer.clone())
    }

    fn validate_address(&self, address: &Address) -> Result<bool> {
        let required = [
            &address.address_line1,
            &address.city,
            &address.country,
            &address.postal_code,
        ];

        if required.iter().any(|field| field.trim().is_empty()) {
            return Ok(false);
        }

        if address.country.eq_ignore_ascii_case("US") {
            let postal_code = address.postal_code.trim();
            return Ok(
                postal_code.len() == 5 && postal_code.chars().all(|c| c.is_ascii_digit()),
            );
        }

        Ok(true)
    }

    fn customer_managed_services(&self, customer_id: &str) -> Result<Vec<ManagedService>> {
        let state = self.state.borrow();
        let customer = state.customer(customer_id)?;

        Ok(vec![
            ManagedService {
                id: "exchange".to_string(),
                name: "Exchange Online".to_string(),
                admin_url: format!("https://admin.exchange.example/{}", customer.domain),
            },
            ManagedService {
                id: "sharepoint".to_string(),
                name: "SharePoint Online".to_string(),
                admin_url: format!("https://admin.sharepoint.example/{}", customer.domain),
            },
        ])
    }

    fn customer_relationship_request(&self) -> Result<String> {
        Ok(format!(
            "https://portal.partner.example/reseller/invite?partnerId={PARTNER_ID}"
        ))
    }

    fn verify_mpn_id(&self, mpn_id: &str) -> Result<PartnerProfile> {
        let state = self.state.borrow();
        let partner_name = state
            .resellers
            .get(mpn_id.trim())
            .ok_or_else(|| Error::not_found("partner with MPN ID", mpn_id))?;

        let mut fields = IndexMap::new();
        fields.insert("mpn_id".to_string(), mpn_id.trim().to_string());
        fields.insert("partner_name".to_string(), partner_name.clone());

        Ok(PartnerProfile {
            kind: ProfileKind::Mpn,
            fields,
        })
    }

    fn subscriptions_by_mpn_id(
        &self,
        customer_id: &str,
        mpn_id: &str,
    ) -> Result<Vec<Subscription>> {
        let subscriptions = self.customer_subscriptions(customer_id)?;

        Ok(subscriptions
            .into_iter()
            .filter(|subscription| subscription.partner_mpn_id.as_deref() == Some(mpn_id))
            .collect())
    }

    fn offer(&self, offer_id: &str) -> Result<Offer> {
        self.state.borrow().offer(offer_id).cloned()
    }

    fn offer_categories(&self) -> Result<Vec<OfferCategory>> {
        Ok(self.state.borrow().categories.clone())
    }

    fn offers(&self) -> Result<Vec<Offer>> {
        Ok(self.state.borrow().offers.clone())
    }

    fn offers_page(&self, offset: usize, size: usize) -> Result<Page<Offer>> {
        Ok(Page::slice(&self.state.borrow().offers, offset, size))
    }

    fn create_order(&self, customer_id: &str, lines: Vec<NewOrderLine>) -> Result<Order> {
        let mut state = self.state.borrow_mut();
        state.customer(customer_id)?;

        if lines.is_empty() {
            return Err(Error::InvalidInput("an order needs at least one line".to_string()));
        }

        for line in &lines {
            let offer = state.offer(&line.offer_id)?;

            if offer.is_add_on {
                return Err(Error::InvalidInput(format!(
                    "offer `{}` is an add-on and needs a parent subscription",
                    offer.id
                )));
            }

            SandboxState::check_quantity(offer, line.quantity)?;
        }

        state.place_order(customer_id, &lines, None)
    }

    fn order(&self, customer_id: &str, order_id: &str) -> Result<Order> {
        let state = self.state.borrow();
        state.customer(customer_id)?;

        state
            .orders
            .iter()
            .find(|order| order.id == order_id && order.customer_id == customer_id)
            .cloned()
            .ok_or_else(|| Error::not_found("order", order_id))
    }

    fn orders(&self, customer_id: &str) -> Result<Vec<Order>> {
        let state = self.state.borrow();
        state.customer(customer_id)?;

        Ok(state
            .orders
            .iter()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn subscription(&self, customer_id: &str, subscription_id: &str) -> Result<Subscription> {
        let state = self.state.borrow();
        let index = state.subscription_index(customer_id, subscription_id)?;

        Ok(state.subscriptions[index].clone())
    }

    fn subscriptions_by_order(
        &self,
        customer_id: &str,
        order_id: &str,
    ) -> Result<Vec<Subscription>> {
        let order = self.order(customer_id, order_id)?;
        let state = self.state.borrow();

        Ok(state
            .subscriptions
            .iter()
            .filter(|subscription| subscription.order_id == order.id)
            .cloned()
            .collect())
    }

    fn update_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Subscription> {
        let mut state = self.state.borrow_mut();
        let index = state.subscription_index(customer_id, subscription_id)?;

        if let Some(quantity) = update.quantity {
            let offer = state.offer(&state.subscriptions[index].offer_id)?;
            SandboxState::check_quantity(offer, quantity)?;
        }

        let subscription = &mut state.subscriptions[index];

        if let Some(friendly_name) = update.friendly_name {
            if friendly_name.trim().is_empty() {
                return Err(Error::InvalidInput(
                    "the friendly name can't be empty".to_string(),
                ));
            }
            subscription.friendly_name = friendly_name;
        }

        if let Some(quantity) = update.quantity {
            subscription.quantity = quantity;
        }

        info!("Updated subscription `{subscription_id}`");

        Ok(subscription.clone())
    }

    fn subscription_upgrades(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Vec<Offer>> {
        let state = self.state.borrow();
        let index = state.subscription_index(customer_id, subscription_id)?;
        let offer = state.offer(&state.subscriptions[index].offer_id)?;

        offer
            .upgrade_target_ids
            .iter()
            .map(|target_id| state.offer(target_id).cloned())
            .collect()
    }

    fn upgrade_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        target_offer_id: &str,
    ) -> Result<Subscription> {
        let mut state = self.state.borrow_mut();
        let index = state.subscription_index(customer_id, subscription_id)?;
        let offer = state.offer(&state.subscriptions[index].offer_id)?;

        if !offer.upgrade_target_ids.iter().any(|id| id == target_offer_id) {
            return Err(Error::InvalidInput(format!(
                "offer `{}` can't be upgraded to `{target_offer_id}`",
                offer.id
            )));
        }

        let subscription = &mut state.subscriptions[index];
        subscription.offer_id = target_offer_id.to_string();
        info!("Upgraded subscription `{subscription_id}` to offer `{target_offer_id}`");

        Ok(subscription.clone())
    }

    fn add_subscription_add_on(
        &self,
        customer_id: &str,
        subscription_id: &str,
        add_on_offer_id: &str,
    ) -> Result<Order> {
        let mut state = self.state.borrow_mut();
        let index = state.subscription_index(customer_id, subscription_id)?;
        let offer = state.offer(&state.subscriptions[index].offer_id)?;

        if !offer.add_on_ids.iter().any(|id| id == add_on_offer_id) {
            return Err(Error::InvalidInput(format!(
                "`{add_on_offer_id}` is not an add-on of offer `{}`",
                offer.id
            )));
        }

        let add_on = state.offer(add_on_offer_id)?;
        let line = NewOrderLine {
            offer_id: add_on.id.clone(),
            quantity: add_on.minimum_quantity,
            friendly_name: None,
        };

        state.place_order(customer_id, &[line], Some(subscription_id))
    }

    fn customer_usage_summary(&self, customer_id: &str) -> Result<UsageSummary> {
        let state = self.state.borrow();
        let customer = state.customer(customer_id)?;

        let total_cost = state
            .subscriptions
            .iter()
            .filter(|subscription| subscription.customer_id == customer_id)
            .map(|subscription| state.usage_cost(subscription))
            .sum();

        Ok(UsageSummary {
            resource_id: customer.id.clone(),
            resource_name: customer.billing_profile.company_name.clone(),
            total_cost,
            currency: CURRENCY.to_string(),
        })
    }

    fn subscription_usage_summary(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<UsageSummary> {
        let state = self.state.borrow();
        let subscription = &state.subscriptions[state.subscription_index(customer_id, subscription_id)?];

        Ok(UsageSummary {
            resource_id: subscription.id.clone(),
            resource_name: subscription.friendly_name.clone(),
            total_cost: state.usage_cost(subscription),
            currency: CURRENCY.to_string(),
        })
    }

    fn subscription_resource_usage(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Vec<ResourceUsage>> {
        let subscription = self.subscription(customer_id, subscription_id)?;
        let seats = f64::from(subscription.quantity);

        Ok(vec![
            ResourceUsage {
                subscription_id: subscription.id.clone(),
                resource_name: "Virtual machine".to_string(),
                category: "Compute".to_string(),
                quantity: seats * 720.0,
                unit: "Hours".to_string(),
            },
            ResourceUsage {
                subscription_id: subscription.id,
                resource_name: "Blob storage".to_string(),
                category: "Storage".to_string(),
                quantity: seats * 12.5,
                unit: "GB".to_string(),
            },
        ])
    }

    fn create_service_request(&self, request: NewServiceRequest) -> Result<ServiceRequest> {
        if request.title.trim().is_empty() {
            return Err(Error::InvalidInput(
                "the service request title is empty".to_string(),
            ));
        }

        let mut state = self.state.borrow_mut();

        if !state
            .support_topics
            .iter()
            .any(|topic| topic.id == request.support_topic_id)
        {
            return Err(Error::not_found("support topic", &request.support_topic_id));
        }

        let created = ServiceRequest {
            id: state.next_id("sr"),
            title: request.title,
            description: request.description,
            severity: request.severity,
            status: ServiceRequestStatus::Open,
            support_topic_id: request.support_topic_id,
            customer_id: None,
            notes: Vec::new(),
        };

        state.service_requests.push(created.clone());
        info!("Created service request `{}`", created.id);

        Ok(created)
    }

    fn customer_service_requests(&self, customer_id: &str) -> Result<Vec<ServiceRequest>> {
        let state = self.state.borrow();
        state.customer(customer_id)?;

        Ok(state
            .service_requests
            .iter()
            .filter(|request| request.customer_id.as_deref() == Some(customer_id))
            .cloned()
            .collect())
    }

    fn service_requests_page(&self, offset: usize, size: usize) -> Result<Page<ServiceRequest>> {
        let state = self.state.borrow();
        let partner_requests: Vec<ServiceRequest> = state
            .service_requests
            .iter()
            .filter(|request| request.customer_id.is_none())
            .cloned()
            .collect();

        Ok(Page::slice(&partner_requests, offset, size))
    }

    fn service_request(&self, service_request_id: &str) -> Result<ServiceRequest> {
        self.state
            .borrow()
            .service_requests
            .iter()
            .find(|request| request.id == service_request_id)
            .cloned()
            .ok_or_else(|| Error::not_found("service request", service_request_id))
    }

    fn support_topics(&self) -> Result<Vec<SupportTopic>> {
        Ok(self.state.borrow().support_topics.clone())
    }

    fn update_service_request(
        &self,
        service_request_id: &str,
        update: ServiceRequestUpdate,
    ) -> Result<ServiceRequest> {
        let mut state = self.state.borrow_mut();
        let request = state
            .service_requests
            .iter_mut()
            .find(|request| request.id == service_request_id)
            .ok_or_else(|| Error::not_found("service request", service_request_id))?;

        if request.status == ServiceRequestStatus::Closed {
            return Err(Error::Conflict(format!(
                "service request `{service_request_id}` is closed"
            )));
        }

        if let Some(note) = update.note.filter(|note| !note.trim().is_empty()) {
            request.notes.push(note);
        }

        if let Some(status) = update.status {
            request.status = status;
        }

        info!("Updated service request `{service_request_id}`");

        Ok(request.clone())
    }

    fn account_balance(&self) -> Result<AccountBalance> {
        let amount = self
            .state
            .borrow()
            .invoices
            .iter()
            .map(|invoice| invoice.total_charges)
            .sum();

        Ok(AccountBalance {
            amount,
            currency: CURRENCY.to_string(),
        })
    }

    fn invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.state
            .borrow()
            .invoices
            .iter()
            .find(|invoice| invoice.id == invoice_id)
            .cloned()
            .ok_or_else(|| Error::not_found("invoice", invoice_id))
    }

    fn invoice_line_items(
        &self,
        invoice_id: &str,
        offset: usize,
        size: usize,
    ) -> Result<Page<InvoiceLineItem>> {
        let invoice = self.invoice(invoice_id)?;
        let state = self.state.borrow();
        let line_items: Vec<InvoiceLineItem> = state
            .invoice_line_items
            .iter()
            .filter(|line_item| line_item.invoice_id == invoice.id)
            .cloned()
            .collect();

        Ok(Page::slice(&line_items, offset, size))
    }

    fn invoices_page(&self, offset: usize, size: usize) -> Result<Page<Invoice>> {
        Ok(Page::slice(&self.state.borrow().invoices, offset, size))
    }

    fn profile(&self, kind: ProfileKind) -> Result<PartnerProfile> {
        self.state
            .borrow()
            .profiles
            .get(&kind)
            .cloned()
            .ok_or_else(|| Error::not_found("profile", &kind.to_string()))
    }

    fn update_profile(
        &self,
        kind: ProfileKind,
        field: &str,
        value: &str,
    ) -> Result<PartnerProfile> {
        let mut state = self.state.borrow_mut();
        let profile = state
            .profiles
            .get_mut(&kind)
            .ok_or_else(|| Error::not_found("profile", &kind.to_string()))?;

        let Some(current) = profile.fields.get_mut(field) else {
            return Err(Error::InvalidInput(format!(
                "the {kind} profile has no field `{field}`"
            )));
        };

        if value.trim().is_empty() {
            return Err(Error::InvalidInput(format!("`{field}` can't be empty")));
        }

        *current = value.trim().to_string();
        info!("Updated `{field}` of the {kind} profile");

        Ok(profile.clone())
    }
}

fn sample_address(first_name: &str, address_line1: &str, city: &str, postal_code: &str) -> Address {
    Address {
        first_name: first_name.to_string(),
        last_name: "Admin".to_string(),
        address_line1: address_line1.to_string(),
        city: city.to_string(),
        state: "WA".to_string(),
        country: "US".to_string(),
        postal_code: postal_code.to_string(),
        phone_number: "4255550100".to_string(),
    }
}

fn sample_customer(state: &mut SandboxState, company_name: &str, domain: &str) -> String {
    let id = state.next_id("cust");
    let first_name = company_name.split_whitespace().next().unwrap_or("Admin");

    state.customers.push(Customer {
        id: id.clone(),
        domain: domain.to_string(),
        billing_profile: CustomerBillingProfile {
            company_name: company_name.to_string(),
            email: format!("billing@{domain}"),
            culture: "EN-US".to_string(),
            language: "En".to_string(),
            default_address: sample_address(first_name, "1 Main Street", "Redmond", "98052"),
        },
    });

    id
}

#[allow(clippy::too_many_arguments)]
fn sample_offer(
    id: &str,
    name: &str,
    category_id: &str,
    unit_price: f64,
    maximum_quantity: u32,
    is_add_on: bool,
    add_on_ids: &[&str],
    upgrade_target_ids: &[&str],
) -> Offer {
    Offer {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} for organizations of every size"),
        category_id: category_id.to_string(),
        unit_price,
        minimum_quantity: 1,
        maximum_quantity,
        is_add_on,
        add_on_ids: add_on_ids.iter().map(ToString::to_string).collect(),
        upgrade_target_ids: upgrade_target_ids.iter().map(ToString::to_string).collect(),
    }
}

fn profile(kind: ProfileKind, fields: &[(&str, &str)]) -> PartnerProfile {
    PartnerProfile {
        kind,
        fields: fields
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect(),
    }
}

fn seed(state: &mut SandboxState) -> Result<()> {
    let contoso = sample_customer(state, "Contoso Ltd", "contoso.onmicrosoft.com");
    let fabrikam = sample_customer(state, "Fabrikam Inc", "fabrikam.onmicrosoft.com");
    sample_customer(state, "Tailspin Toys", "tailspintoys.onmicrosoft.com");
    sample_customer(state, "Wingtip Toys", "wingtiptoys.onmicrosoft.com");

    state.categories = vec![
        OfferCategory {
            id: "productivity".to_string(),
            name: "Productivity".to_string(),
        },
        OfferCategory {
            id: "security".to_string(),
            name: "Security".to_string(),
        },
    ];

    state.offers = vec![
        sample_offer(
            "office-business",
            "Office Business",
            "productivity",
            8.25,
            300,
            false,
            &["extra-storage"],
            &["office-enterprise"],
        ),
        sample_offer(
            "office-enterprise",
            "Office Enterprise",
            "productivity",
            20.0,
            10_000,
            false,
            &["extra-storage"],
            &[],
        ),
        sample_offer(
            "extra-storage",
            "Extra File Storage",
            "productivity",
            0.2,
            1_000,
            true,
            &[],
            &[],
        ),
        sample_offer(
            "defender",
            "Endpoint Defender",
            "security",
            5.0,
            5_000,
            false,
            &[],
            &[],
        ),
    ];

    state.resellers.insert(PARTNER_MPN_ID.to_string(), "Sample Partner".to_string());
    state
        .resellers
        .insert("5923411".to_string(), "Northwind Resellers".to_string());

    let contoso_lines = [
        NewOrderLine {
            offer_id: "office-business".to_string(),
            quantity: 25,
            friendly_name: Some("Contoso staff".to_string()),
        },
        NewOrderLine {
            offer_id: "defender".to_string(),
            quantity: 25,
            friendly_name: None,
        },
    ];
    let fabrikam_lines = [NewOrderLine {
        offer_id: "office-enterprise".to_string(),
        quantity: 120,
        friendly_name: None,
    }];

    state.place_order(&contoso, &contoso_lines, None)?;
    state.place_order(&fabrikam, &fabrikam_lines, None)?;

    if let Some(subscription) = state
        .subscriptions
        .iter_mut()
        .find(|subscription| subscription.customer_id == fabrikam)
    {
        subscription.partner_mpn_id = Some("5923411".to_string());
    }

    state.support_topics = vec![
        SupportTopic {
            id: "billing".to_string(),
            name: "Billing".to_string(),
            description: "Questions about invoices and charges".to_string(),
        },
        SupportTopic {
            id: "provisioning".to_string(),
            name: "Provisioning".to_string(),
            description: "Problems creating customers or subscriptions".to_string(),
        },
    ];

    let partner_request = state.next_id("sr");
    let customer_request = state.next_id("sr");
    state.service_requests = vec![
        ServiceRequest {
            id: partner_request,
            title: "Invoice total looks wrong".to_string(),
            description: "The last invoice includes a duplicated charge".to_string(),
            severity: Severity::Moderate,
            status: ServiceRequestStatus::Open,
            support_topic_id: "billing".to_string(),
            customer_id: None,
            notes: Vec::new(),
        },
        ServiceRequest {
            id: customer_request,
            title: "Mailboxes not provisioned".to_string(),
            description: "New users can't sign in to their mailboxes".to_string(),
            severity: Severity::Critical,
            status: ServiceRequestStatus::AttentionNeeded,
            support_topic_id: "provisioning".to_string(),
            customer_id: Some(contoso),
            notes: vec!["Escalated to the mail team".to_string()],
        },
    ];

    for (month, line_count) in [(1usize, 14usize), (2, 6), (3, 3)] {
        let invoice_id = format!("inv-2024{month:02}");
        let charges: Vec<f64> = (1..=line_count).map(|line| 10.0 * line as f64).collect();

        state.invoices.push(Invoice {
            id: invoice_id.clone(),
            invoice_date: format!("2024-{month:02}-01"),
            total_charges: charges.iter().sum(),
            currency: CURRENCY.to_string(),
        });

        for (line_number, charge) in charges.into_iter().enumerate() {
            state.invoice_line_items.push(InvoiceLineItem {
                invoice_id: invoice_id.clone(),
                line_number: line_number + 1,
                description: format!("Usage charge {}", line_number + 1),
                charge,
            });
        }
    }

    let profiles = [
        profile(
            ProfileKind::Billing,
            &[
                ("company_name", "Sample Partner"),
                ("email", "billing@samplepartner.example"),
                ("purchase_order_number", "PO-1001"),
            ],
        ),
        profile(
            ProfileKind::LegalBusiness,
            &[
                ("company_name", "Sample Partner LLC"),
                ("company_approver_email", "legal@samplepartner.example"),
                ("address", "1 Partner Way, Redmond WA 98052"),
            ],
        ),
        profile(
            ProfileKind::Organization,
            &[
                ("company_name", "Sample Partner"),
                ("default_domain", "samplepartner.onmicrosoft.com"),
                ("culture", "EN-US"),
            ],
        ),
        profile(
            ProfileKind::Mpn,
            &[("mpn_id", PARTNER_MPN_ID), ("partner_name", "Sample Partner")],
        ),
        profile(
            ProfileKind::Support,
            &[
                ("email", "support@samplepartner.example"),
                ("telephone", "4255550199"),
                ("website", "https://samplepartner.example/support"),
            ],
        ),
    ];

    state.profiles = profiles
        .into_iter()
        .map(|profile| (profile.kind, profile))
        .collect();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoso_id(sandbox: &SandboxPartner) -> String {
        sandbox
            .query_customers(CustomerSearchField::CompanyName, "contoso")
            .unwrap()[0]
            .id
            .clone()
    }

    #[test]
    fn test_seeded_sandbox_has_data() {
        let sandbox = SandboxPartner::seeded().unwrap();
        assert_eq!(sandbox.customers_page(0, 10).unwrap().total_count, 4);
        assert_eq!(sandbox.offers().unwrap().len(), 4);
        assert_eq!(sandbox.invoices_page(0, 10).unwrap().total_count, 3);
        assert_eq!(sandbox.support_topics().unwrap().len(), 2);
    }

    #[test]
    fn test_create_customer_rejects_taken_domain() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let existing = sandbox.customer(&contoso_id(&sandbox)).unwrap();

        let result = sandbox.create_customer(NewCustomer {
            domain: existing.domain.to_uppercase(),
            billing_profile: existing.billing_profile,
        });

        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[test]
    fn test_create_customer_then_available_is_false() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let template = sandbox.customer(&contoso_id(&sandbox)).unwrap();

        assert!(sandbox.check_domain_availability("new.onmicrosoft.com").unwrap());
        let created = sandbox
            .create_customer(NewCustomer {
                domain: "new.onmicrosoft.com".to_string(),
                billing_profile: template.billing_profile,
            })
            .unwrap();

        assert!(!sandbox.check_domain_availability("new.onmicrosoft.com").unwrap());
        assert_eq!(sandbox.customer(&created.id).unwrap(), created);
    }

    #[test]
    fn test_query_customers_by_domain_prefix() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let matches = sandbox
            .query_customers(CustomerSearchField::Domain, "FAB")
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].billing_profile.company_name, "Fabrikam Inc");
    }

    #[test]
    fn test_delete_customer_removes_subscriptions() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let customer_id = contoso_id(&sandbox);
        assert_eq!(sandbox.customer_subscriptions(&customer_id).unwrap().len(), 2);

        sandbox.delete_customer(&customer_id).unwrap();

        assert!(matches!(
            sandbox.customer(&customer_id),
            Err(Error::NotFound { .. })
        ));
        assert!(sandbox.customer_subscriptions(&customer_id).is_err());
    }

    #[test]
    fn test_create_order_creates_subscriptions() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let customer_id = contoso_id(&sandbox);

        let order = sandbox
            .create_order(
                &customer_id,
                vec![NewOrderLine {
                    offer_id: "defender".to_string(),
                    quantity: 3,
                    friendly_name: Some("Laptops".to_string()),
                }],
            )
            .unwrap();

        let subscriptions = sandbox
            .subscriptions_by_order(&customer_id, &order.id)
            .unwrap();
        assert_eq!(subscriptions.len(), 1);
        assert_eq!(subscriptions[0].friendly_name, "Laptops");
        assert_eq!(
            order.line_items[0].subscription_id.as_deref(),
            Some(subscriptions[0].id.as_str())
        );
    }

    #[test]
    fn test_create_order_rejects_quantity_out_of_range() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let result = sandbox.create_order(
            &contoso_id(&sandbox),
            vec![NewOrderLine {
                offer_id: "office-business".to_string(),
                quantity: 301,
                friendly_name: None,
            }],
        );

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_create_order_rejects_add_on_without_parent() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let result = sandbox.create_order(
            &contoso_id(&sandbox),
            vec![NewOrderLine {
                offer_id: "extra-storage".to_string(),
                quantity: 1,
                friendly_name: None,
            }],
        );

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_upgrade_and_add_on() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let customer_id = contoso_id(&sandbox);
        let office = sandbox
            .customer_subscriptions(&customer_id)
            .unwrap()
            .into_iter()
            .find(|s| s.offer_id == "office-business")
            .unwrap();

        let targets = sandbox.subscription_upgrades(&customer_id, &office.id).unwrap();
        assert_eq!(targets.len(), 1);

        let order = sandbox
            .add_subscription_add_on(&customer_id, &office.id, "extra-storage")
            .unwrap();
        let add_on_id = order.line_items[0].subscription_id.clone().unwrap();
        let add_on = sandbox.subscription(&customer_id, &add_on_id).unwrap();
        assert_eq!(add_on.parent_subscription_id.as_deref(), Some(office.id.as_str()));

        let upgraded = sandbox
            .upgrade_subscription(&customer_id, &office.id, &targets[0].id)
            .unwrap();
        assert_eq!(upgraded.offer_id, "office-enterprise");

        let again = sandbox.upgrade_subscription(&customer_id, &office.id, "office-business");
        assert!(matches!(again, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_subscription_of_other_customer_not_found() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let customer_id = contoso_id(&sandbox);
        let fabrikam = sandbox
            .query_customers(CustomerSearchField::CompanyName, "fabrikam")
            .unwrap()
            .remove(0);
        let fabrikam_subscription = sandbox.customer_subscriptions(&fabrikam.id).unwrap().remove(0);

        let result = sandbox.subscription(&customer_id, &fabrikam_subscription.id);
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_usage_summary_sums_subscriptions() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let customer_id = contoso_id(&sandbox);
        let summary = sandbox.customer_usage_summary(&customer_id).unwrap();

        // 25 seats of Office Business at 8.25 plus 25 seats of Defender at 5.0
        assert!((summary.total_cost - 331.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verify_mpn_id() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let profile = sandbox.verify_mpn_id("5923411").unwrap();
        assert_eq!(profile.fields["partner_name"], "Northwind Resellers");
        assert!(sandbox.verify_mpn_id("0000000").is_err());
    }

    #[test]
    fn test_service_request_lifecycle() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let created = sandbox
            .create_service_request(NewServiceRequest {
                title: "Cannot sign in".to_string(),
                description: "Partner center sign in fails".to_string(),
                severity: Severity::Minimal,
                support_topic_id: "provisioning".to_string(),
            })
            .unwrap();

        let updated = sandbox
            .update_service_request(
                &created.id,
                ServiceRequestUpdate {
                    status: Some(ServiceRequestStatus::Closed),
                    note: Some("Resolved".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.notes, vec!["Resolved".to_string()]);

        let closed = sandbox.update_service_request(&created.id, ServiceRequestUpdate::default());
        assert!(matches!(closed, Err(Error::Conflict(_))));
    }

    #[test]
    fn test_invoice_line_items_paged() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let first = sandbox.invoice_line_items("inv-202401", 0, 10).unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.next_offset(), Some(10));

        let second = sandbox.invoice_line_items("inv-202401", 10, 10).unwrap();
        assert_eq!(second.items.len(), 4);
        assert_eq!(second.next_offset(), None);
    }

    #[test]
    fn test_update_profile_unknown_field() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let result = sandbox.update_profile(ProfileKind::Support, "fax", "123");
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let updated = sandbox
            .update_profile(ProfileKind::Support, "telephone", "4255550111")
            .unwrap();
        assert_eq!(updated.fields["telephone"], "4255550111");
    }

    #[test]
    fn test_validate_address() {
        let sandbox = SandboxPartner::empty();
        let mut address = sample_address("Ada", "1 Main Street", "Redmond", "98052");
        assert!(sandbox.validate_address(&address).unwrap());

        address.postal_code = "98O52".to_string();
        assert!(!sandbox.validate_address(&address).unwrap());

        address.country = "GB".to_string();
        address.postal_code = "SW1A 1AA".to_string();
        assert!(sandbox.validate_address(&address).unwrap());
    }

    #[test]
    fn test_seeded_orders_are_placed() {
        let sandbox = SandboxPartner::seeded().unwrap();
        let orders = sandbox.orders(&contoso_id(&sandbox)).unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].line_items.len(), 2);
    }

    #[test]
    fn test_seed_order_with_unknown_offer_is_reported() {
        let mut state = SandboxState::default();
        let customer_id = sample_customer(&mut state, "Contoso Ltd", "contoso.onmicrosoft.com");
        let line = NewOrderLine {
            offer_id: "office-basic".to_string(),
            quantity: 1,
            friendly_name: None,
        };

        let result = state.place_order(&customer_id, &[line], None);

        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert!(state.orders.is_empty());
    }
}
