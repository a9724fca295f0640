//! Resources exchanged with the partner operation set.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerBillingProfile {
    pub company_name: String,
    pub email: String,
    pub culture: String,
    pub language: String,
    pub default_address: Address,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub domain: String,
    pub billing_profile: CustomerBillingProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub domain: String,
    pub billing_profile: CustomerBillingProfile,
}

/// Customer fields that can be searched by prefix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSearchField {
    CompanyName,
    Domain,
}

impl Display for CustomerSearchField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerSearchField::CompanyName => formatter.write_str("company name"),
            CustomerSearchField::Domain => formatter.write_str("domain"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManagedService {
    pub id: String,
    pub name: String,
    pub admin_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub unit_price: f64,
    pub minimum_quantity: u32,
    pub maximum_quantity: u32,
    pub is_add_on: bool,
    pub add_on_ids: Vec<String>,
    pub upgrade_target_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OfferCategory {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub line_item_number: usize,
    pub offer_id: String,
    pub quantity: u32,
    pub friendly_name: Option<String>,
    pub subscription_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub line_items: Vec<OrderLineItem>,
}

/// One line of an order to be placed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub offer_id: String,
    pub quantity: u32,
    pub friendly_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Suspended,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub customer_id: String,
    pub offer_id: String,
    pub order_id: String,
    pub friendly_name: String,
    pub quantity: u32,
    pub status: SubscriptionStatus,
    pub parent_subscription_id: Option<String>,
    pub partner_mpn_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SubscriptionUpdate {
    pub friendly_name: Option<String>,
    pub quantity: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsageSummary {
    pub resource_id: String,
    pub resource_name: String,
    pub total_cost: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceUsage {
    pub subscription_id: String,
    pub resource_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Minimal,
    Moderate,
    Critical,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRequestStatus {
    Open,
    AttentionNeeded,
    Closed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: ServiceRequestStatus,
    pub support_topic_id: String,
    pub customer_id: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewServiceRequest {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub support_topic_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServiceRequestUpdate {
    pub status: Option<ServiceRequestStatus>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupportTopic {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub amount: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub invoice_date: String,
    pub total_charges: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceLineItem {
    pub invoice_id: String,
    pub line_number: usize,
    pub description: String,
    pub charge: f64,
}

/// The partner's own profiles.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    Billing,
    LegalBusiness,
    Organization,
    Mpn,
    Support,
}

impl Display for ProfileKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProfileKind::Billing => "billing",
            ProfileKind::LegalBusiness => "legal business",
            ProfileKind::Organization => "organization",
            ProfileKind::Mpn => "MPN",
            ProfileKind::Support => "support",
        };

        formatter.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PartnerProfile {
    pub kind: ProfileKind,
    pub fields: IndexMap<String, String>,
}

/// One page of a larger listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub total_count: usize,
}

impl<T: Clone> Page<T> {
    /// Cuts the page starting at `offset` out of `items`.
    #[must_use]
    pub fn slice(items: &[T], offset: usize, size: usize) -> Self {
        let items_in_page = items.iter().skip(offset).take(size).cloned().collect();

        Self {
            items: items_in_page,
            offset,
            total_count: items.len(),
        }
    }
}

impl<T> Page<T> {
    /// Offset of the following page, if there is one.
    #[must_use]
    pub fn next_offset(&self) -> Option<usize> {
        let next = self.offset + self.items.len();
        (!self.items.is_empty() && next < self.total_count).then_some(next)
    }
}
