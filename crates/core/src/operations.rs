//! The partner API surface the sample scenarios exercise.
//!
//! The engine treats every call as a black box that may block and may fail;
//! it never looks at results beyond handing them to the console.

use crate::error::Result;
use crate::models::{
    AccountBalance, Address, Customer, CustomerBillingProfile, CustomerSearchField, Invoice,
    InvoiceLineItem, ManagedService, NewCustomer, NewOrderLine, NewServiceRequest, Offer,
    OfferCategory, Order, Page, PartnerProfile, ProfileKind, ResourceUsage, ServiceRequest,
    ServiceRequestUpdate, Subscription, SubscriptionUpdate, SupportTopic, UsageSummary,
};

/// Operations a partner can perform against its commerce account.
pub trait PartnerOperations {
    // Customers
    fn create_customer(&self, customer: NewCustomer) -> Result<Customer>;
    fn check_domain_availability(&self, domain: &str) -> Result<bool>;
    fn customers_page(&self, offset: usize, size: usize) -> Result<Page<Customer>>;
    fn query_customers(&self, field: CustomerSearchField, prefix: &str) -> Result<Vec<Customer>>;
    fn customer(&self, customer_id: &str) -> Result<Customer>;
    fn delete_customer(&self, customer_id: &str) -> Result<()>;
    fn customer_subscriptions(&self, customer_id: &str) -> Result<Vec<Subscription>>;
    fn update_customer_billing_profile(
        &self,
        customer_id: &str,
        billing_profile: CustomerBillingProfile,
    ) -> Result<Customer>;
    fn validate_address(&self, address: &Address) -> Result<bool>;
    fn customer_managed_services(&self, customer_id: &str) -> Result<Vec<ManagedService>>;
    fn customer_relationship_request(&self) -> Result<String>;

    // Indirect partners
    fn verify_mpn_id(&self, mpn_id: &str) -> Result<PartnerProfile>;
    fn subscriptions_by_mpn_id(&self, customer_id: &str, mpn_id: &str)
        -> Result<Vec<Subscription>>;

    // Offers
    fn offer(&self, offer_id: &str) -> Result<Offer>;
    fn offer_categories(&self) -> Result<Vec<OfferCategory>>;
    fn offers(&self) -> Result<Vec<Offer>>;
    fn offers_page(&self, offset: usize, size: usize) -> Result<Page<Offer>>;

    // Orders
    fn create_order(&self, customer_id: &str, lines: Vec<NewOrderLine>) -> Result<Order>;
    fn order(&self, customer_id: &str, order_id: &str) -> Result<Order>;
    fn orders(&self, customer_id: &str) -> Result<Vec<Order>>;

    // Subscriptions
    fn subscription(&self, customer_id: &str, subscription_id: &str) -> Result<Subscription>;
    fn subscriptions_by_order(&self, customer_id: &str, order_id: &str)
        -> Result<Vec<Subscription>>;
    fn update_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Subscription>;
    fn subscription_upgrades(&self, customer_id: &str, subscription_id: &str)
        -> Result<Vec<Offer>>;
    fn upgrade_subscription(
        &self,
        customer_id: &str,
        subscription_id: &str,
        target_offer_id: &str,
    ) -> Result<Subscription>;
    fn add_subscription_add_on(
        &self,
        customer_id: &str,
        subscription_id: &str,
        add_on_offer_id: &str,
    ) -> Result<Order>;

    // Rated usage
    fn customer_usage_summary(&self, customer_id: &str) -> Result<UsageSummary>;
    fn subscription_usage_summary(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<UsageSummary>;
    fn subscription_resource_usage(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<Vec<ResourceUsage>>;

    // Service requests
    fn create_service_request(&self, request: NewServiceRequest) -> Result<ServiceRequest>;
    fn customer_service_requests(&self, customer_id: &str) -> Result<Vec<ServiceRequest>>;
    fn service_requests_page(&self, offset: usize, size: usize) -> Result<Page<ServiceRequest>>;
    fn service_request(&self, service_request_id: &str) -> Result<ServiceRequest>;
    fn support_topics(&self) -> Result<Vec<SupportTopic>>;
    fn update_service_request(
        &self,
        service_request_id: &str,
        update: ServiceRequestUpdate,
    ) -> Result<ServiceRequest>;

    // Invoices
    fn account_balance(&self) -> Result<AccountBalance>;
    fn invoice(&self, invoice_id: &str) -> Result<Invoice>;
    fn invoice_line_items(
        &self,
        invoice_id: &str,
        offset: usize,
        size: usize,
    ) -> Result<Page<InvoiceLineItem>>;
    fn invoices_page(&self, offset: usize, size: usize) -> Result<Page<Invoice>>;

    // Partner profile
    fn profile(&self, kind: ProfileKind) -> Result<PartnerProfile>;
    fn update_profile(&self, kind: ProfileKind, field: &str, value: &str)
        -> Result<PartnerProfile>;
}
