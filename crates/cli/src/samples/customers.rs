//! Customer samples.

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::{
    Address, CustomerBillingProfile, CustomerSearchField, NewCustomer,
};

use super::{show, show_pages, with_progress};

/// A new customer whose domain and company name carry the given numbers.
fn sample_customer(domain_number: u32, company_number: u32, domain_suffix: &str) -> NewCustomer {
    NewCustomer {
        domain: format!("SampleApplication{domain_number}.{domain_suffix}"),
        billing_profile: CustomerBillingProfile {
            company_name: format!("Some Company{company_number}"),
            email: "SomeEmail@Outlook.com".to_string(),
            culture: "EN-US".to_string(),
            language: "En".to_string(),
            default_address: Address {
                first_name: "Admin".to_string(),
                last_name: "In Test".to_string(),
                address_line1: "One Microsoft Way".to_string(),
                city: "Redmond".to_string(),
                state: "WA".to_string(),
                country: "US".to_string(),
                postal_code: "98052".to_string(),
                phone_number: "4257778899".to_string(),
            },
        },
    }
}

pub fn create_customer(context: &ScenarioContext) -> Result<()> {
    let new_customer = sample_customer(
        fastrand::u32(..),
        fastrand::u32(..),
        context.settings().customer_domain_suffix(),
    );

    let customer = with_progress(context, "Creating user", || {
        context.operations().create_customer(new_customer)
    })?;

    context.console().success("Success!")?;
    render_object(context.console(), &customer, "Created user Information")
}

pub fn check_domain_availability(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let prefix = console.read_non_empty_string(
        "Enter the domain prefix to check",
        "The domain prefix can't be empty",
    )?;
    let domain = format!("{prefix}.{}", context.settings().customer_domain_suffix());

    let is_available = with_progress(context, "Checking domain availability", || {
        context.operations().check_domain_availability(&domain)
    })?;

    if is_available {
        console.success(&format!("The domain {domain} is available"))
    } else {
        console.write_line(&format!("The domain {domain} is already taken"))
    }
}

pub fn get_paged_customers(context: &ScenarioContext) -> Result<()> {
    show_pages(
        context,
        "Querying customers",
        "Customers",
        context.settings().customer_page_size(),
        |offset, size| context.operations().customers_page(offset, size),
    )
}

pub fn filter_customers(context: &ScenarioContext, field: CustomerSearchField) -> Result<()> {
    let prefix = context.console().read_non_empty_string(
        "Enter the prefix to search for",
        "The entered prefix is empty",
    )?;

    show(context, "Filtering", "Customer matches", || {
        context.operations().query_customers(field, &prefix)
    })
}

pub fn get_customer_details(context: &ScenarioContext) -> Result<()> {
    let customer_id = context
        .resolver()
        .obtain_customer_id(Some("Enter the ID of the customer to retrieve"))?;

    show(context, "Retrieving customer", "Customer details", || {
        context.operations().customer(&customer_id)
    })
}

pub fn delete_customer(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id_to_delete(None)?;

    with_progress(context, "Deleting customer", || {
        context.operations().delete_customer(&customer_id)
    })?;

    context
        .console()
        .success(&format!("Customer {customer_id} successfully deleted"))
}

pub fn get_customer_managed_services(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;

    show(
        context,
        "Retrieving customer managed services",
        "Customer managed services",
        || context.operations().customer_managed_services(&customer_id),
    )
}

pub fn get_customer_relationship_request(context: &ScenarioContext) -> Result<()> {
    let link = with_progress(context, "Retrieving customer relationship request", || {
        context.operations().customer_relationship_request()
    })?;

    context
        .console()
        .write_line(&format!("Share this link with the customer: {link}"))
}

pub fn update_customer_billing_profile(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let customer_id = context
        .resolver()
        .obtain_customer_id(Some("Enter the ID of the customer to update"))?;

    let customer = with_progress(context, "Retrieving customer", || {
        context.operations().customer(&customer_id)
    })?;
    render_object(console, &customer.billing_profile, "Current billing profile")?;

    let mut billing_profile = customer.billing_profile;
    billing_profile.company_name = console.read_non_empty_string(
        "Enter the new company name",
        "The company name can't be empty",
    )?;

    let updated = with_progress(context, "Updating billing profile", || {
        context
            .operations()
            .update_customer_billing_profile(&customer_id, billing_profile)
    })?;

    console.success("Billing profile updated")?;
    render_object(console, &updated.billing_profile, "Updated billing profile")
}

pub fn validate_customer_address(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let read = |prompt: &str, error_message: &str| {
        console.read_non_empty_string(prompt, error_message)
    };

    let address = Address {
        first_name: String::new(),
        last_name: String::new(),
        address_line1: read("Enter the address line", "The address line can't be empty")?,
        city: read("Enter the city", "The city can't be empty")?,
        state: read("Enter the state", "The state can't be empty")?,
        country: read("Enter the two letter country code", "The country can't be empty")?,
        postal_code: read("Enter the postal code", "The postal code can't be empty")?,
        phone_number: String::new(),
    };

    let is_valid = with_progress(context, "Validating address", || {
        context.operations().validate_address(&address)
    })?;

    if is_valid {
        console.success("The address is valid")
    } else {
        console.error("The address is not valid")
    }
}
