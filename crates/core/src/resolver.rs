//! Configured values first, prompts second.

use log::debug;

use crate::config::ConfiguredValue;
use crate::console::render_object;
use crate::context::ScenarioContext;
use crate::error::Result;

/// Resolves the identifiers a scenario works with.
///
/// A value present in the settings is used as is and announced on the
/// console, otherwise the user is asked until a non-empty value is given.
pub struct ValueResolver<'a> {
    context: &'a ScenarioContext,
}

impl<'a> ValueResolver<'a> {
    #[must_use]
    pub fn new(context: &'a ScenarioContext) -> Self {
        Self { context }
    }

    /// Returns `configured` when it is not blank, otherwise prompts with
    /// `prompt` and reports `error_message` after every empty answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain(
        &self,
        configured: Option<&str>,
        label: &str,
        prompt: &str,
        error_message: &str,
    ) -> Result<String> {
        let console = self.context.console();

        match configured.filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                debug!("Using configured {label} `{value}`");
                console.write_line(&format!("Found {label}: {value} in configuration."))?;
                Ok(value.to_string())
            }
            None => console.read_non_empty_string(prompt, error_message),
        }
    }

    fn obtain_configured(
        &self,
        key: ConfiguredValue,
        label: &str,
        prompt: Option<&str>,
        default_prompt: &str,
        error_message: &str,
    ) -> Result<String> {
        let prompt = prompt
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or(default_prompt);

        self.obtain(
            self.context.settings().value(key),
            label,
            prompt,
            error_message,
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_customer_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::CustomerId,
            "customer ID",
            prompt,
            "Enter the customer ID",
            "The customer ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_customer_id_to_delete(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::CustomerIdToDelete,
            "customer ID to delete",
            prompt,
            "Enter the ID of the customer to delete",
            "The customer ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_mpn_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::MpnId,
            "MPN ID",
            prompt,
            "Enter the MPN ID",
            "The MPN ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_offer_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::OfferId,
            "offer ID",
            prompt,
            "Enter the offer ID",
            "The offer ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_order_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::OrderId,
            "order ID",
            prompt,
            "Enter the order ID",
            "The order ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_invoice_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::InvoiceId,
            "invoice ID",
            prompt,
            "Enter the invoice ID",
            "The invoice ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_service_request_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::ServiceRequestId,
            "service request ID",
            prompt,
            "Enter the service request ID",
            "The service request ID can't be empty",
        )
    }

    /// # Errors
    ///
    /// Returns an error if the console fails or input is exhausted.
    pub fn obtain_support_topic_id(&self, prompt: Option<&str>) -> Result<String> {
        self.obtain_configured(
            ConfiguredValue::SupportTopicId,
            "support topic ID",
            prompt,
            "Enter the support topic ID",
            "The support topic ID can't be empty",
        )
    }

    /// Resolves a subscription of `customer_id`.
    ///
    /// Without a configured subscription ID the customer's subscriptions are
    /// listed first, at most `subscription_display_limit` of them.
    ///
    /// # Errors
    ///
    /// Returns an error if listing the subscriptions fails, the console fails
    /// or input is exhausted.
    pub fn obtain_subscription_id(&self, customer_id: &str, prompt: Option<&str>) -> Result<String> {
        let console = self.context.console();
        let configured = self.context.settings().value(ConfiguredValue::SubscriptionId);

        if let Some(value) = configured {
            console.write_line(&format!("Found subscription ID: {value} in configuration."))?;
            return Ok(value.to_string());
        }

        console.start_progress("Retrieving customer subscriptions")?;
        let subscriptions = self
            .context
            .operations()
            .customer_subscriptions(customer_id)?;
        console.stop_progress()?;

        let limit = self.context.settings().subscription_display_limit();
        let shown = subscriptions.len().min(limit);

        render_object(console, &subscriptions[..shown], "Customer subscriptions")?;

        if shown < subscriptions.len() {
            console.write_line(&format!(
                "Showing {shown} of {} subscriptions.",
                subscriptions.len()
            ))?;
        }

        let prompt = prompt
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or("Enter the subscription ID");

        console.read_non_empty_string(prompt, "The subscription ID can't be empty")
    }
}
