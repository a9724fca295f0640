//! Settings for scenario-deck.
//!
//! This module defines the settings snapshot that scenarios read configured
//! values from, and resolves the settings file path, expanding shell
//! variables like `~`.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the scenario settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.scenario-deck/settings.yml";

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_SUBSCRIPTION_DISPLAY_LIMIT: usize = 25;
const DEFAULT_CUSTOMER_DOMAIN_SUFFIX: &str = "onmicrosoft.com";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use scenario_deck_core::config::get_settings_path;
///
/// // Use default path
/// let default_path = get_settings_path(&None);
///
/// // Use custom path
/// let custom_path = get_settings_path(&Some("/path/to/settings.yml".to_string()));
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

/// The semantic names a scenario can look a configured value up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredValue {
    CustomerId,
    CustomerIdToDelete,
    MpnId,
    OfferId,
    OrderId,
    SubscriptionId,
    InvoiceId,
    ServiceRequestId,
    SupportTopicId,
}

/// Read-only settings snapshot, loaded once at start up.
///
/// Every identifier is optional: a missing (or blank) value means the
/// scenario has to ask for it.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioSettings {
    pub customer_domain_suffix: Option<String>,
    pub customer_id_to_delete: Option<String>,
    pub default_customer_id: Option<String>,
    pub partner_mpn_id: Option<String>,
    pub default_offer_id: Option<String>,
    pub default_order_id: Option<String>,
    pub default_subscription_id: Option<String>,
    pub default_invoice_id: Option<String>,
    pub default_service_request_id: Option<String>,
    pub default_support_topic_id: Option<String>,
    pub customer_page_size: Option<usize>,
    pub default_offer_page_size: Option<usize>,
    pub invoice_page_size: Option<usize>,
    pub service_request_page_size: Option<usize>,
    pub subscription_display_limit: Option<usize>,
}

impl ScenarioSettings {
    /// Looks up a configured value. Blank values count as absent.
    #[must_use]
    pub fn value(&self, key: ConfiguredValue) -> Option<&str> {
        let value = match key {
            ConfiguredValue::CustomerId => &self.default_customer_id,
            ConfiguredValue::CustomerIdToDelete => &self.customer_id_to_delete,
            ConfiguredValue::MpnId => &self.partner_mpn_id,
            ConfiguredValue::OfferId => &self.default_offer_id,
            ConfiguredValue::OrderId => &self.default_order_id,
            ConfiguredValue::SubscriptionId => &self.default_subscription_id,
            ConfiguredValue::InvoiceId => &self.default_invoice_id,
            ConfiguredValue::ServiceRequestId => &self.default_service_request_id,
            ConfiguredValue::SupportTopicId => &self.default_support_topic_id,
        };

        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    #[must_use]
    pub fn customer_domain_suffix(&self) -> &str {
        self.customer_domain_suffix
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_DOMAIN_SUFFIX)
    }

    #[must_use]
    pub fn customer_page_size(&self) -> usize {
        self.customer_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn offer_page_size(&self) -> usize {
        self.default_offer_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn invoice_page_size(&self) -> usize {
        self.invoice_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn service_request_page_size(&self) -> usize {
        self.service_request_page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn subscription_display_limit(&self) -> usize {
        self.subscription_display_limit
            .unwrap_or(DEFAULT_SUBSCRIPTION_DISPLAY_LIMIT)
    }

    /// Rejects settings the scenarios cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`] for a zero page size or display limit.
    pub fn validate(&self) -> Result<()> {
        let counters = [
            ("customer_page_size", self.customer_page_size),
            ("default_offer_page_size", self.default_offer_page_size),
            ("invoice_page_size", self.invoice_page_size),
            ("service_request_page_size", self.service_request_page_size),
            ("subscription_display_limit", self.subscription_display_limit),
        ];

        for (key, value) in counters {
            if value == Some(0) {
                return Err(Error::invalid_setting(key, "must be greater than zero"));
            }
        }

        Ok(())
    }
}
