//! Rated usage samples.

use indexmap::IndexMap;

use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::ResourceUsage;

use super::show;

pub fn get_customer_usage_summary(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;

    show(
        context,
        "Retrieving customer usage summary",
        "Customer usage summary",
        || context.operations().customer_usage_summary(&customer_id),
    )
}

pub fn get_customer_subscriptions_usage(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;
    let operations = context.operations();

    show(
        context,
        "Retrieving customer subscriptions usage",
        "Customer subscriptions usage",
        || {
            operations
                .customer_subscriptions(&customer_id)?
                .iter()
                .map(|subscription| {
                    operations.subscription_usage_summary(&customer_id, &subscription.id)
                })
                .collect::<Result<Vec<_>>>()
        },
    )
}

pub fn get_subscription_resource_usage(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let subscription_id = resolver.obtain_subscription_id(&customer_id, None)?;

    show(
        context,
        "Retrieving subscription resource usage",
        "Subscription resource usage",
        || {
            context
                .operations()
                .subscription_resource_usage(&customer_id, &subscription_id)
        },
    )
}

/// Groups usage records by their category, keeping first-seen order.
fn group_by_category(records: Vec<ResourceUsage>) -> IndexMap<String, Vec<ResourceUsage>> {
    let mut grouped: IndexMap<String, Vec<ResourceUsage>> = IndexMap::new();

    for record in records {
        grouped.entry(record.category.clone()).or_default().push(record);
    }

    grouped
}

pub fn get_subscription_usage_records(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let subscription_id = resolver.obtain_subscription_id(&customer_id, None)?;

    show(
        context,
        "Retrieving subscription usage records",
        "Subscription usage records by category",
        || {
            context
                .operations()
                .subscription_resource_usage(&customer_id, &subscription_id)
                .map(group_by_category)
        },
    )
}

pub fn get_subscription_usage_summary(context: &ScenarioContext) -> Result<()> {
    let resolver = context.resolver();
    let customer_id = resolver.obtain_customer_id(None)?;
    let subscription_id = resolver.obtain_subscription_id(&customer_id, None)?;

    show(
        context,
        "Retrieving subscription usage summary",
        "Subscription usage summary",
        || {
            context
                .operations()
                .subscription_usage_summary(&customer_id, &subscription_id)
        },
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::samples::testing::{context, context_with, CONTOSO};
    use scenario_deck_core::config::ScenarioSettings;
    use scenario_deck_core::console::ScriptedConsole;

    fn configured() -> ScenarioSettings {
        ScenarioSettings {
            default_customer_id: Some(CONTOSO.to_string()),
            default_subscription_id: Some("sub-0006".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_customer_subscriptions_usage_one_entry_per_subscription() {
        let console = Rc::new(ScriptedConsole::new().with_inputs([CONTOSO]));

        get_customer_subscriptions_usage(&context(&console)).unwrap();

        assert_eq!(console.objects()[0].1.as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn test_usage_records_grouped_by_category() {
        let console = Rc::new(ScriptedConsole::new());

        get_subscription_usage_records(&context_with(&console, configured())).unwrap();

        let records = &console.objects()[0].1;
        let categories: Vec<String> = records
            .as_mapping()
            .unwrap()
            .keys()
            .map(|key| key.as_str().unwrap().to_string())
            .collect();
        assert_eq!(categories, vec!["Compute", "Storage"]);
    }

    #[test]
    fn test_subscription_usage_summary() {
        let console = Rc::new(ScriptedConsole::new());

        get_subscription_usage_summary(&context_with(&console, configured())).unwrap();

        assert_eq!(
            console.objects()[0].1["total_cost"],
            serde_yaml::Value::from(206.25)
        );
    }
}
