//! Service request samples.

use log::debug;

use scenario_deck_core::console::render_object;
use scenario_deck_core::context::ScenarioContext;
use scenario_deck_core::error::Result;
use scenario_deck_core::models::{
    NewServiceRequest, ServiceRequestStatus, ServiceRequestUpdate, Severity,
};

use super::{choose_item, show, show_pages, with_progress};

const SEVERITIES: [Severity; 3] = [Severity::Minimal, Severity::Moderate, Severity::Critical];

pub fn create_service_request(context: &ScenarioContext) -> Result<()> {
    let console = context.console();

    let title = console.read_non_empty_string(
        "Enter the service request title",
        "The service request title can't be empty",
    )?;
    let description = console.read_non_empty_string(
        "Enter the service request description",
        "The service request description can't be empty",
    )?;

    let Some(&severity) = choose_item(context, "Select the severity", &SEVERITIES, |severity| {
        format!("{severity:?}")
    })?
    else {
        debug!("No severity chosen, service request `{title}` dropped");
        return Ok(());
    };

    let support_topic_id = context.resolver().obtain_support_topic_id(None)?;

    let request = NewServiceRequest {
        title,
        description,
        severity,
        support_topic_id,
    };

    let created = with_progress(context, "Creating service request", || {
        context.operations().create_service_request(request)
    })?;

    console.success("Service request created")?;
    render_object(console, &created, "Created service request")
}

pub fn get_customer_service_requests(context: &ScenarioContext) -> Result<()> {
    let customer_id = context.resolver().obtain_customer_id(None)?;

    show(
        context,
        "Retrieving customer service requests",
        "Customer service requests",
        || context.operations().customer_service_requests(&customer_id),
    )
}

pub fn get_paged_service_requests(context: &ScenarioContext) -> Result<()> {
    show_pages(
        context,
        "Querying service requests",
        "Service requests",
        context.settings().service_request_page_size(),
        |offset, size| context.operations().service_requests_page(offset, size),
    )
}

pub fn get_service_request_details(context: &ScenarioContext) -> Result<()> {
    let service_request_id = context.resolver().obtain_service_request_id(None)?;

    show(
        context,
        "Retrieving service request",
        "Service request details",
        || context.operations().service_request(&service_request_id),
    )
}

pub fn get_support_topics(context: &ScenarioContext) -> Result<()> {
    show(context, "Retrieving support topics", "Support topics", || {
        context.operations().support_topics()
    })
}

pub fn update_service_request(context: &ScenarioContext) -> Result<()> {
    let console = context.console();
    let service_request_id = context
        .resolver()
        .obtain_service_request_id(Some("Enter the ID of the service request to update"))?;

    let note = console.read_non_empty_string(
        "Enter a note to add",
        "The note can't be empty",
    )?;
    let status = console
        .confirm("Close the service request?")?
        .then_some(ServiceRequestStatus::Closed);

    let update = ServiceRequestUpdate {
        status,
        note: Some(note),
    };

    let updated = with_progress(context, "Updating service request", || {
        context
            .operations()
            .update_service_request(&service_request_id, update)
    })?;

    console.success("Service request updated")?;
    render_object(console, &updated, "Updated service request")
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::samples::testing::{context, context_with, CONTOSO};
    use scenario_deck_core::config::ScenarioSettings;
    use scenario_deck_core::console::ScriptedConsole;
    use scenario_deck_core::error::Error;

    #[test]
    fn test_create_service_request() {
        let console = Rc::new(
            ScriptedConsole::new()
                .with_inputs(["Cannot sign in", "Users get an error", "provisioning"])
                .with_choices([Some(2)]),
        );

        create_service_request(&context(&console)).unwrap();

        let (caption, created) = console.objects().pop().unwrap();
        assert_eq!(caption, "Created service request");
        assert_eq!(created["severity"], serde_yaml::Value::from("Critical"));
        assert_eq!(created["status"], serde_yaml::Value::from("Open"));
    }

    #[test]
    fn test_create_service_request_unknown_topic() {
        let console = Rc::new(
            ScriptedConsole::new()
                .with_inputs(["Title", "Description"])
                .with_choices([Some(0)]),
        );
        let settings = ScenarioSettings {
            default_support_topic_id: Some("gardening".to_string()),
            ..Default::default()
        };

        let result = create_service_request(&context_with(&console, settings));

        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_get_customer_service_requests() {
        let console = Rc::new(ScriptedConsole::new().with_inputs([CONTOSO]));

        get_customer_service_requests(&context(&console)).unwrap();

        let requests = &console.objects()[0].1;
        assert_eq!(requests.as_sequence().map(Vec::len), Some(1));
        assert_eq!(requests[0]["status"], serde_yaml::Value::from("AttentionNeeded"));
    }

    #[test]
    fn test_get_paged_service_requests_single_page() {
        let console = Rc::new(ScriptedConsole::new());

        get_paged_service_requests(&context(&console)).unwrap();

        assert_eq!(console.objects()[0].0, "Service requests 1-1 of 1");
        assert_eq!(console.prompt_count(), 0);
    }

    #[test]
    fn test_update_service_request_closes_it() {
        let console = Rc::new(ScriptedConsole::new().with_inputs([
            "sr-0010",
            "Refund issued",
            "y",
            "sr-0010",
            "Again",
            "n",
        ]));
        let context = context(&console);

        update_service_request(&context).unwrap();

        let updated = &console.objects()[0].1;
        assert_eq!(updated["status"], serde_yaml::Value::from("Closed"));
        assert_eq!(updated["notes"][0], serde_yaml::Value::from("Refund issued"));

        // Closed requests can't be updated again
        let result = update_service_request(&context);
        assert!(matches!(result, Err(Error::Conflict(_))));
    }
}
