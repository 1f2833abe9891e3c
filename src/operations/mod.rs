//! Catalogue of Pinpoint operations.
//!
//! Each operation is a `static` [`OperationDescriptor`]. Fields bound into
//! the URI sit at the top level of the request value under their own name;
//! payload fields sit under the operation's payload member.

use crate::command::{FieldDescriptor, FieldKind, OperationDescriptor};

pub mod apps;
pub mod campaigns;
pub mod channels;
pub mod endpoints;
pub mod events;
pub mod journeys;
pub mod messages;
pub mod segments;
pub mod tags;
pub mod templates;

/// The application every app-scoped operation is addressed by.
pub(crate) const APPLICATION_ID: FieldDescriptor =
    FieldDescriptor::required("ApplicationId", "ApplicationId", FieldKind::String)
        .in_uri("application-id");

static ALL: [&OperationDescriptor; 32] = [
    &apps::CREATE_APP,
    &apps::GET_APP,
    &apps::DELETE_APP,
    &apps::UPDATE_APPLICATION_SETTINGS,
    &campaigns::CREATE_CAMPAIGN,
    &campaigns::UPDATE_CAMPAIGN,
    &campaigns::DELETE_CAMPAIGN,
    &segments::CREATE_SEGMENT,
    &segments::DELETE_SEGMENT,
    &journeys::CREATE_JOURNEY,
    &journeys::DELETE_JOURNEY,
    &journeys::UPDATE_JOURNEY_STATE,
    &templates::CREATE_EMAIL_TEMPLATE,
    &templates::UPDATE_EMAIL_TEMPLATE,
    &templates::DELETE_EMAIL_TEMPLATE,
    &templates::CREATE_SMS_TEMPLATE,
    &templates::DELETE_SMS_TEMPLATE,
    &channels::UPDATE_EMAIL_CHANNEL,
    &channels::DELETE_EMAIL_CHANNEL,
    &channels::UPDATE_SMS_CHANNEL,
    &channels::DELETE_SMS_CHANNEL,
    &channels::UPDATE_GCM_CHANNEL,
    &channels::DELETE_GCM_CHANNEL,
    &endpoints::UPDATE_ENDPOINT,
    &endpoints::DELETE_ENDPOINT,
    &endpoints::DELETE_USER_ENDPOINTS,
    &endpoints::REMOVE_ATTRIBUTES,
    &events::PUT_EVENTS,
    &messages::SEND_MESSAGES,
    &messages::SEND_USERS_MESSAGES,
    &tags::TAG_RESOURCE,
    &tags::UNTAG_RESOURCE,
];

/// Every catalogued operation.
pub fn all() -> &'static [&'static OperationDescriptor] {
    &ALL
}

/// Find an operation by name (`DeleteApp`) or command name (`delete-app`),
/// ignoring case.
///
/// ```
/// use integrations_aws_pinpoint::operations;
///
/// assert_eq!(operations::find("delete-app").map(|op| op.name), Some("DeleteApp"));
/// assert_eq!(operations::find("DELETEAPP").map(|op| op.name), Some("DeleteApp"));
/// assert!(operations::find("launch-rocket").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static OperationDescriptor> {
    ALL.iter().copied().find(|descriptor| {
        descriptor.name.eq_ignore_ascii_case(name) || descriptor.cli_name().eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{DefaultOutput, FieldLocation};
    use rstest::rstest;
    use std::collections::HashSet;

    fn labels(uri: &str) -> Vec<&str> {
        uri.split('{')
            .skip(1)
            .filter_map(|part| part.split_once('}').map(|(label, _)| label))
            .collect()
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|op| op.name).collect();
        assert_eq!(names.len(), all().len());
        let commands: HashSet<_> = all().iter().map(|op| op.cli_name()).collect();
        assert_eq!(commands.len(), all().len());
    }

    #[test]
    fn test_only_get_app_is_read_only() {
        let read_only: Vec<_> = all()
            .iter()
            .filter(|op| !op.state_changing)
            .map(|op| op.name)
            .collect();
        assert_eq!(read_only, vec!["GetApp"]);
    }

    #[test]
    fn test_descriptors_are_consistent() {
        for op in all() {
            let field_names: HashSet<_> = op.fields.iter().map(|f| f.name.to_ascii_lowercase()).collect();
            assert_eq!(field_names.len(), op.fields.len(), "{} has duplicate fields", op.name);

            assert!(
                op.fields.iter().filter(|f| f.source == crate::command::BindingSource::Pipeline).count() <= 1,
                "{} has more than one pipeline field",
                op.name
            );

            for label in labels(op.http.uri) {
                let field = op
                    .fields
                    .iter()
                    .find(|f| f.location == FieldLocation::Uri(label))
                    .unwrap_or_else(|| panic!("{} has no field for {{{label}}}", op.name));
                assert!(field.is_required(), "{}.{} must be required", op.name, field.name);
            }

            for field in op.fields {
                if field.location == FieldLocation::Payload {
                    let payload = op.http.payload.unwrap_or_else(|| {
                        panic!("{}.{} has no payload member to live in", op.name, field.name)
                    });
                    assert!(
                        field.member.starts_with(&format!("{payload}.")),
                        "{}.{} is outside {payload}",
                        op.name,
                        field.name
                    );
                } else {
                    assert!(!field.member.contains('.'), "{}.{}", op.name, field.name);
                }
            }

            match op.default_output {
                DefaultOutput::Field(name) => assert!(op.has_response_field(name), "{}", op.name),
                DefaultOutput::WholeResponse => {}
            }
            if let Some(payload) = op.response.payload {
                assert!(op.has_response_field(payload), "{}", op.name);
            }
        }
    }

    #[rstest]
    #[case("create-app", "CreateApp")]
    #[case("update-application-settings", "UpdateApplicationSettings")]
    #[case("create-sms-template", "CreateSmsTemplate")]
    #[case("update-gcm-channel", "UpdateGcmChannel")]
    #[case("send-users-messages", "SendUsersMessages")]
    #[case("untag-resource", "UntagResource")]
    fn test_find_by_command_name(#[case] command: &str, #[case] name: &str) {
        assert_eq!(find(command).map(|op| op.name), Some(name));
    }
}
