//! Application operations.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

/// `CreateApp`: create an application.
pub static CREATE_APP: OperationDescriptor = OperationDescriptor {
    name: "CreateApp",
    summary: "Create an application",
    fields: &[
        Field::required("Name", "CreateApplicationRequest.Name", Kind::String).from_pipeline(),
        Field::optional("Tags", "CreateApplicationRequest.tags", Kind::StringMap),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps",
        payload: Some("CreateApplicationRequest"),
    },
    response: ResponseShape {
        payload: Some("ApplicationResponse"),
        fields: &["ApplicationResponse"],
    },
    default_output: DefaultOutput::Field("ApplicationResponse"),
    state_changing: true,
};

/// `GetApp`: read an application.
pub static GET_APP: OperationDescriptor = OperationDescriptor {
    name: "GetApp",
    summary: "Retrieve information about an application",
    fields: &[APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::GET,
        uri: "/v1/apps/{application-id}",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("ApplicationResponse"),
        fields: &["ApplicationResponse"],
    },
    default_output: DefaultOutput::Field("ApplicationResponse"),
    state_changing: false,
};

/// `DeleteApp`: delete an application.
pub static DELETE_APP: OperationDescriptor = OperationDescriptor {
    name: "DeleteApp",
    summary: "Delete an application",
    fields: &[APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("ApplicationResponse"),
        fields: &["ApplicationResponse"],
    },
    default_output: DefaultOutput::Field("ApplicationResponse"),
    state_changing: true,
};

/// `UpdateApplicationSettings`: update application-wide settings.
pub static UPDATE_APPLICATION_SETTINGS: OperationDescriptor = OperationDescriptor {
    name: "UpdateApplicationSettings",
    summary: "Update the settings for an application",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::optional(
            "CloudWatchMetricsEnabled",
            "WriteApplicationSettingsRequest.CloudWatchMetricsEnabled",
            Kind::Boolean,
        ),
        Field::optional(
            "EventTaggingEnabled",
            "WriteApplicationSettingsRequest.EventTaggingEnabled",
            Kind::Boolean,
        ),
        Field::optional(
            "CampaignHook_LambdaFunctionName",
            "WriteApplicationSettingsRequest.CampaignHook.LambdaFunctionName",
            Kind::String,
        ),
        Field::optional(
            "CampaignHook_Mode",
            "WriteApplicationSettingsRequest.CampaignHook.Mode",
            Kind::String,
        ),
        Field::optional(
            "CampaignHook_WebUrl",
            "WriteApplicationSettingsRequest.CampaignHook.WebUrl",
            Kind::String,
        ),
        Field::optional(
            "Limits_Daily",
            "WriteApplicationSettingsRequest.Limits.Daily",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_MaximumDuration",
            "WriteApplicationSettingsRequest.Limits.MaximumDuration",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_MessagesPerSecond",
            "WriteApplicationSettingsRequest.Limits.MessagesPerSecond",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_Total",
            "WriteApplicationSettingsRequest.Limits.Total",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_Session",
            "WriteApplicationSettingsRequest.Limits.Session",
            Kind::Integer,
        ),
        Field::optional(
            "QuietTime_Start",
            "WriteApplicationSettingsRequest.QuietTime.Start",
            Kind::String,
        ),
        Field::optional(
            "QuietTime_End",
            "WriteApplicationSettingsRequest.QuietTime.End",
            Kind::String,
        ),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/settings",
        payload: Some("WriteApplicationSettingsRequest"),
    },
    response: ResponseShape {
        payload: Some("ApplicationSettingsResource"),
        fields: &["ApplicationSettingsResource"],
    },
    default_output: DefaultOutput::Field("ApplicationSettingsResource"),
    state_changing: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{BoundArgs, CallContext, RequestValue};
    use serde_json::json;

    #[test]
    fn test_settings_groups_nest_only_when_touched() {
        let args = BoundArgs::new()
            .bind("ApplicationId", "app-1")
            .bind_text("Limits_Daily", "100")
            .bind_text("QuietTime_Start", "22:00");
        let context = CallContext::new(&UPDATE_APPLICATION_SETTINGS, &args, None).unwrap();

        assert_eq!(
            RequestValue::build(&context).into_value(),
            json!({
                "ApplicationId": "app-1",
                "WriteApplicationSettingsRequest": {
                    "Limits": {"Daily": 100},
                    "QuietTime": {"Start": "22:00"}
                }
            })
        );
    }

    #[test]
    fn test_create_app_tags() {
        let args = BoundArgs::new()
            .bind("Name", "storefront")
            .bind_text("Tags", "env=prod");
        let context = CallContext::new(&CREATE_APP, &args, None).unwrap();

        assert_eq!(
            RequestValue::build(&context).into_value(),
            json!({"CreateApplicationRequest": {"Name": "storefront", "tags": {"env": "prod"}}})
        );
    }
}
