//! Channel operations. Every channel is addressed by its application.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

/// `UpdateEmailChannel`: enable or update the email channel.
pub static UPDATE_EMAIL_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "UpdateEmailChannel",
    summary: "Enable the email channel or update its settings",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required("FromAddress", "EmailChannelRequest.FromAddress", Kind::String),
        Field::required("Identity", "EmailChannelRequest.Identity", Kind::String),
        Field::optional(
            "ConfigurationSet",
            "EmailChannelRequest.ConfigurationSet",
            Kind::String,
        ),
        Field::optional("Enabled", "EmailChannelRequest.Enabled", Kind::Boolean),
        Field::optional("RoleArn", "EmailChannelRequest.RoleArn", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/channels/email",
        payload: Some("EmailChannelRequest"),
    },
    response: ResponseShape {
        payload: Some("EmailChannelResponse"),
        fields: &["EmailChannelResponse"],
    },
    default_output: DefaultOutput::Field("EmailChannelResponse"),
    state_changing: true,
};

/// `DeleteEmailChannel`: disable the email channel and delete its settings.
pub static DELETE_EMAIL_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "DeleteEmailChannel",
    summary: "Disable the email channel and delete its settings",
    fields: &[APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/channels/email",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("EmailChannelResponse"),
        fields: &["EmailChannelResponse"],
    },
    default_output: DefaultOutput::Field("EmailChannelResponse"),
    state_changing: true,
};

/// `UpdateSmsChannel`: enable or update the SMS channel.
pub static UPDATE_SMS_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "UpdateSmsChannel",
    summary: "Enable the SMS channel or update its settings",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::optional("Enabled", "SMSChannelRequest.Enabled", Kind::Boolean),
        Field::optional("SenderId", "SMSChannelRequest.SenderId", Kind::String),
        Field::optional("ShortCode", "SMSChannelRequest.ShortCode", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/channels/sms",
        payload: Some("SMSChannelRequest"),
    },
    response: ResponseShape {
        payload: Some("SMSChannelResponse"),
        fields: &["SMSChannelResponse"],
    },
    default_output: DefaultOutput::Field("SMSChannelResponse"),
    state_changing: true,
};

/// `DeleteSmsChannel`: disable the SMS channel and delete its settings.
pub static DELETE_SMS_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "DeleteSmsChannel",
    summary: "Disable the SMS channel and delete its settings",
    fields: &[APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/channels/sms",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("SMSChannelResponse"),
        fields: &["SMSChannelResponse"],
    },
    default_output: DefaultOutput::Field("SMSChannelResponse"),
    state_changing: true,
};

/// `UpdateGcmChannel`: enable or update the FCM (GCM) channel.
pub static UPDATE_GCM_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "UpdateGcmChannel",
    summary: "Enable the GCM channel or update its settings",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::optional("ApiKey", "GCMChannelRequest.ApiKey", Kind::String),
        Field::optional(
            "DefaultAuthenticationMethod",
            "GCMChannelRequest.DefaultAuthenticationMethod",
            Kind::String,
        ),
        Field::optional("Enabled", "GCMChannelRequest.Enabled", Kind::Boolean),
        Field::optional("ServiceJson", "GCMChannelRequest.ServiceJson", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/channels/gcm",
        payload: Some("GCMChannelRequest"),
    },
    response: ResponseShape {
        payload: Some("GCMChannelResponse"),
        fields: &["GCMChannelResponse"],
    },
    default_output: DefaultOutput::Field("GCMChannelResponse"),
    state_changing: true,
};

/// `DeleteGcmChannel`: disable the GCM channel and delete its settings.
pub static DELETE_GCM_CHANNEL: OperationDescriptor = OperationDescriptor {
    name: "DeleteGcmChannel",
    summary: "Disable the GCM channel and delete its settings",
    fields: &[APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/channels/gcm",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("GCMChannelResponse"),
        fields: &["GCMChannelResponse"],
    },
    default_output: DefaultOutput::Field("GCMChannelResponse"),
    state_changing: true,
};
