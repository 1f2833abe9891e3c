//! Direct message sends.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

/// `SendMessages`: send a message to addresses or endpoints.
pub static SEND_MESSAGES: OperationDescriptor = OperationDescriptor {
    name: "SendMessages",
    summary: "Create and send a direct message",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required(
            "MessageConfiguration",
            "MessageRequest.MessageConfiguration",
            Kind::Document,
        ),
        Field::optional("Addresses", "MessageRequest.Addresses", Kind::Document),
        Field::optional("Endpoints", "MessageRequest.Endpoints", Kind::Document),
        Field::optional("Context", "MessageRequest.Context", Kind::StringMap),
        Field::optional(
            "TemplateConfiguration",
            "MessageRequest.TemplateConfiguration",
            Kind::Document,
        ),
        Field::optional("TraceId", "MessageRequest.TraceId", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/messages",
        payload: Some("MessageRequest"),
    },
    response: ResponseShape {
        payload: Some("MessageResponse"),
        fields: &["MessageResponse"],
    },
    default_output: DefaultOutput::Field("MessageResponse"),
    state_changing: true,
};

/// `SendUsersMessages`: send a message to every endpoint of a set of users.
pub static SEND_USERS_MESSAGES: OperationDescriptor = OperationDescriptor {
    name: "SendUsersMessages",
    summary: "Create and send a message to a list of users",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required(
            "MessageConfiguration",
            "SendUsersMessageRequest.MessageConfiguration",
            Kind::Document,
        ),
        Field::required("Users", "SendUsersMessageRequest.Users", Kind::Document),
        Field::optional("Context", "SendUsersMessageRequest.Context", Kind::StringMap),
        Field::optional(
            "TemplateConfiguration",
            "SendUsersMessageRequest.TemplateConfiguration",
            Kind::Document,
        ),
        Field::optional("TraceId", "SendUsersMessageRequest.TraceId", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/users-messages",
        payload: Some("SendUsersMessageRequest"),
    },
    response: ResponseShape {
        payload: Some("SendUsersMessageResponse"),
        fields: &["SendUsersMessageResponse"],
    },
    default_output: DefaultOutput::Field("SendUsersMessageResponse"),
    state_changing: true,
};
