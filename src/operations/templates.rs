//! Message template operations.

use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const TEMPLATE_NAME: Field = Field::required("TemplateName", "TemplateName", Kind::String)
    .in_uri("template-name")
    .from_pipeline();

const VERSION: Field = Field::optional("Version", "Version", Kind::String).in_query("version");

const CREATED: ResponseShape = ResponseShape {
    payload: Some("CreateTemplateMessageBody"),
    fields: &["CreateTemplateMessageBody"],
};

const MESSAGE_BODY: ResponseShape = ResponseShape {
    payload: Some("MessageBody"),
    fields: &["MessageBody"],
};

macro_rules! email_template_fields {
    ($($head:expr),* $(,)?) => {
        &[
            $($head,)*
            Field::optional("Subject", "EmailTemplateRequest.Subject", Kind::String),
            Field::optional("HtmlPart", "EmailTemplateRequest.HtmlPart", Kind::String),
            Field::optional("TextPart", "EmailTemplateRequest.TextPart", Kind::String),
            Field::optional(
                "DefaultSubstitutions",
                "EmailTemplateRequest.DefaultSubstitutions",
                Kind::String,
            ),
            Field::optional("RecommenderId", "EmailTemplateRequest.RecommenderId", Kind::String),
            Field::optional(
                "TemplateDescription",
                "EmailTemplateRequest.TemplateDescription",
                Kind::String,
            ),
            Field::optional("Tags", "EmailTemplateRequest.tags", Kind::StringMap),
        ]
    };
}

/// `CreateEmailTemplate`: create an email message template.
pub static CREATE_EMAIL_TEMPLATE: OperationDescriptor = OperationDescriptor {
    name: "CreateEmailTemplate",
    summary: "Create a message template for email messages",
    fields: email_template_fields![TEMPLATE_NAME],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/templates/{template-name}/email",
        payload: Some("EmailTemplateRequest"),
    },
    response: CREATED,
    default_output: DefaultOutput::Field("CreateTemplateMessageBody"),
    state_changing: true,
};

/// `UpdateEmailTemplate`: update an email message template.
pub static UPDATE_EMAIL_TEMPLATE: OperationDescriptor = OperationDescriptor {
    name: "UpdateEmailTemplate",
    summary: "Update an existing message template for email messages",
    fields: email_template_fields![
        TEMPLATE_NAME,
        Field::optional("CreateNewVersion", "CreateNewVersion", Kind::Boolean)
            .in_query("create-new-version"),
        VERSION,
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/templates/{template-name}/email",
        payload: Some("EmailTemplateRequest"),
    },
    response: MESSAGE_BODY,
    default_output: DefaultOutput::Field("MessageBody"),
    state_changing: true,
};

/// `DeleteEmailTemplate`: delete an email message template.
pub static DELETE_EMAIL_TEMPLATE: OperationDescriptor = OperationDescriptor {
    name: "DeleteEmailTemplate",
    summary: "Delete a message template for email messages",
    fields: &[TEMPLATE_NAME, VERSION],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/templates/{template-name}/email",
        payload: None,
    },
    response: MESSAGE_BODY,
    default_output: DefaultOutput::Field("MessageBody"),
    state_changing: true,
};

/// `CreateSmsTemplate`: create an SMS message template.
pub static CREATE_SMS_TEMPLATE: OperationDescriptor = OperationDescriptor {
    name: "CreateSmsTemplate",
    summary: "Create a message template for SMS messages",
    fields: &[
        TEMPLATE_NAME,
        Field::optional("Body", "SMSTemplateRequest.Body", Kind::String),
        Field::optional(
            "DefaultSubstitutions",
            "SMSTemplateRequest.DefaultSubstitutions",
            Kind::String,
        ),
        Field::optional("RecommenderId", "SMSTemplateRequest.RecommenderId", Kind::String),
        Field::optional(
            "TemplateDescription",
            "SMSTemplateRequest.TemplateDescription",
            Kind::String,
        ),
        Field::optional("Tags", "SMSTemplateRequest.tags", Kind::StringMap),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/templates/{template-name}/sms",
        payload: Some("SMSTemplateRequest"),
    },
    response: CREATED,
    default_output: DefaultOutput::Field("CreateTemplateMessageBody"),
    state_changing: true,
};

/// `DeleteSmsTemplate`: delete an SMS message template.
pub static DELETE_SMS_TEMPLATE: OperationDescriptor = OperationDescriptor {
    name: "DeleteSmsTemplate",
    summary: "Delete a message template for SMS messages",
    fields: &[TEMPLATE_NAME, VERSION],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/templates/{template-name}/sms",
        payload: None,
    },
    response: MESSAGE_BODY,
    default_output: DefaultOutput::Field("MessageBody"),
    state_changing: true,
};
