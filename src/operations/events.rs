//! Event ingestion.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

/// `PutEvents`: record events and update endpoint data in one batch.
///
/// `BatchItem` maps endpoint ids to `{Endpoint, Events}` objects.
pub static PUT_EVENTS: OperationDescriptor = OperationDescriptor {
    name: "PutEvents",
    summary: "Create a new event to record for endpoints",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required("BatchItem", "EventsRequest.BatchItem", Kind::Document),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/events",
        payload: Some("EventsRequest"),
    },
    response: ResponseShape {
        payload: Some("EventsResponse"),
        fields: &["EventsResponse"],
    },
    default_output: DefaultOutput::Field("EventsResponse"),
    state_changing: true,
};
