//! Journey operations.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const JOURNEY_ID: Field = Field::required("JourneyId", "JourneyId", Kind::String)
    .in_uri("journey-id")
    .from_pipeline();

const JOURNEY_RESPONSE: ResponseShape = ResponseShape {
    payload: Some("JourneyResponse"),
    fields: &["JourneyResponse"],
};

/// `CreateJourney`: create a journey.
pub static CREATE_JOURNEY: OperationDescriptor = OperationDescriptor {
    name: "CreateJourney",
    summary: "Create a journey for an application",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required("Name", "WriteJourneyRequest.Name", Kind::String),
        Field::optional("Activities", "WriteJourneyRequest.Activities", Kind::Document),
        Field::optional("StartActivity", "WriteJourneyRequest.StartActivity", Kind::String),
        Field::optional("StartCondition", "WriteJourneyRequest.StartCondition", Kind::Document),
        Field::optional("State", "WriteJourneyRequest.State", Kind::String),
        Field::optional("LocalTime", "WriteJourneyRequest.LocalTime", Kind::Boolean),
        Field::optional("RefreshFrequency", "WriteJourneyRequest.RefreshFrequency", Kind::String),
        Field::optional(
            "RefreshOnSegmentUpdate",
            "WriteJourneyRequest.RefreshOnSegmentUpdate",
            Kind::Boolean,
        ),
        Field::optional(
            "WaitForQuietTime",
            "WriteJourneyRequest.WaitForQuietTime",
            Kind::Boolean,
        ),
        Field::optional("CreationDate", "WriteJourneyRequest.CreationDate", Kind::Timestamp),
        Field::optional(
            "LastModifiedDate",
            "WriteJourneyRequest.LastModifiedDate",
            Kind::Timestamp,
        ),
        Field::optional(
            "Limits_DailyCap",
            "WriteJourneyRequest.Limits.DailyCap",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_EndpointReentryCap",
            "WriteJourneyRequest.Limits.EndpointReentryCap",
            Kind::Integer,
        ),
        Field::optional(
            "Limits_MessagesPerSecond",
            "WriteJourneyRequest.Limits.MessagesPerSecond",
            Kind::Integer,
        ),
        Field::optional("QuietTime_Start", "WriteJourneyRequest.QuietTime.Start", Kind::String),
        Field::optional("QuietTime_End", "WriteJourneyRequest.QuietTime.End", Kind::String),
        Field::optional(
            "Schedule_StartTime",
            "WriteJourneyRequest.Schedule.StartTime",
            Kind::Timestamp,
        ),
        Field::optional(
            "Schedule_EndTime",
            "WriteJourneyRequest.Schedule.EndTime",
            Kind::Timestamp,
        ),
        Field::optional(
            "Schedule_Timezone",
            "WriteJourneyRequest.Schedule.Timezone",
            Kind::String,
        ),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/journeys",
        payload: Some("WriteJourneyRequest"),
    },
    response: JOURNEY_RESPONSE,
    default_output: DefaultOutput::Field("JourneyResponse"),
    state_changing: true,
};

/// `DeleteJourney`: delete a journey.
pub static DELETE_JOURNEY: OperationDescriptor = OperationDescriptor {
    name: "DeleteJourney",
    summary: "Delete a journey from an application",
    fields: &[APPLICATION_ID, JOURNEY_ID],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/journeys/{journey-id}",
        payload: None,
    },
    response: JOURNEY_RESPONSE,
    default_output: DefaultOutput::Field("JourneyResponse"),
    state_changing: true,
};

/// `UpdateJourneyState`: pause, resume or cancel a journey.
pub static UPDATE_JOURNEY_STATE: OperationDescriptor = OperationDescriptor {
    name: "UpdateJourneyState",
    summary: "Change the status of a journey",
    fields: &[
        APPLICATION_ID,
        JOURNEY_ID,
        Field::required("State", "JourneyStateRequest.State", Kind::String),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/journeys/{journey-id}/state",
        payload: Some("JourneyStateRequest"),
    },
    response: JOURNEY_RESPONSE,
    default_output: DefaultOutput::Field("JourneyResponse"),
    state_changing: true,
};
