//! Segment operations.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const SEGMENT_RESPONSE: ResponseShape = ResponseShape {
    payload: Some("SegmentResponse"),
    fields: &["SegmentResponse"],
};

/// `CreateSegment`: create a segment.
///
/// `Dimensions` and `SegmentGroups` take the service's JSON structures as-is.
pub static CREATE_SEGMENT: OperationDescriptor = OperationDescriptor {
    name: "CreateSegment",
    summary: "Create a new segment for an application",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::optional("Name", "WriteSegmentRequest.Name", Kind::String),
        Field::optional("Dimensions", "WriteSegmentRequest.Dimensions", Kind::Document),
        Field::optional("SegmentGroups", "WriteSegmentRequest.SegmentGroups", Kind::Document),
        Field::optional("Tags", "WriteSegmentRequest.tags", Kind::StringMap),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/segments",
        payload: Some("WriteSegmentRequest"),
    },
    response: SEGMENT_RESPONSE,
    default_output: DefaultOutput::Field("SegmentResponse"),
    state_changing: true,
};

/// `DeleteSegment`: delete a segment.
pub static DELETE_SEGMENT: OperationDescriptor = OperationDescriptor {
    name: "DeleteSegment",
    summary: "Delete a segment from an application",
    fields: &[
        APPLICATION_ID,
        Field::required("SegmentId", "SegmentId", Kind::String)
            .in_uri("segment-id")
            .from_pipeline(),
    ],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/segments/{segment-id}",
        payload: None,
    },
    response: SEGMENT_RESPONSE,
    default_output: DefaultOutput::Field("SegmentResponse"),
    state_changing: true,
};
