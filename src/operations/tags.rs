//! Resource tagging.
//!
//! Both operations return an empty body, so the default output is the whole
//! (empty) response.

use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const RESOURCE_ARN: Field = Field::required("ResourceArn", "ResourceArn", Kind::String)
    .in_uri("resource-arn")
    .from_pipeline();

const EMPTY: ResponseShape = ResponseShape {
    payload: None,
    fields: &[],
};

/// `TagResource`: add tags to a resource.
pub static TAG_RESOURCE: OperationDescriptor = OperationDescriptor {
    name: "TagResource",
    summary: "Add one or more tags to an application, campaign, segment or template",
    fields: &[
        RESOURCE_ARN,
        Field::required("Tags", "TagsModel.tags", Kind::StringMap),
    ],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/tags/{resource-arn}",
        payload: Some("TagsModel"),
    },
    response: EMPTY,
    default_output: DefaultOutput::WholeResponse,
    state_changing: true,
};

/// `UntagResource`: remove tags from a resource.
pub static UNTAG_RESOURCE: OperationDescriptor = OperationDescriptor {
    name: "UntagResource",
    summary: "Remove one or more tags from a resource",
    fields: &[
        RESOURCE_ARN,
        Field::required("TagKeys", "TagKeys", Kind::StringList).in_query("tagKeys"),
    ],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/tags/{resource-arn}",
        payload: None,
    },
    response: EMPTY,
    default_output: DefaultOutput::WholeResponse,
    state_changing: true,
};
