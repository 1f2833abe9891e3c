//! Endpoint and user operations.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const ENDPOINT_ID: Field = Field::required("EndpointId", "EndpointId", Kind::String)
    .in_uri("endpoint-id")
    .from_pipeline();

/// `UpdateEndpoint`: create or update an endpoint.
pub static UPDATE_ENDPOINT: OperationDescriptor = OperationDescriptor {
    name: "UpdateEndpoint",
    summary: "Create a new endpoint or update the settings of an existing one",
    fields: &[
        APPLICATION_ID,
        ENDPOINT_ID,
        Field::optional("Address", "EndpointRequest.Address", Kind::String),
        Field::optional("ChannelType", "EndpointRequest.ChannelType", Kind::String),
        Field::optional("Attributes", "EndpointRequest.Attributes", Kind::Document),
        Field::optional("EffectiveDate", "EndpointRequest.EffectiveDate", Kind::Timestamp),
        Field::optional("EndpointStatus", "EndpointRequest.EndpointStatus", Kind::String),
        Field::optional("Metrics", "EndpointRequest.Metrics", Kind::Document),
        Field::optional("OptOut", "EndpointRequest.OptOut", Kind::String),
        Field::optional("RequestId", "EndpointRequest.RequestId", Kind::String),
        Field::optional(
            "Demographic_AppVersion",
            "EndpointRequest.Demographic.AppVersion",
            Kind::String,
        ),
        Field::optional("Demographic_Locale", "EndpointRequest.Demographic.Locale", Kind::String),
        Field::optional("Demographic_Make", "EndpointRequest.Demographic.Make", Kind::String),
        Field::optional("Demographic_Model", "EndpointRequest.Demographic.Model", Kind::String),
        Field::optional(
            "Demographic_Platform",
            "EndpointRequest.Demographic.Platform",
            Kind::String,
        ),
        Field::optional(
            "Demographic_Timezone",
            "EndpointRequest.Demographic.Timezone",
            Kind::String,
        ),
        Field::optional("Location_City", "EndpointRequest.Location.City", Kind::String),
        Field::optional("Location_Country", "EndpointRequest.Location.Country", Kind::String),
        Field::optional("Location_Latitude", "EndpointRequest.Location.Latitude", Kind::Double),
        Field::optional("Location_Longitude", "EndpointRequest.Location.Longitude", Kind::Double),
        Field::optional(
            "Location_PostalCode",
            "EndpointRequest.Location.PostalCode",
            Kind::String,
        ),
        Field::optional("Location_Region", "EndpointRequest.Location.Region", Kind::String),
        Field::optional("User_UserId", "EndpointRequest.User.UserId", Kind::String),
        Field::optional(
            "User_UserAttributes",
            "EndpointRequest.User.UserAttributes",
            Kind::Document,
        ),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/endpoints/{endpoint-id}",
        payload: Some("EndpointRequest"),
    },
    response: ResponseShape {
        payload: Some("MessageBody"),
        fields: &["MessageBody"],
    },
    default_output: DefaultOutput::Field("MessageBody"),
    state_changing: true,
};

/// `DeleteEndpoint`: delete an endpoint.
pub static DELETE_ENDPOINT: OperationDescriptor = OperationDescriptor {
    name: "DeleteEndpoint",
    summary: "Delete an endpoint from an application",
    fields: &[APPLICATION_ID, ENDPOINT_ID],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/endpoints/{endpoint-id}",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("EndpointResponse"),
        fields: &["EndpointResponse"],
    },
    default_output: DefaultOutput::Field("EndpointResponse"),
    state_changing: true,
};

/// `DeleteUserEndpoints`: delete every endpoint of a user.
pub static DELETE_USER_ENDPOINTS: OperationDescriptor = OperationDescriptor {
    name: "DeleteUserEndpoints",
    summary: "Delete all the endpoints associated with a user ID",
    fields: &[
        APPLICATION_ID,
        Field::required("UserId", "UserId", Kind::String)
            .in_uri("user-id")
            .from_pipeline(),
    ],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/users/{user-id}",
        payload: None,
    },
    response: ResponseShape {
        payload: Some("EndpointsResponse"),
        fields: &["EndpointsResponse"],
    },
    default_output: DefaultOutput::Field("EndpointsResponse"),
    state_changing: true,
};

/// `RemoveAttributes`: remove attribute definitions from an application.
pub static REMOVE_ATTRIBUTES: OperationDescriptor = OperationDescriptor {
    name: "RemoveAttributes",
    summary: "Remove one or more custom attributes from an application",
    fields: &[
        APPLICATION_ID.from_pipeline(),
        Field::required("AttributeType", "AttributeType", Kind::String).in_uri("attribute-type"),
        Field::optional("Blacklist", "UpdateAttributesRequest.Blacklist", Kind::StringList),
    ],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/attributes/{attribute-type}",
        payload: Some("UpdateAttributesRequest"),
    },
    response: ResponseShape {
        payload: Some("AttributesResource"),
        fields: &["AttributesResource"],
    },
    default_output: DefaultOutput::Field("AttributesResource"),
    state_changing: true,
};
