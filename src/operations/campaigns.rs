//! Campaign operations.

use super::APPLICATION_ID;
use crate::command::{
    DefaultOutput, FieldDescriptor as Field, FieldKind as Kind, HttpBinding,
    OperationDescriptor, ResponseShape,
};
use crate::http::HttpMethod;

const CAMPAIGN_ID: Field = Field::required("CampaignId", "CampaignId", Kind::String)
    .in_uri("campaign-id")
    .from_pipeline();

const CAMPAIGN_RESPONSE: ResponseShape = ResponseShape {
    payload: Some("CampaignResponse"),
    fields: &["CampaignResponse"],
};

/// Optional members of `WriteCampaignRequest`, shared by create and update.
macro_rules! write_campaign_fields {
    ($($head:expr),* $(,)?) => {
        &[
            $($head,)*
            Field::optional("Name", "WriteCampaignRequest.Name", Kind::String),
            Field::optional("Description", "WriteCampaignRequest.Description", Kind::String),
            Field::optional("SegmentId", "WriteCampaignRequest.SegmentId", Kind::String),
            Field::optional("SegmentVersion", "WriteCampaignRequest.SegmentVersion", Kind::Integer),
            Field::optional("HoldoutPercent", "WriteCampaignRequest.HoldoutPercent", Kind::Integer),
            Field::optional("IsPaused", "WriteCampaignRequest.IsPaused", Kind::Boolean),
            Field::optional("Priority", "WriteCampaignRequest.Priority", Kind::Integer),
            Field::optional("TreatmentName", "WriteCampaignRequest.TreatmentName", Kind::String),
            Field::optional(
                "TreatmentDescription",
                "WriteCampaignRequest.TreatmentDescription",
                Kind::String,
            ),
            Field::optional(
                "Schedule_StartTime",
                "WriteCampaignRequest.Schedule.StartTime",
                Kind::Timestamp,
            ),
            Field::optional(
                "Schedule_EndTime",
                "WriteCampaignRequest.Schedule.EndTime",
                Kind::Timestamp,
            ),
            Field::optional(
                "Schedule_Frequency",
                "WriteCampaignRequest.Schedule.Frequency",
                Kind::String,
            ),
            Field::optional(
                "Schedule_IsLocalTime",
                "WriteCampaignRequest.Schedule.IsLocalTime",
                Kind::Boolean,
            ),
            Field::optional(
                "Schedule_Timezone",
                "WriteCampaignRequest.Schedule.Timezone",
                Kind::String,
            ),
            Field::optional("Limits_Daily", "WriteCampaignRequest.Limits.Daily", Kind::Integer),
            Field::optional("Limits_Total", "WriteCampaignRequest.Limits.Total", Kind::Integer),
            Field::optional(
                "Limits_MaximumDuration",
                "WriteCampaignRequest.Limits.MaximumDuration",
                Kind::Integer,
            ),
            Field::optional(
                "Limits_MessagesPerSecond",
                "WriteCampaignRequest.Limits.MessagesPerSecond",
                Kind::Integer,
            ),
            Field::optional(
                "MessageConfiguration",
                "WriteCampaignRequest.MessageConfiguration",
                Kind::Document,
            ),
            Field::optional(
                "TemplateConfiguration",
                "WriteCampaignRequest.TemplateConfiguration",
                Kind::Document,
            ),
            Field::optional(
                "AdditionalTreatments",
                "WriteCampaignRequest.AdditionalTreatments",
                Kind::Document,
            ),
            Field::optional("Tags", "WriteCampaignRequest.tags", Kind::StringMap),
        ]
    };
}

/// `CreateCampaign`: create a campaign for an application.
pub static CREATE_CAMPAIGN: OperationDescriptor = OperationDescriptor {
    name: "CreateCampaign",
    summary: "Create a campaign for an application",
    fields: write_campaign_fields![APPLICATION_ID.from_pipeline()],
    http: HttpBinding {
        method: HttpMethod::POST,
        uri: "/v1/apps/{application-id}/campaigns",
        payload: Some("WriteCampaignRequest"),
    },
    response: CAMPAIGN_RESPONSE,
    default_output: DefaultOutput::Field("CampaignResponse"),
    state_changing: true,
};

/// `UpdateCampaign`: update an existing campaign.
pub static UPDATE_CAMPAIGN: OperationDescriptor = OperationDescriptor {
    name: "UpdateCampaign",
    summary: "Update the configuration and settings of a campaign",
    fields: write_campaign_fields![APPLICATION_ID, CAMPAIGN_ID],
    http: HttpBinding {
        method: HttpMethod::PUT,
        uri: "/v1/apps/{application-id}/campaigns/{campaign-id}",
        payload: Some("WriteCampaignRequest"),
    },
    response: CAMPAIGN_RESPONSE,
    default_output: DefaultOutput::Field("CampaignResponse"),
    state_changing: true,
};

/// `DeleteCampaign`: delete a campaign.
pub static DELETE_CAMPAIGN: OperationDescriptor = OperationDescriptor {
    name: "DeleteCampaign",
    summary: "Delete a campaign from an application",
    fields: &[APPLICATION_ID, CAMPAIGN_ID],
    http: HttpBinding {
        method: HttpMethod::DELETE,
        uri: "/v1/apps/{application-id}/campaigns/{campaign-id}",
        payload: None,
    },
    response: CAMPAIGN_RESPONSE,
    default_output: DefaultOutput::Field("CampaignResponse"),
    state_changing: true,
};
