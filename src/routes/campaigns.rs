use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};

use crate::domain::{Campaign, StatusFilter, list_campaigns};

#[derive(Deserialize, Debug)]
pub struct CampaignListParameters {
    #[serde(default)]
    status: StatusFilter,
}

#[derive(Serialize)]
pub struct CampaignSummary {
    #[serde(flatten)]
    campaign: &'static Campaign,
    open_rate: String,
}

#[tracing::instrument(name = "Listing campaigns")]
pub async fn campaigns(
    Query(parameters): Query<CampaignListParameters>,
) -> Json<Vec<CampaignSummary>> {
    let summaries = list_campaigns(parameters.status)
        .map(|campaign| CampaignSummary {
            campaign,
            open_rate: campaign.open_rate(),
        })
        .collect();
    Json(summaries)
}
