use axum::{Json, extract::Query};
use serde::Deserialize;

use crate::domain::{
    COMPOSER_TEMPLATES, ComposerTemplate, MarketplaceTemplate, TemplateCategory, TemplateSort,
    browse_marketplace,
};

#[derive(Deserialize, Debug)]
pub struct MarketplaceParameters {
    category: Option<TemplateCategory>,
    #[serde(default)]
    sort: TemplateSort,
}

#[tracing::instrument(name = "Browsing the template marketplace")]
pub async fn marketplace(
    Query(parameters): Query<MarketplaceParameters>,
) -> Json<Vec<&'static MarketplaceTemplate>> {
    Json(browse_marketplace(parameters.category, parameters.sort))
}

pub async fn composer_templates() -> Json<&'static [ComposerTemplate]> {
    Json(COMPOSER_TEMPLATES)
}
