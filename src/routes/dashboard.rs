use axum::Json;

use crate::domain::{DashboardOverview, dashboard_overview};

#[tracing::instrument(name = "Loading the dashboard overview")]
pub async fn dashboard() -> Json<DashboardOverview> {
    Json(dashboard_overview())
}
