use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        CampaignAction, CampaignBody, CampaignDraft, CampaignPayload, RecipientSet,
        RecipientSetState, SubmitError,
    },
    startup::AppState,
};

#[derive(Serialize)]
pub struct DraftResponse {
    id: Uuid,
    #[serde(flatten)]
    draft: CampaignDraft,
    count: usize,
    state: RecipientSetState,
    submittable: bool,
}

impl DraftResponse {
    fn new(id: Uuid, draft: CampaignDraft) -> Self {
        Self {
            id,
            count: draft.recipients().len(),
            state: draft.recipients().state(),
            submittable: draft.is_submittable(),
            draft,
        }
    }
}

#[derive(Serialize)]
pub struct RecipientsResponse {
    recipients: RecipientSet,
    count: usize,
    state: RecipientSetState,
}

impl From<&CampaignDraft> for RecipientsResponse {
    fn from(draft: &CampaignDraft) -> Self {
        let recipients = draft.recipients().clone();
        Self {
            count: recipients.len(),
            state: recipients.state(),
            recipients,
        }
    }
}

#[derive(Serialize)]
pub struct CommitResponse {
    #[serde(flatten)]
    recipients: RecipientsResponse,
    committed: bool,
    /// The typed text, handed back when it was not taken so it can stay in
    /// the entry field.
    pending_input: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommitTrigger {
    /// Enter or comma in the entry field.
    #[default]
    Commit,
    /// The entry field lost focus.
    Blur,
}

#[derive(Deserialize)]
pub struct RecipientForm {
    email: String,
    #[serde(default)]
    trigger: CommitTrigger,
}

#[derive(Deserialize)]
pub struct SubjectForm {
    subject: String,
}

#[tracing::instrument(name = "Starting a campaign draft", skip(app_state))]
pub async fn create_draft(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let (draft_id, draft) = app_state.sessions.start().await;
    tracing::info!(%draft_id, "Draft session started");

    let location = format!("{}/campaigns/drafts/{}", app_state.base_url.0, draft_id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DraftResponse::new(draft_id, draft)),
    )
}

#[tracing::instrument(name = "Fetching a campaign draft", skip(app_state))]
pub async fn get_draft(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<DraftResponse>, DraftError> {
    let draft = app_state
        .sessions
        .get(draft_id)
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    Ok(Json(DraftResponse::new(draft_id, draft)))
}

#[tracing::instrument(name = "Discarding a campaign draft", skip(app_state))]
pub async fn discard_draft(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
) -> Result<StatusCode, DraftError> {
    if app_state.sessions.end(draft_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(DraftError::SessionNotFound(draft_id))
    }
}

#[tracing::instrument(name = "Updating the draft subject", skip(app_state, form))]
pub async fn update_subject(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
    Form(form): Form<SubjectForm>,
) -> Result<Json<DraftResponse>, DraftError> {
    let draft = app_state
        .sessions
        .update(draft_id, |draft| draft.with_subject(form.subject))
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    Ok(Json(DraftResponse::new(draft_id, draft)))
}

#[tracing::instrument(name = "Updating the draft body", skip(app_state, body))]
pub async fn update_body(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
    Json(body): Json<CampaignBody>,
) -> Result<Json<DraftResponse>, DraftError> {
    let body = body.validate().map_err(DraftError::UnknownTemplate)?;
    let draft = app_state
        .sessions
        .update(draft_id, |draft| draft.with_body(body))
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    Ok(Json(DraftResponse::new(draft_id, draft)))
}

#[tracing::instrument(
    name = "Committing a typed recipient",
    skip(app_state, form),
    fields(
        recipient_email = %form.email,
        trigger = ?form.trigger
    )
)]
pub async fn commit_recipient(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
    Form(form): Form<RecipientForm>,
) -> Result<Json<CommitResponse>, DraftError> {
    let mut committed = false;
    let draft = app_state
        .sessions
        .update(draft_id, |draft| {
            let before = draft.recipients().len();
            let draft = draft.map_recipients(|set| set.commit_single(&form.email));
            committed = draft.recipients().len() > before;
            draft
        })
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;

    if !committed {
        tracing::debug!("Typed recipient was invalid or already present");
    }

    Ok(Json(CommitResponse {
        recipients: RecipientsResponse::from(&draft),
        committed,
        pending_input: (!committed).then_some(form.email),
    }))
}

#[tracing::instrument(
    name = "Merging an uploaded recipient list",
    skip(app_state, raw_text),
    fields(upload_bytes = raw_text.len())
)]
pub async fn upload_recipients(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
    raw_text: String,
) -> Result<Json<RecipientsResponse>, DraftError> {
    let mut added = 0;
    let draft = app_state
        .sessions
        .update(draft_id, |draft| {
            let before = draft.recipients().len();
            let draft = draft.map_recipients(|set| set.merge_bulk(&raw_text));
            added = draft.recipients().len() - before;
            draft
        })
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;

    tracing::info!(added, total = draft.recipients().len(), "Recipient list merged");
    Ok(Json(RecipientsResponse::from(&draft)))
}

#[tracing::instrument(name = "Removing a recipient", skip(app_state))]
pub async fn remove_recipient(
    State(app_state): State<Arc<AppState>>,
    Path((draft_id, position)): Path<(Uuid, usize)>,
) -> Result<Json<RecipientsResponse>, DraftError> {
    let draft = app_state
        .sessions
        .update(draft_id, |draft| {
            draft.map_recipients(|set| set.remove_at(position))
        })
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    Ok(Json(RecipientsResponse::from(&draft)))
}

#[tracing::instrument(name = "Clearing all recipients", skip(app_state))]
pub async fn clear_recipients(
    State(app_state): State<Arc<AppState>>,
    Path(draft_id): Path<Uuid>,
) -> Result<Json<RecipientsResponse>, DraftError> {
    let draft = app_state
        .sessions
        .update(draft_id, |draft| draft.map_recipients(RecipientSet::clear))
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    Ok(Json(RecipientsResponse::from(&draft)))
}

/// Launch, schedule or save the draft. Nothing is sent; the payload is
/// logged and echoed back, and the session stays open.
#[tracing::instrument(name = "Submitting a campaign", skip(app_state))]
pub async fn submit_campaign(
    State(app_state): State<Arc<AppState>>,
    Path((draft_id, action)): Path<(Uuid, CampaignAction)>,
) -> Result<Json<CampaignPayload>, DraftError> {
    let draft = app_state
        .sessions
        .get(draft_id)
        .await
        .ok_or(DraftError::SessionNotFound(draft_id))?;
    let payload = draft.submit(action)?;

    tracing::info!(
        campaign_action = %action,
        subject = %payload.subject.as_ref(),
        recipients = payload.recipients.len(),
        timestamp = %payload.timestamp,
        "Campaign processed"
    );
    Ok(Json(payload))
}

#[derive(thiserror::Error, Debug)]
pub enum DraftError {
    #[error("draft session {0} is not found")]
    SessionNotFound(Uuid),
    #[error("invalid body, {0}")]
    UnknownTemplate(String),
    #[error("campaign cannot be submitted, {0}")]
    NotSubmittable(#[from] SubmitError),
}

impl IntoResponse for DraftError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        match self {
            DraftError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            DraftError::UnknownTemplate(_) => StatusCode::BAD_REQUEST,
            DraftError::NotSubmittable(_) => StatusCode::BAD_REQUEST,
        }
        .into_response()
    }
}
