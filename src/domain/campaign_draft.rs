use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    campaign_body::CampaignBody, campaign_subject::CampaignSubject, recipient_set::RecipientSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignAction {
    Launch,
    Schedule,
    Draft,
}

impl std::fmt::Display for CampaignAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self {
            CampaignAction::Launch => "launch",
            CampaignAction::Schedule => "schedule",
            CampaignAction::Draft => "draft",
        };
        f.write_str(action)
    }
}

/// Everything the wizard has collected so far. Fields are free-form while
/// editing; validation happens in [`CampaignDraft::submit`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignDraft {
    subject: String,
    body: CampaignBody,
    recipients: RecipientSet,
}

/// What a launch, schedule or save produces.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignPayload {
    pub subject: CampaignSubject,
    pub body: CampaignBody,
    pub recipients: RecipientSet,
    pub status: CampaignAction,
    pub timestamp: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("the campaign has no recipients")]
    NoRecipients,
    #[error("{0}")]
    InvalidSubject(String),
    #[error("no template has been selected")]
    NoTemplateSelected,
}

impl CampaignDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> &CampaignBody {
        &self.body
    }

    pub fn recipients(&self) -> &RecipientSet {
        &self.recipients
    }

    pub fn with_subject(self, subject: String) -> Self {
        Self { subject, ..self }
    }

    pub fn with_body(self, body: CampaignBody) -> Self {
        Self { body, ..self }
    }

    /// Runs one recipient pipeline step over the draft's set.
    pub fn map_recipients(self, f: impl FnOnce(RecipientSet) -> RecipientSet) -> Self {
        Self {
            recipients: f(self.recipients),
            ..self
        }
    }

    /// Mirrors the enabled state of the submit buttons: true exactly when
    /// [`CampaignDraft::submit`] would succeed.
    pub fn is_submittable(&self) -> bool {
        self.check_submittable().is_ok()
    }

    pub fn submit(&self, action: CampaignAction) -> Result<CampaignPayload, SubmitError> {
        let subject = self.check_submittable()?;

        Ok(CampaignPayload {
            subject,
            body: self.body.clone(),
            recipients: self.recipients.clone(),
            status: action,
            timestamp: Utc::now(),
        })
    }

    fn check_submittable(&self) -> Result<CampaignSubject, SubmitError> {
        if self.recipients.is_empty() {
            return Err(SubmitError::NoRecipients);
        }
        let subject =
            CampaignSubject::parse(self.subject.clone()).map_err(SubmitError::InvalidSubject)?;
        if self.body.is_template_pending() {
            return Err(SubmitError::NoTemplateSelected);
        }
        Ok(subject)
    }
}
