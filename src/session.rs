use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::CampaignDraft;

/// In-memory campaign-creation sessions. Each session owns exactly one
/// draft; nothing survives a restart.
///
/// Every update holds the lock from read to write-back, so two uploads
/// racing on the same draft are applied one after the other.
#[derive(Default)]
pub struct SessionStore {
    drafts: Mutex<HashMap<Uuid, CampaignDraft>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start(&self) -> (Uuid, CampaignDraft) {
        let session_id = Uuid::new_v4();
        let draft = CampaignDraft::new();
        self.drafts.lock().await.insert(session_id, draft.clone());
        (session_id, draft)
    }

    pub async fn get(&self, session_id: Uuid) -> Option<CampaignDraft> {
        self.drafts.lock().await.get(&session_id).cloned()
    }

    /// Replaces the session's draft with `f(draft)` and returns the result.
    /// `None` when the session does not exist.
    pub async fn update<F>(&self, session_id: Uuid, f: F) -> Option<CampaignDraft>
    where
        F: FnOnce(CampaignDraft) -> CampaignDraft,
    {
        let mut drafts = self.drafts.lock().await;
        let draft = drafts.remove(&session_id)?;
        let updated = f(draft);
        drafts.insert(session_id, updated.clone());
        Some(updated)
    }

    /// Discards the session. Returns whether it existed.
    pub async fn end(&self, session_id: Uuid) -> bool {
        self.drafts.lock().await.remove(&session_id).is_some()
    }
}
