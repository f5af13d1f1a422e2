mod campaign;
mod campaign_body;
mod campaign_draft;
mod campaign_subject;
mod recipient_email;
mod recipient_set;
mod template;

pub use campaign::*;
pub use campaign_body::CampaignBody;
pub use campaign_draft::{CampaignAction, CampaignDraft, CampaignPayload, SubmitError};
pub use campaign_subject::CampaignSubject;
pub use recipient_email::{RecipientEmail, extract_addresses, normalize, validate_single};
pub use recipient_set::{RecipientSet, RecipientSetState};
pub use template::*;
