use serde::{Deserialize, Serialize};

use super::template::find_composer_template;

/// Email content: either free text or a reference to a composer template.
/// The template may still be unpicked while the draft is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CampaignBody {
    Plain {
        #[serde(default)]
        text: String,
    },
    Template {
        #[serde(default)]
        template_id: Option<String>,
    },
}

impl Default for CampaignBody {
    fn default() -> Self {
        CampaignBody::Plain {
            text: String::new(),
        }
    }
}

impl CampaignBody {
    /// Checks that a referenced template exists.
    pub fn validate(self) -> Result<Self, String> {
        if let CampaignBody::Template {
            template_id: Some(id),
        } = &self
        {
            if find_composer_template(id).is_none() {
                return Err(format!("{} is not a known template.", id));
            }
        }
        Ok(self)
    }

    pub fn is_template_pending(&self) -> bool {
        matches!(self, CampaignBody::Template { template_id: None })
    }
}
