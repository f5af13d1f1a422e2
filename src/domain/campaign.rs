use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Sent,
    Draft,
    Scheduled,
}

/// Status tab on the campaign list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Sent,
    Draft,
    Scheduled,
}

impl StatusFilter {
    pub fn matches(self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Sent => status == CampaignStatus::Sent,
            StatusFilter::Draft => status == CampaignStatus::Draft,
            StatusFilter::Scheduled => status == CampaignStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub status: CampaignStatus,
    pub sent_count: u32,
    pub open_count: u32,
    pub date: &'static str,
}

impl Campaign {
    /// Percentage of sent emails that were opened, one decimal place.
    /// Campaigns that sent nothing report "0".
    pub fn open_rate(&self) -> String {
        if self.sent_count == 0 {
            return "0".to_string();
        }
        let rate = f64::from(self.open_count) / f64::from(self.sent_count) * 100.0;
        format!("{:.1}", rate)
    }
}

pub const CAMPAIGNS: &[Campaign] = &[
    Campaign {
        id: "1",
        name: "Summer Solstice Sale",
        subject: "Your 20% discount is waiting...",
        status: CampaignStatus::Sent,
        sent_count: 1240,
        open_count: 412,
        date: "Oct 12, 2025",
    },
    Campaign {
        id: "2",
        name: "Product Update - Q4",
        subject: "New features are here!",
        status: CampaignStatus::Sent,
        sent_count: 3100,
        open_count: 890,
        date: "Nov 05, 2025",
    },
    Campaign {
        id: "3",
        name: "Re-engagement Email",
        subject: "We miss you!",
        status: CampaignStatus::Draft,
        sent_count: 0,
        open_count: 0,
        date: "---",
    },
];

pub fn list_campaigns(filter: StatusFilter) -> impl Iterator<Item = &'static Campaign> {
    CAMPAIGNS
        .iter()
        .filter(move |campaign| filter.matches(campaign.status))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Delivered,
    Draft,
    Sending,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentCampaign {
    pub id: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub status: DeliveryStatus,
    pub recipients: u32,
    pub open_rate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
}

/// Landing page contents after login.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    /// False until sending credentials (a Google App Password) are set up;
    /// there is no way to set them, so it stays false.
    pub delivery_configured: bool,
    pub stats: &'static [StatCard],
    pub recent_campaigns: &'static [RecentCampaign],
}

const STATS: &[StatCard] = &[
    StatCard {
        label: "Total Sent",
        value: "2,420",
        subtext: "Last 30 days",
    },
    StatCard {
        label: "Avg Open Rate",
        value: "22.4%",
        subtext: "+2.1% trend",
    },
    StatCard {
        label: "Active Lists",
        value: "12",
        subtext: "3,102 contacts",
    },
];

const RECENT_CAMPAIGNS: &[RecentCampaign] = &[
    RecentCampaign {
        id: "1",
        name: "Winter Collection Blast",
        date: "Dec 24, 2025",
        status: DeliveryStatus::Delivered,
        recipients: 1240,
        open_rate: "24.2%",
    },
    RecentCampaign {
        id: "2",
        name: "Weekly Newsletter #48",
        date: "Dec 20, 2025",
        status: DeliveryStatus::Delivered,
        recipients: 1180,
        open_rate: "19.5%",
    },
    RecentCampaign {
        id: "3",
        name: "Product Feedback Loop",
        date: "---",
        status: DeliveryStatus::Draft,
        recipients: 0,
        open_rate: "0%",
    },
];

pub fn dashboard_overview() -> DashboardOverview {
    DashboardOverview {
        delivery_configured: false,
        stats: STATS,
        recent_campaigns: RECENT_CAMPAIGNS,
    }
}
