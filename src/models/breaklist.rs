use super::StoreKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreaklistStatus {
    Pending,
    Approved,
    Rejected,
}

impl BreaklistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreaklistStatus::Pending => "pending",
            BreaklistStatus::Approved => "approved",
            BreaklistStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pending" => Some(BreaklistStatus::Pending),
            "approved" => Some(BreaklistStatus::Approved),
            "rejected" => Some(BreaklistStatus::Rejected),
            _ => None,
        }
    }
}

/// A generated break schedule for one store and a two-week period.
/// `approved_at`/`approved_by` read `-` while the list is pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breaklist {
    pub id: String,
    pub generated_by: String,
    pub store: String,
    pub store_key: StoreKey,
    pub date_range: String,
    pub employee_count: u32,
    pub created_at: String,
    pub status: BreaklistStatus,
    pub approved_at: String,
    pub approved_by: String,
    pub notification_recipient: String,
}
