use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    TimeRecord,
    UserManagement,
    Adjustment,
    System,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::TimeRecord => "time-record",
            ActivityCategory::UserManagement => "user-management",
            ActivityCategory::Adjustment => "adjustment",
            ActivityCategory::System => "system",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "time-record" => Some(ActivityCategory::TimeRecord),
            "user-management" => Some(ActivityCategory::UserManagement),
            "adjustment" => Some(ActivityCategory::Adjustment),
            "system" => Some(ActivityCategory::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityOutcome {
    Success,
    Failed,
}

impl ActivityOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityOutcome::Success => "success",
            ActivityOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKey {
    Hq,
    Store1,
    Store2,
    Store3,
    All,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Hq => "hq",
            StoreKey::Store1 => "store1",
            StoreKey::Store2 => "store2",
            StoreKey::Store3 => "store3",
            StoreKey::All => "all",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "hq" => Some(StoreKey::Hq),
            "store1" => Some(StoreKey::Store1),
            "store2" => Some(StoreKey::Store2),
            "store3" => Some(StoreKey::Store3),
            "all" => Some(StoreKey::All),
            _ => None,
        }
    }
}

/// Audit trail line. `timestamp` is `YYYY-MM-DD HH:MM:SS`, so the first ten
/// characters are the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub timestamp: String,
    pub user: String,
    pub role: String,
    pub affected_employee: String,
    pub activity: String,
    pub category: ActivityCategory,
    pub status: ActivityOutcome,
    pub details: String,
    pub store_key: StoreKey,
}

impl ActivityLogEntry {
    pub fn date(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}
