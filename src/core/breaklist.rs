//! Approval workflow for generated breaklists.

use crate::errors::{AppError, AppResult};
use crate::models::{Breaklist, BreaklistStatus};
use crate::utils::formatting::clock_label;
use chrono::NaiveDateTime;

/// Who signs off breaklists from the terminal.
pub const APPROVER: &str = "Admin User";

/// What to do with a pending breaklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn outcome(&self) -> BreaklistStatus {
        match self {
            Decision::Approve => BreaklistStatus::Approved,
            Decision::Reject => BreaklistStatus::Rejected,
        }
    }
}

/// Move a pending breaklist to approved or rejected, stamping who and when.
/// Lists that were already decided are left untouched.
pub fn decide(list: &mut Breaklist, decision: Decision, by: &str, at: NaiveDateTime) -> AppResult<()> {
    if list.status != BreaklistStatus::Pending {
        return Err(AppError::BreaklistDecided {
            id: list.id.clone(),
            status: list.status.as_str().to_string(),
        });
    }

    list.status = decision.outcome();
    list.approved_by = by.to_string();
    list.approved_at = clock_label(at);
    tracing::info!(id = %list.id, status = list.status.as_str(), by, "breaklist decided");
    Ok(())
}

/// Look up `id` in `lists` and apply `decision` to it.
pub fn decide_by_id<'a>(
    lists: &'a mut [Breaklist],
    id: &str,
    decision: Decision,
    by: &str,
    at: NaiveDateTime,
) -> AppResult<&'a Breaklist> {
    let list = lists
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::UnknownBreaklist(id.to_string()))?;
    decide(list, decision, by, at)?;
    Ok(list)
}

/// Counts per status, in pending/approved/rejected order.
pub fn status_counts(lists: &[&Breaklist]) -> [(BreaklistStatus, usize); 3] {
    [BreaklistStatus::Pending, BreaklistStatus::Approved, BreaklistStatus::Rejected]
        .map(|s| (s, lists.iter().filter(|l| l.status == s).count()))
}
