pub mod activity;
pub mod breakdown;
pub mod breaklist;
pub mod location;
pub mod record;
pub mod user;

pub use activity::{ActivityCategory, ActivityLogEntry, ActivityOutcome, StoreKey};
pub use breakdown::BreakdownRow;
pub use breaklist::{Breaklist, BreaklistStatus};
pub use location::{GeoPoint, HasLocation, LocationEntry, LocationStatus};
pub use record::{RecordStatus, TimekeepingRecord};
pub use user::{AccountStatus, ActivityStatus, DashboardUser, VerificationStatus};
