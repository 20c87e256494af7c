//! Reporting logic behind the dashboard views.

pub mod breakdown;
pub mod breaklist;
pub mod filter;
pub mod kpi;
pub mod location;
pub mod pagination;
