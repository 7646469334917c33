//! Harvest subdomain: payload extraction, per-URL outcomes and the
//! accumulated result of a run.

pub mod outcome;
pub mod payload;
pub mod report;
pub mod result_set;
