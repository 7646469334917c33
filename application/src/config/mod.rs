//! Application-level configuration.
//!
//! - [`HarvestParams`] — fan-out control for [`HarvestUseCase`](crate::use_cases::harvest::HarvestUseCase)

pub mod harvest_params;

pub use harvest_params::HarvestParams;
