//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod harvest;
pub mod parse_url;

#[cfg(test)]
pub(crate) mod testing;
