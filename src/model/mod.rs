//! Domain models for roster operations.
//!
//! Entity models from the `entity` crate are converted into these types at the
//! repository or service boundary via `from_entity`.

pub mod aircraft;
pub mod flight;
pub mod passenger;
pub mod quota;
pub mod registry;
pub mod role;
pub mod roster;
