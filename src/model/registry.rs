use serde::{Deserialize, Serialize};

/// Record totals across the registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryCounts {
    pub flights: u64,
    pub passengers: u64,
    pub pilots: u64,
    pub cabin_crew: u64,
}
