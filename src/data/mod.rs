//! Database repository layer for all roster entities.
//!
//! Repositories wrap SeaORM queries for one table (or one table and its join tables)
//! each. They are generic over `ConnectionTrait` so the same repository runs against
//! the connection pool or inside the roster transaction. Repositories return entity
//! models; conversion to domain models happens in the service layer unless noted.

pub mod aircraft_type;
pub mod airport;
pub mod cabin_crew;
pub mod flight;
pub mod passenger;
pub mod pilot;
pub mod roster_claim;
pub mod schedule;
pub mod seat_assignment;
pub mod seat_map;

#[cfg(test)]
mod test;
