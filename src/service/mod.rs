//! Business logic layer.
//!
//! Services orchestrate repositories to implement roster operations. The roster
//! pipeline runs leaves first: availability checks feed the candidate selector, whose
//! picks are seated by the crew assignor and the passenger bin-packer, all sequenced by
//! `RosterService` inside one transaction.

pub mod availability;
pub mod crew_assignment;
pub mod flight;
pub mod passenger_seating;
pub mod registry;
pub mod roster;
pub mod selector;

#[cfg(test)]
mod test;
