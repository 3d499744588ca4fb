//! Automatic flight roster assignment engine.
//!
//! Given a flight, the engine selects a legal crew and passenger list, seats every
//! person on the aircraft seat map, and commits the whole roster in a single database
//! transaction.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Data Layer** (`data/`) - SeaORM repositories, generic over `ConnectionTrait` so they
//!   run against the connection pool or an open transaction
//! - **Model Layer** (`model/`) - Domain types: roles, quotas, seat layouts, flight windows
//!   and roster results
//! - **Service Layer** (`service/`) - Availability checks, candidate selection, crew and
//!   passenger seating, and the roster orchestrator
//! - **Error Layer** (`error/`) - Application and roster error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Utilities** (`util/`) - Great-circle distance

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
