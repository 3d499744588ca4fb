use crate::data::flight::{FlightRepository, NewFlight};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append_menu_item;
mod create;
mod get_by_id;
mod get_without_roster;
mod menu;
