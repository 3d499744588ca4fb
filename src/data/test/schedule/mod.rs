use crate::data::schedule::ScheduleRepository;
use chrono::Duration;
use entity::sea_orm_active_enums::PersonKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
mod flights_for;
