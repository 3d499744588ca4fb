use crate::data::pilot::PilotRepository;
use entity::sea_orm_active_enums::SeniorityLevel;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::pilot::PilotFactory};

mod count;
mod find_candidates;
