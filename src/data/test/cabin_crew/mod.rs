use crate::data::cabin_crew::CabinCrewRepository;
use entity::sea_orm_active_enums::AttendantType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::cabin_crew::CabinCrewFactory};

mod dishes;
mod find_candidates;
