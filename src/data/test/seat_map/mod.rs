use crate::data::seat_map::SeatMapRepository;
use entity::sea_orm_active_enums::SeatType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture::seat_map as layout};

mod get_by_seat_types;
