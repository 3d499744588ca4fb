use crate::data::passenger::PassengerRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, passenger::PassengerFactory},
};

mod find_candidates;
mod get_by_ids;
