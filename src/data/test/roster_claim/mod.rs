use crate::data::roster_claim::RosterClaimRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod claim;
