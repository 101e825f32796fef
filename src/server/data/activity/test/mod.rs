mod add_participant;
mod insert_if_absent;

use super::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
