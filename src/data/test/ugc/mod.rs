use crate::data::ugc::UgcRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::ugc::UgcFactory};

mod due;
mod record_update;
