use crate::data::app::AppRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod due_for_news;
mod get_many;
mod record_latest_news;
