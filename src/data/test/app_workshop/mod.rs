use crate::{data::app_workshop::AppWorkshopRepository, model::workshop::WorkshopListing};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::app_workshop::AppWorkshopFactory};

mod due;
mod record_latest;
