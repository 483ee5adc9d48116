use crate::{
    data::watcher::WatcherRepository,
    model::{
        price::{PriceKind, PriceTarget},
        watcher::{MentionType, WatcherType},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::watcher::WatcherFactory};

mod count;
mod delete;
mod targets;
