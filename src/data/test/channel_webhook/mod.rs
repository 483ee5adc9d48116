use crate::data::channel_webhook::ChannelWebhookRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod purge_by_webhook_id;
