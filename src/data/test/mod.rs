mod app;
mod app_news;
mod app_price;
mod app_workshop;
mod channel_webhook;
mod ugc;
mod watcher;
