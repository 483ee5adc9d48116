pub use super::app::Entity as App;
pub use super::app_news::Entity as AppNews;
pub use super::app_price::Entity as AppPrice;
pub use super::app_workshop::Entity as AppWorkshop;
pub use super::channel_webhook::Entity as ChannelWebhook;
pub use super::currency::Entity as Currency;
pub use super::guild::Entity as Guild;
pub use super::ugc::Entity as Ugc;
pub use super::watcher::Entity as Watcher;
pub use super::watcher_mention::Entity as WatcherMention;
