//! Builds the webhook messages pollers enqueue.
//!
//! Every builder produces one [`QueuedNotification`] for one watcher target: the embed
//! describing the change, plus message content pinging the watcher's mentions.

use chrono::Utc;

use crate::model::{
    app::App,
    currency::Currency,
    news::NewsItem,
    notification::{NotificationEmbed, QueuedNotification, WebhookMessage},
    price::{AppPrice, PriceChange, PriceOverview},
    ugc::{PublishedFile, Ugc, UgcRemoval},
    watcher::WatcherTarget,
    workshop::{WorkshopFile, WorkshopListing},
};

const NEWS_COLOR: u32 = 0x1b2838;
const WORKSHOP_COLOR: u32 = 0x66c0f4;
const UGC_COLOR: u32 = 0x3498db;
const REMOVED_COLOR: u32 = 0xe74c3c;

/// Longest article excerpt included in a news embed.
const NEWS_EXCERPT_CHARS: usize = 300;

/// Announces a new news article for an app.
pub fn news(app: &App, item: &NewsItem, target: &WatcherTarget) -> QueuedNotification {
    let mut embed = NotificationEmbed::new(&item.title)
        .url(&item.url)
        .color(NEWS_COLOR)
        .thumbnail(app.icon_url())
        .timestamp(item.published_at)
        .footer(footer(&app.name, target));

    let excerpt = excerpt(&item.contents, NEWS_EXCERPT_CHARS);
    if !excerpt.is_empty() {
        embed = embed.description(excerpt);
    }
    if let Some(author) = item.author.as_ref().filter(|a| !a.is_empty()) {
        embed = embed.field("Author", author, true);
    }
    if let Some(label) = item.feed_label.as_ref().filter(|l| !l.is_empty()) {
        embed = embed.field("Feed", label, true);
    }

    queued(target, embed)
}

/// Describes a price change of an app, package or bundle in one currency.
pub fn price_changed(
    app: &App,
    currency: &Currency,
    previous: &AppPrice,
    current: &PriceOverview,
    change: PriceChange,
    target: &WatcherTarget,
) -> QueuedNotification {
    let name = previous.target.display_name(&app.name);
    let mut embed = NotificationEmbed::new(format!("{}: {}", change.title(), name))
        .url(previous.target.store_url())
        .color(change.color())
        .thumbnail(app.icon_url())
        .field(
            "Previous price",
            price_text(currency, previous.discounted_price, previous.discount),
            true,
        )
        .field(
            "Current price",
            price_text(currency, current.final_price, current.discount_percent),
            true,
        );

    if current.initial != current.final_price {
        embed = embed.field("Base price", currency.format_amount(current.initial), true);
    }

    queued(
        target,
        embed.footer(footer(&app.name, target)).timestamp(Utc::now()),
    )
}

/// Tells a price watcher it was removed because its entry has no price in its currency.
pub fn price_removed(
    app: &App,
    price: &AppPrice,
    currency: &Currency,
    target: &WatcherTarget,
) -> QueuedNotification {
    let name = price.target.display_name(&app.name);
    let embed = NotificationEmbed::new(format!("Price watcher removed: {}", name))
        .url(price.target.store_url())
        .color(REMOVED_COLOR)
        .thumbnail(app.icon_url())
        .description(format!(
            "{} is no longer sold for {} ({}), so the price watcher **{}** has been removed.",
            name, currency.name, currency.code, target.watcher_name
        ))
        .footer(footer(&app.name, target))
        .timestamp(Utc::now());

    queued(target, embed)
}

/// Announces the new head of an app's workshop listing.
pub fn workshop_submission(
    app: &App,
    listing: WorkshopListing,
    file: &WorkshopFile,
    target: &WatcherTarget,
) -> QueuedNotification {
    let heading = match listing {
        WorkshopListing::New => "New workshop submission",
        WorkshopListing::Update => "Workshop submission updated",
    };

    let mut embed = NotificationEmbed::new(&file.title)
        .url(file.url())
        .color(WORKSHOP_COLOR)
        .thumbnail(app.icon_url())
        .image(file.preview_url.clone())
        .field(heading, &app.name, false)
        .timestamp(file.listing_time(listing))
        .footer(footer(&app.name, target));

    if let Some(description) = file.description.as_deref() {
        let description = excerpt(description, NEWS_EXCERPT_CHARS);
        if !description.is_empty() {
            embed = embed.description(description);
        }
    }
    if let Some(creator) = &file.creator {
        embed = embed.field(
            "Author",
            format!("https://steamcommunity.com/profiles/{}", creator),
            true,
        );
    }

    queued(target, embed)
}

/// Announces an update to a watched UGC item.
pub fn ugc_updated(ugc: &Ugc, file: &PublishedFile, target: &WatcherTarget) -> QueuedNotification {
    let name = file.title.as_deref().unwrap_or(&ugc.name);

    let mut embed = NotificationEmbed::new(format!("Updated: {}", name))
        .url(ugc.url())
        .color(UGC_COLOR)
        .thumbnail(file.preview_url.clone())
        .footer(footer(name, target));

    if let Some(updated) = file.time_updated {
        embed = embed.timestamp(updated);
    }

    queued(target, embed)
}

/// Tells a UGC watcher it was removed because the item is gone.
pub fn ugc_removed(ugc: &Ugc, removal: &UgcRemoval, target: &WatcherTarget) -> QueuedNotification {
    let embed = NotificationEmbed::new(format!("UGC watcher removed: {}", ugc.name))
        .url(ugc.url())
        .color(REMOVED_COLOR)
        .description(format!(
            "{} The watcher **{}** has been removed.",
            removal.reason(),
            target.watcher_name
        ))
        .footer(footer(&ugc.name, target))
        .timestamp(Utc::now());

    queued(target, embed)
}

fn queued(target: &WatcherTarget, embed: NotificationEmbed) -> QueuedNotification {
    QueuedNotification {
        destination_id: target.webhook_id.clone(),
        destination_token: target.webhook_token.clone(),
        message: WebhookMessage {
            content: target.mention_content(),
            embeds: vec![embed],
        },
    }
}

fn footer(subject: &str, target: &WatcherTarget) -> String {
    format!("{} • Watcher: {}", subject, target.watcher_name)
}

fn price_text(currency: &Currency, amount: i32, discount: i32) -> String {
    if discount > 0 {
        format!("{} (-{}%)", currency.format_amount(amount), discount)
    } else {
        currency.format_amount(amount)
    }
}

/// First `max` characters of `text` with surrounding whitespace trimmed, marked with an
/// ellipsis when cut.
fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();

    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", text[..end].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        price::{PriceKind, PriceTarget},
        watcher::{Mention, MentionType},
    };

    fn target(mentions: Vec<Mention>) -> WatcherTarget {
        WatcherTarget {
            watcher_id: 1,
            watcher_name: "Deals".to_string(),
            webhook_id: "555".to_string(),
            webhook_token: "token".to_string(),
            mentions,
        }
    }

    fn currency() -> Currency {
        Currency {
            id: 1,
            code: "USD".to_string(),
            name: "US Dollar".to_string(),
            country_code: "us".to_string(),
        }
    }

    fn price(target: PriceTarget, price: i32, discount: i32, discounted_price: i32) -> AppPrice {
        AppPrice {
            id: 1,
            app_id: 440,
            target,
            currency_id: 1,
            price,
            discounted_price,
            discount,
            last_checked: None,
        }
    }

    fn app() -> App {
        App {
            id: 440,
            name: "Team Fortress 2".to_string(),
            icon: None,
            latest_news: None,
            last_checked_news: None,
        }
    }

    #[test]
    fn excerpt_keeps_short_text() {
        assert_eq!(excerpt("  short  ", 10), "short");
    }

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("ééééé", 3), "ééé…");
    }

    #[test]
    fn notification_targets_watcher_webhook_with_mentions() {
        let notification = price_removed(
            &app(),
            &price(PriceTarget::app(440), 1000, 0, 1000),
            &currency(),
            &target(vec![
                Mention {
                    entity_id: "10".to_string(),
                    mention_type: MentionType::Role,
                },
                Mention {
                    entity_id: "20".to_string(),
                    mention_type: MentionType::User,
                },
            ]),
        );

        assert_eq!(notification.destination_id, "555");
        assert_eq!(notification.destination_token, "token");
        assert_eq!(notification.message.content.as_deref(), Some("<@&10> <@20>"));
        assert_eq!(notification.message.embeds.len(), 1);
    }

    #[test]
    fn price_change_lists_previous_and_current_price() {
        let previous = price(PriceTarget::app(440), 1000, 0, 1000);
        let current = PriceOverview {
            initial: 1000,
            final_price: 800,
            discount_percent: 20,
        };

        let notification = price_changed(
            &app(),
            &currency(),
            &previous,
            &current,
            PriceChange::DiscountApplied,
            &target(Vec::new()),
        );

        let embed = &notification.message.embeds[0];
        assert_eq!(
            embed.title.as_deref(),
            Some("Discount applied: Team Fortress 2")
        );
        assert_eq!(embed.fields[0].value, "10.00 USD");
        assert_eq!(embed.fields[1].value, "8.00 USD (-20%)");
        assert_eq!(embed.fields[2].value, "10.00 USD");
        assert!(notification.message.content.is_none());
    }

    #[test]
    fn bundle_removal_names_and_links_the_bundle() {
        let bundle = PriceTarget {
            kind: PriceKind::Bundle,
            id: 232,
        };

        let notification = price_removed(
            &app(),
            &price(bundle, 4999, 0, 4999),
            &currency(),
            &target(Vec::new()),
        );

        let embed = &notification.message.embeds[0];
        assert_eq!(
            embed.title.as_deref(),
            Some("Price watcher removed: Team Fortress 2 (bundle 232)")
        );
        assert_eq!(
            embed.url.as_deref(),
            Some("https://store.steampowered.com/bundle/232")
        );
    }
}
