use chrono::{DateTime, Utc};

/// Kind of Steam store entry a price is tracked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    App,
    /// A package, which the store calls a sub.
    Sub,
    Bundle,
}

impl PriceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceKind::App => "app",
            PriceKind::Sub => "sub",
            PriceKind::Bundle => "bundle",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "app" => Some(PriceKind::App),
            "sub" => Some(PriceKind::Sub),
            "bundle" => Some(PriceKind::Bundle),
            _ => None,
        }
    }
}

/// A priced store entry: an app, a package or a bundle, by Steam id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceTarget {
    pub kind: PriceKind,
    pub id: i32,
}

impl PriceTarget {
    pub fn app(id: i32) -> Self {
        Self {
            kind: PriceKind::App,
            id,
        }
    }

    pub fn store_url(&self) -> String {
        format!("https://store.steampowered.com/{}/{}", self.kind.as_str(), self.id)
    }

    /// Name shown in notifications, based on the name of the app the price was registered
    /// under.
    pub fn display_name(&self, app_name: &str) -> String {
        match self.kind {
            PriceKind::App => app_name.to_string(),
            PriceKind::Sub => format!("{} (package {})", app_name, self.id),
            PriceKind::Bundle => format!("{} (bundle {})", app_name, self.id),
        }
    }
}

/// Cached price of a store entry in one currency.
///
/// `app_id` is the app the entry is listed under; for app prices it equals the target id.
#[derive(Debug, Clone, PartialEq)]
pub struct AppPrice {
    pub id: i32,
    pub app_id: i32,
    pub target: PriceTarget,
    pub currency_id: i32,
    /// Base price in minor units.
    pub price: i32,
    /// Price after discount in minor units.
    pub discounted_price: i32,
    /// Discount percentage.
    pub discount: i32,
    pub last_checked: Option<DateTime<Utc>>,
}

impl AppPrice {
    /// Converts a price row, or `None` if its kind is not one this crate knows.
    pub fn from_entity(entity: entity::app_price::Model) -> Option<Self> {
        let kind = PriceKind::parse(&entity.kind)?;

        Some(Self {
            id: entity.id,
            app_id: entity.app_id,
            target: PriceTarget {
                kind,
                id: entity.target_id,
            },
            currency_id: entity.currency_id,
            price: entity.price,
            discounted_price: entity.discounted_price,
            discount: entity.discount,
            last_checked: entity.last_checked,
        })
    }
}

/// Live price of a store entry as reported by Steam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOverview {
    pub initial: i32,
    pub final_price: i32,
    pub discount_percent: i32,
}

/// Result of a price lookup for a single store entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLookup {
    Priced(PriceOverview),
    /// Steam reported `success: false`, or the entry has no price (free to play).
    Unavailable,
}

/// How a fetched price differs from the cached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceChange {
    Unchanged,
    DiscountApplied,
    DiscountEnded,
    PriceIncreased,
    PriceDecreased,
    BasePriceChanged,
}

impl PriceChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, PriceChange::Unchanged)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PriceChange::Unchanged => "Price unchanged",
            PriceChange::DiscountApplied => "Discount applied",
            PriceChange::DiscountEnded => "Discount ended",
            PriceChange::PriceIncreased => "Price increased",
            PriceChange::PriceDecreased => "Price decreased",
            PriceChange::BasePriceChanged => "Base price changed",
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            PriceChange::DiscountApplied | PriceChange::PriceDecreased => 0x2ecc71,
            PriceChange::PriceIncreased => 0xe74c3c,
            PriceChange::DiscountEnded | PriceChange::BasePriceChanged => 0xf39c12,
            PriceChange::Unchanged => 0x95a5a6,
        }
    }
}

/// Classifies the difference between a cached price and a freshly fetched one.
///
/// A discount change takes precedence over the final price moving, since any discount
/// change also moves the final price.
pub fn classify_price_change(stored: &AppPrice, fetched: &PriceOverview) -> PriceChange {
    if stored.price == fetched.initial
        && stored.discounted_price == fetched.final_price
        && stored.discount == fetched.discount_percent
    {
        return PriceChange::Unchanged;
    }

    if stored.discount != fetched.discount_percent {
        return if fetched.discount_percent > 0 {
            PriceChange::DiscountApplied
        } else {
            PriceChange::DiscountEnded
        };
    }

    match fetched.final_price.cmp(&stored.discounted_price) {
        std::cmp::Ordering::Greater => PriceChange::PriceIncreased,
        std::cmp::Ordering::Less => PriceChange::PriceDecreased,
        std::cmp::Ordering::Equal => PriceChange::BasePriceChanged,
    }
}
