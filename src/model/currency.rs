/// A currency guilds can choose for price watchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub id: i32,
    /// ISO 4217 code such as `USD`.
    pub code: String,
    pub name: String,
    /// Steam storefront country code used to request prices in this currency.
    pub country_code: String,
}

impl Currency {
    pub fn from_entity(entity: entity::currency::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            country_code: entity.country_code,
        }
    }

    /// Formats an amount given in the currency's minor unit, e.g. `1999` -> `19.99 USD`.
    pub fn format_amount(&self, amount: i32) -> String {
        let sign = if amount < 0 { "-" } else { "" };
        let amount = amount.unsigned_abs();
        format!("{}{}.{:02} {}", sign, amount / 100, amount % 100, self.code)
    }
}
