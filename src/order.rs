//! Order data decoded from `/print` query parameters.
//!
//! Orders are transient: each request builds one from its query string and
//! drops it once the label is rendered. Decoding never fails. Malformed JSON
//! payloads are logged and replaced with empty values so a label can always
//! be printed.

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::{DEFAULT_ITEM_TITLE, DEFAULT_ORDER_NAME};

/// An order as far as a shipping label is concerned.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub id: Option<String>,
    pub name: String,
    pub shipping_address: Address,
    pub line_items: Vec<LineItem>,
}

impl Order {
    /// Build an order from raw (already URL-decoded) query values.
    ///
    /// Empty strings count as absent. A missing name becomes "Order".
    pub fn from_query(
        id: Option<&str>,
        name: Option<&str>,
        shipping_address: Option<&str>,
        line_items: Option<&str>,
    ) -> Self {
        Self {
            id: non_empty(id).map(str::to_string),
            name: non_empty(name).unwrap_or(DEFAULT_ORDER_NAME).to_string(),
            shipping_address: parse_address(shipping_address),
            line_items: parse_line_items(line_items),
        }
    }
}

/// Shipping address. Every field is optional and renders as empty when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address1: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address2: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub province: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
}

impl Address {
    /// Full recipient name: `name`, else first and last name joined.
    pub fn recipient_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        (!joined.is_empty()).then_some(joined)
    }

    /// Province code when present, else the full province name.
    pub fn region(&self) -> Option<&str> {
        self.province_code.as_deref().or(self.province.as_deref())
    }

    /// "{city}, {region} {zip}" with missing parts (and their separators) dropped.
    pub fn city_line(&self) -> String {
        let region_zip = [self.region(), self.zip.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        match (self.city.as_deref(), region_zip.is_empty()) {
            (Some(city), false) => format!("{}, {}", city, region_zip),
            (Some(city), true) => city.to_string(),
            (None, _) => region_zip,
        }
    }

    /// Customer first name for greetings: `firstName`, else the text of `name`
    /// up to its first space. A name starting with a space has no first word.
    pub fn greeting_name(&self) -> Option<&str> {
        self.first_name.as_deref().or_else(|| {
            self.name
                .as_deref()
                .and_then(|name| name.split(' ').next())
                .filter(|first| !first.is_empty())
        })
    }
}

/// A line item: `{ title|name, quantity }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<u64>,
}

impl LineItem {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(DEFAULT_ITEM_TITLE)
    }

    /// Quantity, defaulting to 1 when absent or zero.
    pub fn display_quantity(&self) -> u64 {
        self.quantity.unwrap_or(1)
    }
}

/// Parse the `shippingAddress` JSON payload, falling back to an empty address.
pub fn parse_address(raw: Option<&str>) -> Address {
    let Some(raw) = non_empty(raw) else {
        return Address::default();
    };
    match serde_json::from_str::<Address>(raw) {
        Ok(address) => address,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid shippingAddress JSON, using empty address");
            Address::default()
        }
    }
}

/// Parse the `lineItems` JSON payload, falling back to no items.
///
/// Entries are decoded one by one. An entry that is not an item object keeps
/// its row with default title and quantity.
pub fn parse_line_items(raw: Option<&str>) -> Vec<LineItem> {
    let Some(raw) = non_empty(raw) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries.into_iter().map(line_item_from_value).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid lineItems JSON, using empty item list");
            Vec::new()
        }
    }
}

fn line_item_from_value(value: Value) -> LineItem {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Unusable line item, using defaults");
        LineItem::default()
    })
}

/// Coerce the `labelCount` parameter into a copy count in `1..=max_copies`.
///
/// Parses like a lenient integer read: leading whitespace, an optional sign,
/// then as many digits as are present. No digits or a value below one becomes
/// 1. Values too large for `u32` count as `max_copies`.
pub fn parse_label_count(raw: Option<&str>, max_copies: u32) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let count = match digits[..end].parse::<u32>() {
        Ok(n) if !negative && n >= 1 => n,
        Err(e) if !negative && *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        _ => 1,
    };
    count.min(max_copies.max(1))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Accept strings, numbers and booleans as text. `null` and "" are absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept positive integers given as numbers or numeric strings. Zero, negative
/// or unparseable quantities are absent.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let quantity = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(quantity.filter(|q| *q > 0))
}
