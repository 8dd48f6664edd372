//! Generic multi-item shipping label.

use serde::Serialize;
use tera::Tera;

use super::barcode::Barcode;
use super::{today, LabelRenderer, LabelVariant};
use crate::config::{MAX_VISIBLE_LINE_ITEMS, NOT_AVAILABLE};
use crate::error::AppError;
use crate::order::{Address, Order};

pub const TEMPLATE_NAME: &str = "label/generic.html";

/// Address lines as printed. Empty strings are skipped by the template.
#[derive(Debug, Serialize)]
struct AddressView {
    recipient: String,
    company: String,
    address1: String,
    address2: String,
    city_line: String,
    country: String,
    phone: String,
}

impl AddressView {
    fn new(address: &Address) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            recipient: address
                .recipient_name()
                .map(|name| name.to_uppercase())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            company: text(&address.company),
            address1: text(&address.address1),
            address2: text(&address.address2),
            city_line: address.city_line(),
            country: text(&address.country),
            phone: text(&address.phone),
        }
    }
}

#[derive(Debug, Serialize)]
struct ItemRow<'a> {
    quantity: u64,
    title: &'a str,
}

/// Address, contents and a decorative barcode, one panel per copy.
#[derive(Debug, Default)]
pub struct GenericLabel;

impl GenericLabel {
    pub fn new() -> Self {
        Self
    }
}

impl LabelRenderer for GenericLabel {
    fn render(&self, tera: &Tera, order: &Order, copies: u32) -> Result<String, AppError> {
        let items: Vec<ItemRow<'_>> = order
            .line_items
            .iter()
            .take(MAX_VISIBLE_LINE_ITEMS)
            .map(|item| ItemRow {
                quantity: item.display_quantity(),
                title: item.display_title(),
            })
            .collect();
        let more_items = order.line_items.len().saturating_sub(MAX_VISIBLE_LINE_ITEMS);

        let mut context = tera::Context::new();
        context.insert("copies", &copies.max(1));
        context.insert("order_name", &order.name);
        context.insert("order_id", &order.id);
        context.insert("date", &today());
        context.insert("address", &AddressView::new(&order.shipping_address));
        context.insert("items", &items);
        context.insert("more_items", &more_items);
        context.insert("not_available", NOT_AVAILABLE);
        context.insert("barcode", &Barcode::from_text(&order.name));

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }

    fn variant(&self) -> LabelVariant {
        LabelVariant::Generic
    }
}
