//! Branded "thank you" label: logo, greeting and social footer.

use std::sync::Arc;

use tera::Tera;

use super::{today, LabelRenderer, LabelVariant};
use crate::config::{BrandedConfig, DEFAULT_CUSTOMER_NAME};
use crate::error::AppError;
use crate::order::Order;

pub const TEMPLATE_NAME: &str = "label/branded.html";

/// Always renders exactly one label, regardless of the requested copy count.
#[derive(Debug)]
pub struct BrandedLabel {
    branding: BrandedConfig,
    /// `data:` URI for the logo, or empty when the asset could not be loaded.
    logo_src: Arc<str>,
}

impl BrandedLabel {
    pub fn new(branding: BrandedConfig, logo_src: Arc<str>) -> Self {
        Self { branding, logo_src }
    }
}

impl LabelRenderer for BrandedLabel {
    fn render(&self, tera: &Tera, order: &Order, _copies: u32) -> Result<String, AppError> {
        let customer_name = order
            .shipping_address
            .greeting_name()
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_uppercase();
        let date = self.branding.date.clone().unwrap_or_else(today);

        let mut context = tera::Context::new();
        context.insert("logo_src", &*self.logo_src);
        context.insert("customer_name", &customer_name);
        context.insert("order_name", &order.name);
        context.insert("date", &date);
        context.insert("brand_name", &self.branding.brand_name);
        context.insert("handle", &self.branding.handle);
        context.insert("website", &self.branding.website);

        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }

    fn variant(&self) -> LabelVariant {
        LabelVariant::Branded
    }
}
