//! Label rendering.
//!
//! A `LabelRenderer` turns an `Order` into a complete HTML document sized for a
//! 4x6 inch thermal label. Two renderers exist:
//! - `GenericLabel`: address, contents and a decorative barcode, repeated once
//!   per requested copy with page breaks in between.
//! - `BrandedLabel`: a single "thank you" label with the shop logo and social
//!   footer. Copy counts are ignored.
//!
//! The active renderer is chosen by `label.variant` in the configuration.

pub mod barcode;
pub mod branded;
pub mod generic;

use std::sync::Arc;

use chrono::Local;
use serde::Deserialize;
use tera::Tera;

use crate::config::{AppConfig, LABEL_DATE_FORMAT};
use crate::error::AppError;
use crate::logo::load_logo_src;
use crate::order::Order;

pub use branded::BrandedLabel;
pub use generic::GenericLabel;

/// Renders an order into an HTML label document.
pub trait LabelRenderer: Send + Sync {
    /// Render `copies` labels for `order`. Renderers that only ever produce a
    /// single label ignore `copies`.
    fn render(&self, tera: &Tera, order: &Order, copies: u32) -> Result<String, AppError>;

    /// Which variant this renderer produces.
    fn variant(&self) -> LabelVariant;
}

/// Which label style `/print` produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelVariant {
    #[default]
    Generic,
    Branded,
}

impl std::fmt::Display for LabelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelVariant::Generic => f.write_str("generic"),
            LabelVariant::Branded => f.write_str("branded"),
        }
    }
}

/// Build the renderer selected by the configuration.
///
/// For the branded variant this reads the logo asset once; a missing logo is
/// logged and leaves the image source empty.
pub fn build_renderer(config: &AppConfig) -> Arc<dyn LabelRenderer> {
    match config.label.variant {
        LabelVariant::Generic => Arc::new(GenericLabel::new()),
        LabelVariant::Branded => {
            let logo_src = load_logo_src(&config.branded.logo_path);
            Arc::new(BrandedLabel::new(config.branded.clone(), logo_src))
        }
    }
}

/// Today's date in label format, e.g. "Oct 9, 2026".
pub fn today() -> String {
    Local::now().format(LABEL_DATE_FORMAT).to_string()
}
