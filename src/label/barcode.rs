//! Decorative barcode for the generic label footer.
//!
//! This is not a scannable symbology. Each alphanumeric character of the order
//! name becomes one bar whose width is derived from its character code.

use serde::Serialize;

use crate::config::{BARCODE_BAR_GAP, BARCODE_BAR_HEIGHT, BARCODE_BAR_Y, BARCODE_START_X};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Bars plus the SVG canvas size needed to draw them.
#[derive(Debug, Clone, Serialize)]
pub struct Barcode {
    pub bars: Vec<Bar>,
    pub width: u32,
    pub height: u32,
}

impl Barcode {
    /// Lay out bars for `text`, ignoring every non-ASCII-alphanumeric character.
    ///
    /// Bar width is `(char code mod 3) + 1`; the cursor starts at x=10 and
    /// advances by `width + 2` after each bar.
    pub fn from_text(text: &str) -> Self {
        let mut cursor = BARCODE_START_X;
        let bars = text
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| {
                let width = (c as u32 % 3) + 1;
                let bar = Bar {
                    x: cursor,
                    y: BARCODE_BAR_Y,
                    width,
                    height: BARCODE_BAR_HEIGHT,
                };
                cursor += width + BARCODE_BAR_GAP;
                bar
            })
            .collect();

        Self {
            bars,
            width: cursor + BARCODE_START_X,
            height: BARCODE_BAR_HEIGHT + 2 * BARCODE_BAR_Y,
        }
    }
}
