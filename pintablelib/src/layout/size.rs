//! Unit conversion at the rendering boundary.
//!
//! The engine works in unit-agnostic magnitudes. Turning a magnitude into
//! something a renderer can paint (`"200rpx"`, `"100px"`) is delegated to a
//! [`SizeFormatter`]. Pre-formatted sizes pass through unchanged.

use crate::data::Size;

/// Converts layout magnitudes into renderer size strings.
pub trait SizeFormatter {
    /// Format a magnitude in layout units.
    fn format_units(&self, units: f64) -> String;

    /// Format a declared or resolved size.
    fn format(&self, size: &Size) -> String {
        match size {
            Size::Units(units) => self.format_units(*units),
            Size::Formatted(text) => text.clone(),
        }
    }
}

/// Responsive pixels: each layout unit becomes `scale` rpx.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpxFormatter {
    pub scale: f64,
}

impl Default for RpxFormatter {
    fn default() -> Self {
        Self { scale: 2.0 }
    }
}

impl SizeFormatter for RpxFormatter {
    fn format_units(&self, units: f64) -> String {
        format!("{}rpx", round2(units * self.scale))
    }
}

/// Plain CSS pixels, one per layout unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PxFormatter;

impl SizeFormatter for PxFormatter {
    fn format_units(&self, units: f64) -> String {
        format!("{}px", round2(units))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
