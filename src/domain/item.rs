use serde::{Deserialize, Serialize};

use crate::domain::types::{ItemNotes, Thickness};

/// Square inches per square foot, the divisor for glass area math.
pub const SQIN_PER_SQFT: f64 = 144.0;

/// A single glass piece on the job-work order.
///
/// Dimensions are entered in inches; the derived area is for display and
/// transport requests only. Authoritative pricing always comes from the
/// backend calculation endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub thickness: Thickness,
    pub width_inch: f64,
    pub height_inch: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "ItemNotes::is_empty")]
    pub notes: ItemNotes,
}

impl LineItem {
    /// Area of this line in square feet, across all its pieces.
    pub fn area_sqft(&self) -> f64 {
        self.width_inch * self.height_inch / SQIN_PER_SQFT * f64::from(self.quantity)
    }

    /// True when the line can be sent for cost calculation.
    pub fn is_complete(&self) -> bool {
        self.width_inch > 0.0 && self.height_inch > 0.0 && self.quantity > 0
    }
}

impl Default for LineItem {
    /// The blank row a fresh workflow starts with.
    fn default() -> Self {
        Self {
            thickness: Thickness::Mm6,
            width_inch: 0.0,
            height_inch: 0.0,
            quantity: 1,
            notes: ItemNotes::default(),
        }
    }
}

/// Total area across all lines, square feet. Feeds transport cost requests.
pub fn total_area_sqft(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::area_sqft).sum()
}
