//! Index-addressed line-item edits fed by raw text inputs.

use crate::domain::item::LineItem;
use crate::domain::types::{ItemNotes, Thickness, parse_f64_or_zero, parse_u32_or_zero};

/// Editable fields of a [`LineItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    ThicknessMm,
    WidthInch,
    HeightInch,
    Quantity,
    Notes,
}

/// Applies a single-field update from raw input text.
///
/// Numeric fields parse defensively: invalid input coerces to 0 rather than
/// failing the edit. A thickness outside the allowed set leaves the previous
/// value in place, since the selector only offers valid options anyway.
pub fn apply_update(item: &mut LineItem, field: ItemField, raw: &str) {
    match field {
        ItemField::ThicknessMm => {
            if let Ok(thickness) = Thickness::from_mm(parse_u32_or_zero(raw)) {
                item.thickness = thickness;
            }
        }
        ItemField::WidthInch => item.width_inch = parse_f64_or_zero(raw),
        ItemField::HeightInch => item.height_inch = parse_f64_or_zero(raw),
        ItemField::Quantity => item.quantity = parse_u32_or_zero(raw),
        ItemField::Notes => item.notes = ItemNotes::new(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_garbage_coerces_to_zero() {
        let mut item = LineItem::default();
        apply_update(&mut item, ItemField::WidthInch, "24");
        apply_update(&mut item, ItemField::HeightInch, "oops");
        apply_update(&mut item, ItemField::Quantity, "-3");
        assert_eq!(item.width_inch, 24.0);
        assert_eq!(item.height_inch, 0.0);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn unsupported_thickness_keeps_previous_value() {
        let mut item = LineItem::default();
        let before = item.thickness;
        apply_update(&mut item, ItemField::ThicknessMm, "7");
        assert_eq!(item.thickness, before);
        apply_update(&mut item, ItemField::ThicknessMm, "8");
        assert_eq!(item.thickness.mm(), 8);
    }
}
