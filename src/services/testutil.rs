//! Shared fixtures for the mock-backed service tests.

use chrono::NaiveDateTime;

use crate::domain::checkout::CheckoutState;
use crate::domain::customer::CustomerDetails;
use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, CostSummary, Order};
use crate::domain::types::{OrderId, Thickness};

/// Server summary for the canonical one-sheet scenario: 6mm, 24x36in, qty 1.
pub fn summary_6sqft() -> CostSummary {
    CostSummary {
        total_pieces: 1,
        total_sqft: 6.0,
        labour_charges: 900.0,
        gst_amount: 162.0,
        grand_total: 1062.0,
    }
}

/// Order snapshot as the backend would return it.
pub fn order_snapshot(id: i64) -> Order {
    Order {
        id: OrderId::new(id).expect("positive test id"),
        job_work_number: format!("JW-2026-{id:04}"),
        advance_percent: 50.0,
        advance_amount: 531.0,
        summary: summary_6sqft(),
        transport_cost: None,
        created_at: NaiveDateTime::default(),
    }
}

/// A checkout on the Details step with valid customer fields, the canonical
/// item, its cost snapshot and an accepted disclaimer.
pub fn six_sqft_state() -> CheckoutState {
    let mut state = CheckoutState::new();
    state.replace_items(vec![LineItem {
        thickness: Thickness::Mm6,
        width_inch: 24.0,
        height_inch: 36.0,
        quantity: 1,
        ..LineItem::default()
    }]);
    state
        .advance_to_details(CalculatedCost {
            lines: vec![],
            summary: summary_6sqft(),
        })
        .expect("fresh state advances");
    state.customer = CustomerDetails {
        name: "Asha Traders".into(),
        phone: "+919876543210".into(),
        email: Some("accounts@asha.example".into()),
        delivery_address: "Plot 14, MIDC".into(),
        gst_number: None,
    };
    state.disclaimer_accepted = true;
    state
}
