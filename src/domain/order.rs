use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{OrderId, Thickness};

/// Per-thickness labour rates published by the factory.
pub type LabourRates = BTreeMap<Thickness, f64>;

/// Server-computed cost line for one item of the calculation request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CostLine {
    pub thickness: Thickness,
    pub pieces: u32,
    pub area_sqft: f64,
    pub labour_rate: f64,
    pub labour_cost: f64,
}

/// Server-computed totals for the whole item list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CostSummary {
    pub total_pieces: u32,
    pub total_sqft: f64,
    pub labour_charges: f64,
    pub gst_amount: f64,
    pub grand_total: f64,
}

/// Authoritative cost breakdown produced once per Items -> Details transition.
///
/// Never recomputed client-side. Editing items after a calculation leaves
/// this snapshot stale until the user recalculates; see
/// [`CheckoutState::cost_is_stale`](crate::domain::checkout::CheckoutState::cost_is_stale).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalculatedCost {
    pub lines: Vec<CostLine>,
    pub summary: CostSummary,
}

/// Read-only snapshot of a server-created order held for the session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Human-readable job-work number, e.g. "JW-2026-0042".
    pub job_work_number: String,
    pub advance_percent: f64,
    pub advance_amount: f64,
    pub summary: CostSummary,
    pub transport_cost: Option<f64>,
    pub created_at: NaiveDateTime,
}
