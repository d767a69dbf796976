//! In-memory state of the multi-step job-work checkout.
//!
//! The state lives for one page view: it is created on workflow entry,
//! mutated by the service layer as the user walks Items -> Details ->
//! Payment -> Done, and discarded on navigation away. The backend stays
//! authoritative for pricing, order numbers and payment status; this struct
//! only sequences the steps and enforces the transition guards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::customer::CustomerDetails;
use crate::domain::item::LineItem;
use crate::domain::order::{CalculatedCost, Order};
use crate::domain::payment::PaymentMethod;
use crate::domain::transport::{GeoPoint, TransportLocation, TransportQuote};

/// Workflow steps, strictly forward except the Details -> Items back edge.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Items,
    Details,
    Payment,
    Done,
}

/// User-initiated action types that issue backend requests. Each carries its
/// own re-entrancy guard so a second trigger while one request is in flight
/// is rejected instead of duplicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Calculate,
    Submit,
    Estimate,
    Locate,
    Pay,
}

/// Per-action in-flight flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusyFlags {
    calculate: bool,
    submit: bool,
    estimate: bool,
    locate: bool,
    pay: bool,
}

impl BusyFlags {
    fn slot(&mut self, kind: ActionKind) -> &mut bool {
        match kind {
            ActionKind::Calculate => &mut self.calculate,
            ActionKind::Submit => &mut self.submit,
            ActionKind::Estimate => &mut self.estimate,
            ActionKind::Locate => &mut self.locate,
            ActionKind::Pay => &mut self.pay,
        }
    }

    pub fn is_busy(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Calculate => self.calculate,
            ActionKind::Submit => self.submit,
            ActionKind::Estimate => self.estimate,
            ActionKind::Locate => self.locate,
            ActionKind::Pay => self.pay,
        }
    }
}

/// Reasons order submission is blocked on the Details step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionBlock {
    #[error("disclaimer must be accepted before submitting")]
    DisclaimerNotAccepted,
    #[error("name, phone and delivery address are required")]
    MissingContactFields,
    #[error("transport is required but no cost quote is present")]
    TransportQuoteMissing,
}

/// Invalid transition attempts rejected by the state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("action not available on step {0:?}")]
    WrongStep(CheckoutStep),
    #[error(transparent)]
    Blocked(#[from] SubmissionBlock),
    #[error("no order has been created")]
    NoOrder,
    #[error("no payment method selected")]
    NoPaymentMethod,
}

/// Minimum number of item rows a checkout keeps.
pub const MIN_LINE_ITEMS: usize = 1;

/// The whole checkout, one instance per page view.
#[derive(Clone, Debug, Default)]
pub struct CheckoutState {
    step: CheckoutStep,
    items: Vec<LineItem>,
    pub customer: CustomerDetails,
    pub disclaimer_accepted: bool,
    transport_required: bool,
    location: TransportLocation,
    quote: Option<TransportQuote>,
    cost: Option<CalculatedCost>,
    /// Item list snapshot taken when `cost` was stored, for staleness checks.
    costed_items: Vec<LineItem>,
    order: Option<Order>,
    pub payment_method: PaymentMethod,
    pub busy: BusyFlags,
}

impl CheckoutState {
    /// Fresh workflow: one blank item row on the Items step.
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::default()],
            ..Self::default()
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Appends an item row, invalidating any held transport quote.
    pub fn push_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.quote = None;
    }

    /// Removes the row at `index`, keeping the one-row floor. Returns
    /// whether a row was removed; removal invalidates any held quote.
    pub fn remove_item_at(&mut self, index: usize) -> bool {
        if self.items.len() <= MIN_LINE_ITEMS || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        self.quote = None;
        true
    }

    /// Applies an edit to the row at `index`, invalidating any held quote.
    /// Returns false when the index is out of range.
    pub fn edit_item(&mut self, index: usize, edit: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                edit(item);
                self.quote = None;
                true
            }
            None => false,
        }
    }

    /// Replaces the whole item list, invalidating any held quote.
    pub fn replace_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.quote = None;
    }

    pub fn cost(&self) -> Option<&CalculatedCost> {
        self.cost.as_ref()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn transport_required(&self) -> bool {
        self.transport_required
    }

    pub fn location(&self) -> &TransportLocation {
        &self.location
    }

    pub fn transport_quote(&self) -> Option<&TransportQuote> {
        self.quote.as_ref()
    }

    /// Marks an action as in flight. Returns false when one already is,
    /// in which case the caller must not issue another request.
    pub fn begin_action(&mut self, kind: ActionKind) -> bool {
        let slot = self.busy.slot(kind);
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Clears the in-flight flag for an action.
    pub fn finish_action(&mut self, kind: ActionKind) {
        *self.busy.slot(kind) = false;
    }

    /// True when items changed since the held cost snapshot was computed.
    ///
    /// The snapshot is not auto-invalidated; the user must re-enter the
    /// Items step and recalculate. Exposed so a UI can warn.
    pub fn cost_is_stale(&self) -> bool {
        self.cost.is_some() && self.items != self.costed_items
    }

    /// Stores the server cost breakdown and advances Items -> Details.
    pub fn advance_to_details(&mut self, cost: CalculatedCost) -> Result<(), TransitionError> {
        if self.step != CheckoutStep::Items {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.costed_items = self.items.clone();
        self.cost = Some(cost);
        self.step = CheckoutStep::Details;
        Ok(())
    }

    /// Unconditional back edge Details -> Items. Discards nothing.
    pub fn back_to_items(&mut self) -> Result<(), TransitionError> {
        if self.step != CheckoutStep::Details {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.step = CheckoutStep::Items;
        Ok(())
    }

    /// Submission guard shared by both Details exits.
    pub fn submission_block(&self) -> Option<SubmissionBlock> {
        if !self.disclaimer_accepted {
            return Some(SubmissionBlock::DisclaimerNotAccepted);
        }
        if !self.customer.is_submittable() {
            return Some(SubmissionBlock::MissingContactFields);
        }
        if self.transport_required && self.quote.is_none() {
            return Some(SubmissionBlock::TransportQuoteMissing);
        }
        None
    }

    /// Stores the created order and advances Details -> Payment. The
    /// submission guards hold here too: the Payment step is unreachable
    /// without an accepted disclaimer, contact fields and, when transport
    /// is required, a quote.
    pub fn enter_payment(&mut self, order: Order) -> Result<(), TransitionError> {
        if self.step != CheckoutStep::Details {
            return Err(TransitionError::WrongStep(self.step));
        }
        if let Some(block) = self.submission_block() {
            return Err(TransitionError::Blocked(block));
        }
        self.order = Some(order);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Terminal transition Payment -> Done. Only reachable with a created
    /// order and a selected payment method; the service layer calls this
    /// solely after a cash-preference ack or a verification success.
    pub fn mark_done(&mut self) -> Result<(), TransitionError> {
        if self.step != CheckoutStep::Payment {
            return Err(TransitionError::WrongStep(self.step));
        }
        if self.order.is_none() {
            return Err(TransitionError::NoOrder);
        }
        if self.payment_method == PaymentMethod::Unset {
            return Err(TransitionError::NoPaymentMethod);
        }
        self.step = CheckoutStep::Done;
        Ok(())
    }

    /// Restart from the terminal step: back to Items with cost, disclaimer,
    /// order and payment method cleared. Items and customer details survive,
    /// matching the shipped behavior.
    pub fn restart(&mut self) -> Result<(), TransitionError> {
        if self.step != CheckoutStep::Done {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.step = CheckoutStep::Items;
        self.cost = None;
        self.costed_items.clear();
        self.disclaimer_accepted = false;
        self.order = None;
        self.payment_method = PaymentMethod::Unset;
        Ok(())
    }

    /// Toggles the transport requirement. Switching it off always discards
    /// any held quote; switching it on never restores one.
    pub fn set_transport_required(&mut self, required: bool) {
        self.transport_required = required;
        if !required {
            self.quote = None;
        }
    }

    /// Replaces the delivery address, invalidating any cached quote.
    pub fn set_address(&mut self, address: String) {
        self.location.address = address;
        self.quote = None;
    }

    /// Replaces the landmark, invalidating any cached quote.
    pub fn set_landmark(&mut self, landmark: Option<String>) {
        self.location.landmark = landmark;
        self.quote = None;
    }

    /// Stores device-resolved coordinates, invalidating any cached quote.
    pub fn set_coordinates(&mut self, point: GeoPoint) {
        self.location.coordinates = Some(point);
        self.quote = None;
    }

    /// Stores a fresh transport quote snapshot.
    pub fn store_quote(&mut self, quote: TransportQuote) {
        self.quote = Some(quote);
    }

    /// Drops the held quote, used when an estimate attempt fails server-side.
    pub fn clear_quote(&mut self) {
        self.quote = None;
    }

    /// Display total: server grand total plus the transport quote when
    /// transport is required and quoted. Never used for pricing requests.
    pub fn payable_total(&self) -> Option<f64> {
        let grand_total = self.cost.as_ref()?.summary.grand_total;
        let transport = match (self.transport_required, &self.quote) {
            (true, Some(quote)) => quote.total_transport_cost,
            _ => 0.0,
        };
        Some(grand_total + transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::CostSummary;

    fn summary(grand_total: f64) -> CostSummary {
        CostSummary {
            total_pieces: 1,
            total_sqft: 6.0,
            labour_charges: grand_total,
            gst_amount: 0.0,
            grand_total,
        }
    }

    fn costed_state() -> CheckoutState {
        let mut state = CheckoutState::new();
        state
            .advance_to_details(CalculatedCost {
                lines: vec![],
                summary: summary(1000.0),
            })
            .unwrap();
        state
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut state = CheckoutState::new();
        assert_eq!(
            state.back_to_items(),
            Err(TransitionError::WrongStep(CheckoutStep::Items))
        );
        assert_eq!(
            state.mark_done(),
            Err(TransitionError::WrongStep(CheckoutStep::Items))
        );
        assert_eq!(
            state.restart(),
            Err(TransitionError::WrongStep(CheckoutStep::Items))
        );
    }

    #[test]
    fn toggling_transport_off_discards_quote() {
        let mut state = CheckoutState::new();
        state.set_transport_required(true);
        state.store_quote(TransportQuote {
            distance_km: 12.0,
            base_charge: 400.0,
            gst_amount: 100.0,
            total_transport_cost: 500.0,
        });
        state.set_transport_required(false);
        assert!(state.transport_quote().is_none());

        // Re-enabling must not resurrect the old snapshot.
        state.set_transport_required(true);
        assert!(state.transport_quote().is_none());
    }

    #[test]
    fn editing_location_invalidates_quote() {
        let mut state = CheckoutState::new();
        state.set_transport_required(true);
        state.store_quote(TransportQuote {
            distance_km: 1.0,
            base_charge: 1.0,
            gst_amount: 0.0,
            total_transport_cost: 1.0,
        });
        state.set_address("new address".into());
        assert!(state.transport_quote().is_none());
    }

    #[test]
    fn item_mutations_invalidate_quote() {
        let quote = || TransportQuote {
            distance_km: 12.0,
            base_charge: 400.0,
            gst_amount: 100.0,
            total_transport_cost: 500.0,
        };
        let mut state = CheckoutState::new();
        state.set_transport_required(true);

        state.store_quote(quote());
        assert!(state.edit_item(0, |item| item.width_inch = 96.0));
        assert!(state.transport_quote().is_none());

        state.store_quote(quote());
        state.push_item(crate::domain::item::LineItem::default());
        assert!(state.transport_quote().is_none());

        state.store_quote(quote());
        assert!(state.remove_item_at(1));
        assert!(state.transport_quote().is_none());
    }

    #[test]
    fn remove_item_at_keeps_one_row_floor() {
        let mut state = CheckoutState::new();
        state.set_transport_required(true);
        state.store_quote(TransportQuote {
            distance_km: 1.0,
            base_charge: 1.0,
            gst_amount: 0.0,
            total_transport_cost: 1.0,
        });

        // The floored removal is a no-op and leaves the quote alone.
        assert!(!state.remove_item_at(0));
        assert_eq!(state.items().len(), 1);
        assert!(state.transport_quote().is_some());
    }

    #[test]
    fn payable_total_adds_transport_only_when_required_and_quoted() {
        let mut state = costed_state();
        assert_eq!(state.payable_total(), Some(1000.0));

        state.set_transport_required(true);
        state.store_quote(TransportQuote {
            distance_km: 10.0,
            base_charge: 400.0,
            gst_amount: 100.0,
            total_transport_cost: 500.0,
        });
        assert_eq!(state.payable_total(), Some(1500.0));

        state.set_transport_required(false);
        assert_eq!(state.payable_total(), Some(1000.0));
    }

    #[test]
    fn cost_goes_stale_when_items_change() {
        let mut state = costed_state();
        assert!(!state.cost_is_stale());
        state.back_to_items().unwrap();
        state.edit_item(0, |item| item.width_inch = 48.0);
        assert!(state.cost_is_stale());
        // Staleness is surfaced, never auto-cleared.
        assert!(state.cost().is_some());
    }

    #[test]
    fn begin_action_rejects_reentry() {
        let mut state = CheckoutState::new();
        assert!(state.begin_action(ActionKind::Submit));
        assert!(!state.begin_action(ActionKind::Submit));
        // Other actions keep their own flag.
        assert!(state.begin_action(ActionKind::Estimate));
        state.finish_action(ActionKind::Submit);
        assert!(state.begin_action(ActionKind::Submit));
    }
}
