//! Checkout State Machine transitions and order submission.

use crate::backend::JobWorkApi;
use crate::domain::checkout::{ActionKind, CheckoutState, CheckoutStep, TransitionError};
use crate::domain::order::Order;
use crate::domain::types::{ClientReference, OrderId};
use crate::dto::jobwork::CreateOrderRequest;
use crate::services::{ServiceError, ServiceResult};

/// How the Details step is being exited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitIntent {
    /// Save the order as a quotation; the caller navigates away from the
    /// workflow, the state machine never enters the Payment step.
    QuotationOnly,
    /// Create the order and advance to the Payment step.
    CreateAndPay,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Order saved as a quotation. Carries the order for the redirect
    /// target; the checkout state is left untouched on the Details step.
    QuotationSaved(Order),
    /// Order created and stored; the workflow is now on the Payment step.
    ReadyForPayment(Order),
}

/// Items -> Details: requests the authoritative cost breakdown and advances
/// on success. Any failure keeps the workflow on the Items step.
pub fn calculate_and_advance<B>(state: &mut CheckoutState, api: &B) -> ServiceResult<()>
where
    B: JobWorkApi + ?Sized,
{
    if state.step() != CheckoutStep::Items {
        return Err(TransitionError::WrongStep(state.step()).into());
    }
    if let Some(position) = state.items().iter().position(|item| !item.is_complete()) {
        return Err(ServiceError::Form(format!(
            "item {} is missing dimensions or quantity",
            position + 1
        )));
    }
    if !state.begin_action(ActionKind::Calculate) {
        return Err(ServiceError::Busy(ActionKind::Calculate));
    }

    let result = api.calculate_cost(state.items());
    state.finish_action(ActionKind::Calculate);

    let cost = result.map_err(|err| {
        log::error!("Failed to calculate job-work cost: {err}");
        err
    })?;
    state.advance_to_details(cost)?;
    Ok(())
}

/// Details -> Items back edge. Discards nothing; a previously calculated
/// cost stays in place even if it is now stale.
pub fn back_to_items(state: &mut CheckoutState) -> ServiceResult<()> {
    state.back_to_items()?;
    Ok(())
}

/// Submits the order from the Details step.
///
/// Both exits share the same guard set: disclaimer accepted, contact fields
/// present, and a transport quote when transport is required. Guard failures
/// surface before any network call.
pub fn submit_order<B>(
    state: &mut CheckoutState,
    api: &B,
    intent: SubmitIntent,
) -> ServiceResult<SubmitOutcome>
where
    B: JobWorkApi + ?Sized,
{
    if state.step() != CheckoutStep::Details {
        return Err(TransitionError::WrongStep(state.step()).into());
    }
    if let Some(block) = state.submission_block() {
        return Err(block.into());
    }
    if !state.begin_action(ActionKind::Submit) {
        return Err(ServiceError::Busy(ActionKind::Submit));
    }

    let request = build_order_request(state, intent);
    let result = api.create_order(&request);
    state.finish_action(ActionKind::Submit);

    let order = result.map_err(|err| {
        log::error!("Failed to create job-work order: {err}");
        err
    })?;

    match intent {
        SubmitIntent::QuotationOnly => Ok(SubmitOutcome::QuotationSaved(order)),
        SubmitIntent::CreateAndPay => {
            state.enter_payment(order.clone())?;
            Ok(SubmitOutcome::ReadyForPayment(order))
        }
    }
}

/// Restart from the terminal step: clears cost, disclaimer, order and
/// payment method, keeps items and customer details.
pub fn restart(state: &mut CheckoutState) -> ServiceResult<()> {
    state.restart()?;
    log::info!("Checkout restarted");
    Ok(())
}

/// Result Presenter follow-on: downloads the design PDF for a created order.
pub fn fetch_design_pdf<B>(api: &B, order_id: OrderId) -> ServiceResult<Vec<u8>>
where
    B: JobWorkApi + ?Sized,
{
    api.design_pdf(order_id).map_err(|err| {
        log::error!("Failed to download design PDF for order {order_id}: {err}");
        ServiceError::from(err)
    })
}

fn build_order_request(state: &CheckoutState, intent: SubmitIntent) -> CreateOrderRequest {
    let transport_required = state.transport_required();
    CreateOrderRequest {
        customer_name: state.customer.name.clone(),
        customer_phone: state.customer.phone.clone(),
        customer_email: state.customer.email.clone(),
        delivery_address: state.customer.delivery_address.clone(),
        gst_number: state.customer.gst_number.clone(),
        items: state.items().to_vec(),
        disclaimer_accepted: state.disclaimer_accepted,
        transport_required,
        transport_address: transport_required
            .then(|| state.location().address.clone())
            .filter(|address| !address.is_empty()),
        transport_cost: state
            .transport_quote()
            .filter(|_| transport_required)
            .map(|quote| quote.total_transport_cost),
        quotation_only: intent == SubmitIntent::QuotationOnly,
        client_reference: ClientReference::new(),
    }
}
