//! Payment Coordinator: cash preference and the online gateway round trip.

use crate::backend::{JobWorkApi, PaymentGateway};
use crate::domain::checkout::{ActionKind, CheckoutState, CheckoutStep, TransitionError};
use crate::domain::customer::CustomerDetails;
use crate::domain::order::Order;
use crate::domain::payment::{GatewayError, PaymentMethod};
use crate::services::{ServiceError, ServiceResult};

/// Result of an online payment attempt that did not error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Verified server-side; the workflow is on the Done step.
    Completed,
    /// User closed the widget without paying. No order mutation, no
    /// verification call; the workflow stays on the Payment step.
    Dismissed,
}

/// Selects the payment method on the Payment step.
pub fn select_method(state: &mut CheckoutState, method: PaymentMethod) -> ServiceResult<()> {
    if state.step() != CheckoutStep::Payment {
        return Err(TransitionError::WrongStep(state.step()).into());
    }
    state.payment_method = method;
    Ok(())
}

/// Cash path: records the preference server-side and finishes the workflow.
/// On failure the method stays selected so the user can simply retry.
pub fn confirm_cash<B>(state: &mut CheckoutState, api: &B) -> ServiceResult<()>
where
    B: JobWorkApi + ?Sized,
{
    let order = current_order(state)?;
    if state.payment_method != PaymentMethod::Cash {
        return Err(TransitionError::NoPaymentMethod.into());
    }
    if !state.begin_action(ActionKind::Pay) {
        return Err(ServiceError::Busy(ActionKind::Pay));
    }

    let result = api.set_cash_preference(order.id);
    state.finish_action(ActionKind::Pay);

    result.map_err(|err| {
        log::error!("Failed to record cash preference for order {}: {err}", order.id);
        err
    })?;
    state.mark_done()?;
    Ok(())
}

/// Online path: initiate a gateway intent, open the widget, verify the
/// completion server-side. Verification failure leaves the already-charged
/// gateway payment untouched and surfaces its id for reconciliation.
pub fn pay_online<B, G>(
    state: &mut CheckoutState,
    api: &B,
    gateway: &G,
) -> ServiceResult<PaymentOutcome>
where
    B: JobWorkApi + ?Sized,
    G: PaymentGateway + ?Sized,
{
    let order = current_order(state)?;
    if state.payment_method != PaymentMethod::Online {
        return Err(TransitionError::NoPaymentMethod.into());
    }
    if !state.begin_action(ActionKind::Pay) {
        return Err(ServiceError::Busy(ActionKind::Pay));
    }

    let prefill = state.customer.clone();
    let result = run_gateway_round_trip(&order, &prefill, api, gateway);
    state.finish_action(ActionKind::Pay);

    match result? {
        Some(()) => {
            state.mark_done()?;
            Ok(PaymentOutcome::Completed)
        }
        None => Ok(PaymentOutcome::Dismissed),
    }
}

/// Ok(Some(())) = verified, Ok(None) = widget dismissed.
fn run_gateway_round_trip<B, G>(
    order: &Order,
    prefill: &CustomerDetails,
    api: &B,
    gateway: &G,
) -> ServiceResult<Option<()>>
where
    B: JobWorkApi + ?Sized,
    G: PaymentGateway + ?Sized,
{
    let intent = api.initiate_payment(order.id).map_err(|err| {
        log::error!("Failed to initiate payment for order {}: {err}", order.id);
        err
    })?;

    match gateway.collect(&intent, prefill) {
        Ok(completion) => {
            api.verify_payment(order.id, &completion).map_err(|err| {
                log::error!(
                    "Payment verification failed for order {} (gateway payment {}): {err}",
                    order.id,
                    completion.payment_id
                );
                ServiceError::VerificationFailed {
                    payment_id: completion.payment_id.clone(),
                    source: err,
                }
            })?;
            Ok(Some(()))
        }
        Err(GatewayError::Dismissed) => Ok(None),
        Err(err) => {
            log::error!("Payment gateway failed for order {}: {err}", order.id);
            Err(err.into())
        }
    }
}

fn current_order(state: &CheckoutState) -> ServiceResult<Order> {
    if state.step() != CheckoutStep::Payment {
        return Err(TransitionError::WrongStep(state.step()).into());
    }
    state
        .order()
        .cloned()
        .ok_or_else(|| TransitionError::NoOrder.into())
}
