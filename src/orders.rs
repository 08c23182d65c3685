//! Orders
//!
//! Finalization of a paid cart: snapshot the lines and quote, clear the
//! ledger, notify the user. Placement is simulated and always succeeds.

use std::time::Duration;

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use tracing::info;
use uuid::Uuid;

use crate::{
    cart::{CartLine, CartSession},
    notify::Notifier,
    payment::{PaymentFlow, Provider},
    pricing::OrderQuote,
};

/// Simulated order placement time after the success dialog is dismissed.
pub const PLACEMENT_DELAY: Duration = Duration::from_millis(1200);

/// Merchant named in payment success notifications.
pub const MERCHANT: &str = "AfroStore Grocery store";

/// A finalized order.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    lines: Vec<CartLine>,
    quote: OrderQuote,
    provider: Provider,
    placed_at: Timestamp,
}

impl Order {
    /// Opaque order id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cart lines captured at placement.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Totals the customer was charged against.
    #[must_use]
    pub fn quote(&self) -> OrderQuote {
        self.quote
    }

    /// Wallet the order was paid through.
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// When the order was placed.
    #[must_use]
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}

/// Success message naming the provider and the charged total.
#[must_use]
pub fn success_message(total: Money<'static, Currency>, provider: Provider) -> String {
    format!("Success: {total} sent to {MERCHANT} via {}", provider.meta().name)
}

/// Finalize a paid order.
///
/// Snapshots the cart lines and quote into an [`Order`], clears the
/// ledger, and emits the success notification. Callers hold for
/// [`PLACEMENT_DELAY`] before navigating back to the catalog; placement
/// itself always succeeds.
pub fn place_order(
    session: &mut CartSession,
    quote: OrderQuote,
    provider: Provider,
    notifier: &dyn Notifier,
) -> Order {
    let lines: Vec<CartLine> = session.cart().iter().cloned().collect();
    let _persisted = session.clear();

    let order = Order {
        id: Uuid::new_v4().to_string(),
        lines,
        quote,
        provider,
        placed_at: Timestamp::now(),
    };

    notifier.notify(&success_message(quote.total(), provider));
    info!(
        order = %order.id,
        provider = provider.meta().name,
        total = %quote.total(),
        "order placed"
    );

    order
}

/// Dismiss a succeeded attempt and finalize the order it paid for.
///
/// Returns `None` while no attempt has reached the success step; the flow
/// is left untouched in that case.
pub fn finalize_payment(
    flow: &mut PaymentFlow,
    session: &mut CartSession,
    quote: OrderQuote,
    notifier: &dyn Notifier,
) -> Option<Order> {
    let attempt = flow.take_succeeded()?;

    Some(place_order(session, quote, attempt.provider(), notifier))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn success_message_names_provider_and_total() {
        let message = success_message(Money::from_minor(2370, USD), Provider::EcoCash);

        assert_eq!(
            message,
            "Success: $23.70 sent to AfroStore Grocery store via EcoCash"
        );
    }

    #[test]
    fn success_message_varies_by_provider() {
        let total = Money::from_minor(1300, USD);

        assert!(success_message(total, Provider::InnBucks).ends_with("via InnBucks"));
        assert!(success_message(total, Provider::OMari).ends_with("via OMari"));
    }
}
