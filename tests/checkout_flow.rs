//! Integration test for the full storefront purchase flow.
//!
//! Mirrors the fixed checkout scenario end to end:
//!
//! 1. Seed the cart from the catalog with four fruit lines totalling
//!    $18.70 (Fruit Mix $6.50, Mango $5.20, Strawberry $4.50, Banana
//!    $2.50).
//! 2. Quote without a promo code: $18.70 + $5.00 delivery − $0.00
//!    discount = $23.70.
//! 3. Drive an EcoCash attempt through both validation gates, exercising
//!    the failure messages on the way.
//! 4. Finalize: the order snapshots the lines, the cart (and its persisted
//!    snapshot) empties, and the toast names the provider and the charged
//!    total.

use std::sync::{Arc, Mutex};

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use marula::{
    cart::CART_SNAPSHOT_KEY,
    context::AppContext,
    notify::Notifier,
    orders,
    payment::{AttemptStage, PaymentError, Provider},
    pricing,
    storage::{InMemoryStore, KeyValueStore, get_json},
};

#[derive(Debug, Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[test]
fn purchase_flow_from_catalog_to_placed_order() -> TestResult {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut app = AppContext::new(Arc::clone(&store), Arc::clone(&notifier) as Arc<dyn Notifier>);

    for id in ["fr7", "fr5", "fr4", "fr1"] {
        let product = app
            .catalog
            .find(id)
            .cloned()
            .unwrap_or_else(|| panic!("fixture product {id} missing"));
        app.cart.add_product(&product, 1)?;
    }

    assert_eq!(app.cart.cart().subtotal(), Money::from_minor(1870, USD));

    let quote = pricing::quote(app.cart.cart(), "")?;
    assert_eq!(quote.total(), Money::from_minor(2370, USD));

    let attempt = app.payments.select(Provider::EcoCash);

    attempt.set_recipient("12345");
    attempt.set_sender("0987654321");
    assert_eq!(attempt.submit_numbers(), Err(PaymentError::PhoneDigits));
    assert_eq!(attempt.stage(), AttemptStage::CollectingNumbers);

    attempt.set_recipient("1234567890");
    attempt.submit_numbers()?;

    attempt.set_pin("12");
    assert_eq!(attempt.submit_pin(), Err(PaymentError::PinTooShort));

    attempt.set_pin("1234");
    attempt.submit_pin()?;
    assert_eq!(attempt.stage(), AttemptStage::Succeeded);

    let order = orders::finalize_payment(
        &mut app.payments,
        &mut app.cart,
        quote,
        app.notifier.as_ref(),
    )
    .expect("a succeeded attempt must finalize into an order");

    assert_eq!(order.provider(), Provider::EcoCash);
    assert_eq!(order.lines().len(), 4);
    assert_eq!(order.quote().total(), Money::from_minor(2370, USD));

    assert!(app.cart.cart().is_empty());
    assert!(app.payments.active().is_none());

    let snapshot: Option<Vec<marula::cart::CartLineRecord>> =
        get_json(store.as_ref(), CART_SNAPSHOT_KEY)?;
    assert_eq!(snapshot.map(|records| records.len()), Some(0));

    assert_eq!(
        notifier.messages(),
        ["Success: $23.70 sent to AfroStore Grocery store via EcoCash"]
    );

    Ok(())
}

#[test]
fn switching_wallets_mid_flow_starts_over() -> TestResult {
    let mut app = AppContext::in_memory();

    let attempt = app.payments.select(Provider::EcoCash);
    attempt.set_recipient("0771234567");
    attempt.set_sender("0712345678");
    attempt.submit_numbers()?;
    assert_eq!(attempt.stage(), AttemptStage::CollectingPin);

    let replacement = app.payments.select(Provider::OMari);

    assert_eq!(replacement.provider(), Provider::OMari);
    assert_eq!(replacement.stage(), AttemptStage::CollectingNumbers);
    assert_eq!(replacement.recipient(), "");
    assert_eq!(replacement.sender(), "");

    Ok(())
}

#[test]
fn dismissing_the_dialog_discards_everything_unfinished() -> TestResult {
    let mut app = AppContext::in_memory();

    let attempt = app.payments.select(Provider::InnBucks);
    attempt.set_recipient("0771234567");
    attempt.set_sender("0712345678");
    attempt.submit_numbers()?;

    app.payments.dismiss();

    assert!(app.payments.active().is_none());

    let quote = pricing::quote(app.cart.cart(), "")?;
    let finalized = orders::finalize_payment(
        &mut app.payments,
        &mut app.cart,
        quote,
        app.notifier.as_ref(),
    );
    assert!(finalized.is_none());

    Ok(())
}
