//! Walks one storefront session end to end: seed the cart from the
//! catalog, apply the promo code, render the order summary, then drive a
//! wallet payment through both confirmation steps and place the order.

use std::{io, sync::Arc, thread};

use clap::Parser;
use marula::{
    context::AppContext,
    notify::Notifier,
    orders,
    payment::{self, Provider},
    pricing, receipt,
    storage::InMemoryStore,
};

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
struct CheckoutArgs {
    /// Promo code to apply at the summary step
    #[clap(short, long, default_value = "FRUIT20")]
    promo: String,

    /// Wallet to pay with: ecocash, innbucks or omari
    #[clap(short, long, default_value = "ecocash")]
    wallet: String,
}

#[derive(Debug)]
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = CheckoutArgs::parse();

    let provider = match args.wallet.as_str() {
        "innbucks" => Provider::InnBucks,
        "omari" => Provider::OMari,
        _ => Provider::EcoCash,
    };

    let mut app = AppContext::new(Arc::new(InMemoryStore::new()), Arc::new(StdoutNotifier));

    for (id, quantity) in [("fr1", 2), ("fr2", 3), ("dr2", 1)] {
        let Some(product) = app.catalog.find(id).cloned() else {
            continue;
        };
        let _saved = app.cart.add_product(&product, quantity);
    }

    let quote = pricing::quote(app.cart.cart(), &args.promo)?;
    receipt::write_order_summary(io::stdout(), app.cart.cart(), &app.catalog, &quote)?;

    println!("paying with {}...", provider.meta().name);

    let attempt = app.payments.select(provider);
    attempt.set_recipient("0771234567");
    attempt.set_sender("0712345678");
    attempt.submit_numbers()?;
    attempt.set_pin("1234");
    attempt.submit_pin()?;
    thread::sleep(payment::PROCESSING_DELAY);

    let order = orders::finalize_payment(
        &mut app.payments,
        &mut app.cart,
        quote,
        app.notifier.as_ref(),
    )
    .ok_or_else(|| anyhow::anyhow!("no succeeded attempt to finalize"))?;
    thread::sleep(orders::PLACEMENT_DELAY);

    println!(
        "order {} placed for {} ({} lines)",
        order.id(),
        order.quote().total(),
        order.lines().len()
    );

    Ok(())
}
