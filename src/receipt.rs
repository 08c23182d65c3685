//! Order summary rendering

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, catalog::Catalog, pricing::OrderQuote};

/// Errors that can occur when writing an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("IO error")]
    Io,
}

/// Write the cart lines and quote as a terminal table.
///
/// Line names come from the catalog; a line whose product the catalog no
/// longer carries falls back to showing the raw id.
///
/// # Errors
///
/// Returns a [`SummaryError`] if the summary cannot be written.
pub fn write_order_summary(
    mut out: impl io::Write,
    cart: &Cart,
    catalog: &Catalog,
    quote: &OrderQuote,
) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Unit", "Unit Price", "Line Total"]);

    for line in cart.iter() {
        let name = catalog
            .find(line.product_id())
            .map_or(line.product_id(), |product| product.name);

        builder.push_record([
            name.to_string(),
            line.quantity().to_string(),
            line.unit().to_string(),
            line.unit_price().to_string(),
            line.line_total().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| SummaryError::Io)?;

    write_quote_block(&mut out, quote)
}

fn write_quote_block(out: &mut impl io::Write, quote: &OrderQuote) -> Result<(), SummaryError> {
    write_amount_line(out, "Subtotal:", &quote.subtotal().to_string())?;

    if quote.discount().to_minor_units() > 0 {
        write_amount_line(out, "Discount:", &format!("-{}", quote.discount()))?;
    }

    write_amount_line(out, "Delivery:", &quote.delivery_fee().to_string())?;
    write_amount_line(out, "Total:", &quote.total().to_string())?;

    writeln!(out).map_err(|_err| SummaryError::Io)
}

fn write_amount_line(
    out: &mut impl io::Write,
    label: &str,
    amount: &str,
) -> Result<(), SummaryError> {
    writeln!(out, " {label:<10} {amount:>12}").map_err(|_err| SummaryError::Io)
}
