//! Pricing
//!
//! Derives the order summary block from the ledger and an optional promo
//! code.

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::Cart,
    discounts::{self, DiscountError},
};

/// Flat delivery fee charged on every order, in minor units ($5.00).
pub const DELIVERY_FEE_MINOR: i64 = 500;

/// Derived totals for the current cart and promo code.
///
/// A quote is never stored; it is recomputed from the live ledger whenever
/// the summary is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderQuote {
    subtotal: Money<'static, Currency>,
    discount: Money<'static, Currency>,
    delivery_fee: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl OrderQuote {
    /// Sum of line totals before fees and discounts.
    #[must_use]
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Promo discount taken off the subtotal (zero without a matching
    /// code).
    #[must_use]
    pub fn discount(&self) -> Money<'static, Currency> {
        self.discount
    }

    /// Flat delivery fee.
    #[must_use]
    pub fn delivery_fee(&self) -> Money<'static, Currency> {
        self.delivery_fee
    }

    /// Amount the customer is charged: subtotal + delivery fee − discount.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }
}

/// Quote the cart against a promo code (pass `""` for none).
///
/// # Errors
///
/// Returns a [`DiscountError`] if the promo percentage cannot be safely
/// applied to the subtotal.
pub fn quote(cart: &Cart, promo_code: &str) -> Result<OrderQuote, DiscountError> {
    let subtotal = cart.subtotal();
    let discount = discounts::promo_discount(promo_code, subtotal)?;
    let currency = cart.currency();

    let total_minor =
        subtotal.to_minor_units() + DELIVERY_FEE_MINOR - discount.to_minor_units();

    Ok(OrderQuote {
        subtotal,
        discount,
        delivery_fee: Money::from_minor(DELIVERY_FEE_MINOR, currency),
        total: Money::from_minor(total_minor, currency),
    })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::discounts::PROMO_CODE;

    use super::*;

    fn cart_totalling(minor: i64) -> Cart {
        let mut cart = Cart::new(USD);
        cart.add("fr1", Money::from_minor(minor, USD), "kg", 1);
        cart
    }

    #[test]
    fn total_is_subtotal_plus_delivery_minus_discount() -> TestResult {
        let cart = cart_totalling(1870);

        let quote = quote(&cart, "")?;

        assert_eq!(quote.subtotal(), Money::from_minor(1870, USD));
        assert_eq!(quote.discount(), Money::from_minor(0, USD));
        assert_eq!(quote.delivery_fee(), Money::from_minor(500, USD));
        assert_eq!(quote.total(), Money::from_minor(2370, USD));

        Ok(())
    }

    #[test]
    fn promo_code_takes_twenty_percent_off_the_subtotal() -> TestResult {
        let cart = cart_totalling(1000);

        let quoted = quote(&cart, PROMO_CODE)?;

        assert_eq!(quoted.discount(), Money::from_minor(200, USD));
        assert_eq!(quoted.total(), Money::from_minor(1300, USD));

        Ok(())
    }

    #[test]
    fn quote_tracks_cart_changes_after_promo_entry() -> TestResult {
        let mut cart = cart_totalling(1000);

        let before = quote(&cart, PROMO_CODE)?;
        cart.add("fr2", Money::from_minor(500, USD), "kg", 1);
        let after = quote(&cart, PROMO_CODE)?;

        assert_eq!(before.discount(), Money::from_minor(200, USD));
        assert_eq!(after.discount(), Money::from_minor(300, USD));

        Ok(())
    }

    #[test]
    fn empty_cart_still_quotes_the_delivery_fee() -> TestResult {
        let cart = Cart::new(USD);

        let quoted = quote(&cart, "")?;

        assert_eq!(quoted.subtotal(), Money::from_minor(0, USD));
        assert_eq!(quoted.total(), Money::from_minor(500, USD));

        Ok(())
    }
}
