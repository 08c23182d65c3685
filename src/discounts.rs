//! Discount utilities
//!
//! Percentage maths for the promo-code discount, shared by the pricing
//! quote.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// The one promo code the storefront accepts, compared case-sensitively.
pub const PROMO_CODE: &str = "FRUIT20";

/// Fraction of the subtotal taken off when the promo code matches.
const PROMO_RATE: f64 = 0.20;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculate the discount amount in minor units based on a percentage and a
/// minor unit amount.
///
/// Rounds midpoint-away-from-zero to a whole minor unit.
///
/// # Errors
///
/// Returns an error if the percentage calculation overflows or cannot be
/// safely represented (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// Discount earned by a promo code against the given subtotal.
///
/// Anything other than [`PROMO_CODE`] (including the empty string) earns a
/// zero discount; a match earns 20% of the subtotal. The discount is derived
/// from whatever subtotal is passed in, so it tracks the live cart rather
/// than the subtotal at promo-entry time.
///
/// # Errors
///
/// Returns a [`DiscountError`] if the percentage calculation cannot be
/// safely represented.
pub fn promo_discount(
    code: &str,
    subtotal: Money<'static, Currency>,
) -> Result<Money<'static, Currency>, DiscountError> {
    if code != PROMO_CODE {
        return Ok(Money::from_minor(0, subtotal.currency()));
    }

    let discount_minor = percent_of_minor(&Percentage::from(PROMO_RATE), subtotal.to_minor_units())?;

    Ok(Money::from_minor(discount_minor, subtotal.currency()))
}
