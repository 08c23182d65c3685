//! Cart ledger

use std::sync::Arc;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    catalog::Product,
    storage::{self, KeyValueStore, StoreError},
};

/// Storage key for the cart snapshot blob.
pub const CART_SNAPSHOT_KEY: &str = "cart_items_v1";

/// One product entry in the cart, uniquely keyed by product id.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product_id: String,
    unit_price: Money<'static, Currency>,
    unit: String,
    quantity: u32,
}

impl CartLine {
    /// Product id this line is keyed by.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Price per unit.
    #[must_use]
    pub fn unit_price(&self) -> Money<'static, Currency> {
        self.unit_price
    }

    /// Display label for the unit ("kg", "box", ...); not used in
    /// computation.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Units of the product in the cart, always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'static, Currency> {
        Money::from_minor(
            self.unit_price.to_minor_units() * i64::from(self.quantity),
            self.unit_price.currency(),
        )
    }
}

/// Persisted shape of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineRecord {
    /// Product id.
    pub id: String,

    /// Unit price in minor units.
    pub price_minor: i64,

    /// Unit display label.
    pub unit: String,

    /// Quantity.
    pub quantity: u32,
}

/// Cart
///
/// Ordered collection of [`CartLine`]s: insertion order is display order,
/// and no two lines share a product id.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Rebuild a cart from persisted line records.
    ///
    /// Quantities below 1 are floored to 1; later records for an already
    /// seen id fold into the existing line.
    #[must_use]
    pub fn from_records(records: Vec<CartLineRecord>, currency: &'static Currency) -> Self {
        let mut cart = Cart::new(currency);

        for record in records {
            cart.add(
                &record.id,
                Money::from_minor(record.price_minor, currency),
                &record.unit,
                record.quantity,
            );
        }

        cart
    }

    /// Persisted shape of the current lines.
    #[must_use]
    pub fn to_records(&self) -> Vec<CartLineRecord> {
        self.lines
            .iter()
            .map(|line| CartLineRecord {
                id: line.product_id.clone(),
                price_minor: line.unit_price.to_minor_units(),
                unit: line.unit.clone(),
                quantity: line.quantity,
            })
            .collect()
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line with this id already exists its quantity is incremented
    /// and the stored price and unit are left as first seen; otherwise a
    /// new line is appended. A zero quantity is coerced to 1.
    pub fn add(
        &mut self,
        product_id: &str,
        unit_price: Money<'static, Currency>,
        unit: &str,
        quantity: u32,
    ) {
        debug_assert!(
            unit_price.currency() == self.currency,
            "line currency must match the cart currency"
        );

        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine {
            product_id: product_id.to_owned(),
            unit_price,
            unit: unit.to_owned(),
            quantity,
        });
    }

    /// Remove the line for a product; absent ids are a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set the quantity on an existing line, floored at 1; absent ids are
    /// a no-op.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity.max(1);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines (0 for an empty cart).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity across all lines ($0.00 for an
    /// empty cart).
    #[must_use]
    pub fn subtotal(&self) -> Money<'static, Currency> {
        let minor: i64 = self
            .lines
            .iter()
            .map(|line| line.line_total().to_minor_units())
            .sum();

        Money::from_minor(minor, self.currency)
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Iterate over the lines in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency every line is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Store-backed cart session.
///
/// Owns the ledger for one UI session and mirrors every mutation to the
/// key-value store. Each mutating call returns the persistence result so
/// callers can observe a lost write or ignore it; the in-memory ledger
/// stays authoritative either way.
#[derive(Debug)]
pub struct CartSession {
    cart: Cart,
    store: Arc<dyn KeyValueStore>,
}

impl CartSession {
    /// Hydrate a session from the snapshot key, starting with an empty
    /// cart when the blob is missing or malformed.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, currency: &'static Currency) -> Self {
        let cart = match storage::get_json::<Vec<CartLineRecord>>(store.as_ref(), CART_SNAPSHOT_KEY)
        {
            Ok(Some(records)) => Cart::from_records(records, currency),
            Ok(None) => Cart::new(currency),
            Err(err) => {
                warn!(%err, "cart snapshot unreadable, starting empty");
                Cart::new(currency)
            }
        };

        Self { cart, store }
    }

    /// The ledger this session owns.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add to the cart and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the snapshot write failure; the in-memory add has already
    /// taken effect.
    pub fn add(
        &mut self,
        product_id: &str,
        unit_price: Money<'static, Currency>,
        unit: &str,
        quantity: u32,
    ) -> Result<(), StoreError> {
        self.cart.add(product_id, unit_price, unit, quantity);
        self.persist()
    }

    /// Add a catalog product to the cart and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the snapshot write failure; the in-memory add has already
    /// taken effect.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<(), StoreError> {
        self.add(product.id, product.price, product.unit, quantity)
    }

    /// Remove a line and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the snapshot write failure; the in-memory removal has
    /// already taken effect.
    pub fn remove(&mut self, product_id: &str) -> Result<(), StoreError> {
        self.cart.remove(product_id);
        self.persist()
    }

    /// Set a line quantity and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the snapshot write failure; the in-memory update has
    /// already taken effect.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), StoreError> {
        self.cart.set_quantity(product_id, quantity);
        self.persist()
    }

    /// Empty the cart and persist the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the snapshot write failure; the in-memory clear has already
    /// taken effect.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let result = storage::set_json(
            self.store.as_ref(),
            CART_SNAPSHOT_KEY,
            &self.cart.to_records(),
        );

        if let Err(err) = &result {
            warn!(%err, "cart snapshot write failed");
        }

        result
    }
}
