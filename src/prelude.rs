//! Marula prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{AuthError, AuthService, Session, UserRecord},
    cart::{Cart, CartLine, CartLineRecord, CartSession},
    catalog::{Catalog, Category, ImageRef, Product},
    context::AppContext,
    discounts::{DiscountError, PROMO_CODE, percent_of_minor, promo_discount},
    favorites::Favorites,
    fixtures::standard_catalog,
    notify::{Notifier, TracingNotifier},
    orders::{MERCHANT, Order, PLACEMENT_DELAY, finalize_payment, place_order, success_message},
    payment::{
        AttemptStage, PROCESSING_DELAY, PaymentAttempt, PaymentError, PaymentFlow, Provider,
        ProviderMeta,
    },
    pricing::{DELIVERY_FEE_MINOR, OrderQuote, quote},
    receipt::{SummaryError, write_order_summary},
    reviews::{Review, ReviewBook},
    search::{MAX_RECENTS, RecentSearches},
    storage::{InMemoryStore, JsonFileStore, KeyValueStore, StoreError, get_json, set_json},
};
