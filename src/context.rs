//! App context

use std::sync::Arc;

use rusty_money::iso::USD;

use crate::{
    auth::AuthService,
    cart::CartSession,
    catalog::Catalog,
    favorites::Favorites,
    fixtures,
    notify::{Notifier, TracingNotifier},
    payment::PaymentFlow,
    reviews::ReviewBook,
    search::RecentSearches,
    storage::{InMemoryStore, KeyValueStore},
};

/// Composition root for one storefront session.
///
/// Owns the shared collaborators and hands them to the services that need
/// them; nothing in the crate reaches for ambient state.
#[derive(Debug)]
pub struct AppContext {
    /// Static product list.
    pub catalog: Catalog,

    /// Store-backed cart ledger.
    pub cart: CartSession,

    /// Mock identity service.
    pub auth: AuthService,

    /// Search history.
    pub recents: RecentSearches,

    /// Session reviews.
    pub reviews: ReviewBook,

    /// Session favorites.
    pub favorites: Favorites,

    /// The at-most-one active payment attempt.
    pub payments: PaymentFlow,

    /// Notification surface.
    pub notifier: Arc<dyn Notifier>,

    store: Arc<dyn KeyValueStore>,
}

impl AppContext {
    /// Build a session over the given store and notifier, hydrating every
    /// store-backed service.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog: fixtures::standard_catalog(),
            cart: CartSession::hydrate(Arc::clone(&store), USD),
            auth: AuthService::hydrate(Arc::clone(&store)),
            recents: RecentSearches::hydrate(Arc::clone(&store)),
            reviews: ReviewBook::new(),
            favorites: Favorites::new(),
            payments: PaymentFlow::new(),
            notifier,
            store,
        }
    }

    /// In-memory session with the tracing notifier: the default demo and
    /// test composition.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(TracingNotifier))
    }

    /// Store handle shared by the session services.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_context_hydrates_empty_services() {
        let app = AppContext::in_memory();

        assert!(app.cart.cart().is_empty());
        assert!(app.auth.session().is_none());
        assert!(app.recents.entries().is_empty());
        assert!(app.payments.active().is_none());
        assert_eq!(app.catalog.len(), 49);
    }

    #[test]
    fn services_share_the_context_store() {
        let mut app = AppContext::in_memory();

        if let Some(product) = app.catalog.find("fr1").cloned() {
            app.cart.add_product(&product, 2).ok();
        }

        let snapshot = app.store().get(crate::cart::CART_SNAPSHOT_KEY).ok().flatten();

        assert!(snapshot.is_some_and(|blob| blob.contains("fr1")));
    }
}
