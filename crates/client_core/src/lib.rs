use std::sync::Arc;

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod orders;
pub mod view;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use cart::CartStore;
pub use catalog::{CatalogLoader, CatalogPhase, CatalogSnapshot};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use error::ClientError;
pub use orders::{OrderGateway, RefreshOutcome, SubmitOutcome};
pub use view::PageSnapshot;

/// One browsing session: the catalog, the cart, and the order history, all
/// talking to the same storefront API.
///
/// Clones share state.
#[derive(Clone)]
pub struct Storefront {
    catalog: CatalogLoader,
    cart: CartStore,
    orders: OrderGateway,
}

impl Storefront {
    pub fn connect(config: &ClientConfig) -> Self {
        Self::with_api(Arc::new(HttpStorefrontApi::new(config.clone())))
    }

    pub fn with_api(api: Arc<dyn StorefrontApi>) -> Self {
        let cart = CartStore::new();
        Self {
            catalog: CatalogLoader::new(Arc::clone(&api)),
            orders: OrderGateway::new(api, cart.clone()),
            cart,
        }
    }

    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn orders(&self) -> &OrderGateway {
        &self.orders
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::capture(self)
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
