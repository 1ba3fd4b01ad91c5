//! One-shot product catalog fetch.

use std::sync::Arc;

use shared::{domain::ProductId, protocol::Product};
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::api::StorefrontApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Idle,
    Loading,
    /// Terminal, whether or not the fetch succeeded.
    Loaded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub phase: CatalogPhase,
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// The page shows its loading placeholder until the first fetch settles.
    pub fn is_loading(&self) -> bool {
        self.phase != CatalogPhase::Loaded
    }
}

#[derive(Clone)]
pub struct CatalogLoader {
    api: Arc<dyn StorefrontApi>,
    state: Arc<watch::Sender<CatalogSnapshot>>,
}

impl CatalogLoader {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot {
            phase: CatalogPhase::Idle,
            products: Vec::new(),
        });
        Self {
            api,
            state: Arc::new(state),
        }
    }

    /// Fetches the catalog once.
    ///
    /// Failures are logged and leave the product list empty; the loader ends
    /// up `Loaded` either way. Calls after the first do nothing.
    pub async fn load_products(&self) -> CatalogSnapshot {
        let started = self.state.send_if_modified(|state| {
            if state.phase != CatalogPhase::Idle {
                return false;
            }
            state.phase = CatalogPhase::Loading;
            true
        });
        if !started {
            warn!("catalog: load already attempted; ignoring");
            return self.snapshot();
        }

        let products = match self.api.list_products().await {
            Ok(products) => {
                info!(count = products.len(), "catalog: products loaded");
                products
            }
            Err(err) => {
                error!("catalog: error loading products: {err}");
                Vec::new()
            }
        };

        self.state.send_modify(|state| {
            state.phase = CatalogPhase::Loaded;
            state.products = products;
        });
        self.snapshot()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.clone()
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.state
            .borrow()
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
