//! Session-scoped cart shared by every part of the page.

use std::sync::Arc;

use shared::protocol::{CreateOrderRequest, Product};
use tokio::sync::watch;
use tracing::debug;

/// Ordered list of products picked in this session.
///
/// Cloning the store hands out another handle to the same cart. Every
/// mutation is published through a [`watch`] channel, so all handles and
/// subscribers see the same sequence as soon as the call returns. The cart is
/// only ever emptied as a whole.
#[derive(Clone)]
pub struct CartStore {
    entries: Arc<watch::Sender<Vec<Product>>>,
}

impl CartStore {
    pub fn new() -> Self {
        let (entries, _) = watch::channel(Vec::new());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Appends one entry; adding the same product twice yields two entries.
    pub fn add_to_cart(&self, product: Product) {
        debug!(product_id = product.id.0, "cart: add");
        self.entries.send_modify(|entries| entries.push(product));
    }

    pub fn clear_cart(&self) {
        debug!("cart: clear");
        self.entries.send_modify(Vec::clear);
    }

    pub fn cart(&self) -> Vec<Product> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn order_request(&self) -> CreateOrderRequest {
        CreateOrderRequest::from_products(self.entries.borrow().iter())
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.entries.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/cart_tests.rs"]
mod tests;
