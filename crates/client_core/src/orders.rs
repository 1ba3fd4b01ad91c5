//! Order history and order submission.

use std::sync::Arc;

use shared::protocol::Order;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{api::StorefrontApi, cart::CartStore};

pub const EMPTY_CART_NOTICE: &str = "Cart is empty!";
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to submit order";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed { orders: usize },
    /// The fetch failed and the previously held list was kept.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { line_items: usize },
    /// Nothing was sent.
    EmptyCart,
    /// The cart was left as it was so the user can retry.
    Failed { reason: String },
}

impl SubmitOutcome {
    /// Notice to put in front of the user, if the outcome warrants one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Submitted { .. } => None,
            Self::EmptyCart => Some(EMPTY_CART_NOTICE),
            Self::Failed { .. } => Some(SUBMIT_FAILED_NOTICE),
        }
    }
}

#[derive(Clone)]
pub struct OrderGateway {
    api: Arc<dyn StorefrontApi>,
    cart: CartStore,
    orders: Arc<watch::Sender<Vec<Order>>>,
}

impl OrderGateway {
    pub fn new(api: Arc<dyn StorefrontApi>, cart: CartStore) -> Self {
        let (orders, _) = watch::channel(Vec::new());
        Self {
            api,
            cart,
            orders: Arc::new(orders),
        }
    }

    /// Replaces the held order list with the server's.
    ///
    /// Overlapping calls are not sequenced: whichever response lands last
    /// is what stays displayed.
    pub async fn fetch_orders(&self) -> RefreshOutcome {
        match self.api.list_orders().await {
            Ok(orders) => {
                let count = orders.len();
                info!(count, "orders: refreshed");
                self.orders.send_replace(orders);
                RefreshOutcome::Refreshed { orders: count }
            }
            Err(err) => {
                error!("orders: error loading orders: {err}");
                RefreshOutcome::Unchanged
            }
        }
    }

    /// Sends the cart as a new order, then clears the cart and reloads the
    /// order history.
    pub async fn submit_order(&self) -> SubmitOutcome {
        let request = self.cart.order_request();
        if request.is_empty() {
            warn!("orders: submit requested with an empty cart");
            return SubmitOutcome::EmptyCart;
        }

        let line_items = request.items.len();
        if let Err(err) = self.api.create_order(&request).await {
            error!(line_items, "orders: error submitting order: {err}");
            return SubmitOutcome::Failed {
                reason: err.to_string(),
            };
        }

        info!(line_items, "orders: order submitted");
        self.cart.clear_cart();
        self.fetch_orders().await;
        SubmitOutcome::Submitted { line_items }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Order>> {
        self.orders.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/orders_tests.rs"]
mod tests;
