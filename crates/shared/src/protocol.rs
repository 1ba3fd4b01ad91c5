use serde::{Deserialize, Serialize};

use crate::domain::{format_price, OrderId, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

fn default_qty() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

impl OrderLineItem {
    pub fn single(product_id: ProductId) -> Self {
        Self { product_id, qty: 1 }
    }
}

/// Body of `POST /api/orders`.
///
/// Every product becomes its own line item with `qty: 1`; repeated products
/// are not folded into a larger quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineItem>,
}

impl CreateOrderRequest {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            items: products
                .into_iter()
                .map(|product| OrderLineItem::single(product.id))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
