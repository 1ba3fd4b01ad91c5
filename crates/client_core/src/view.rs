//! Text model of the storefront page.

use shared::protocol::{Order, Product};

use crate::Storefront;

pub const PAGE_TITLE: &str = "Fullstack Prints";
pub const LOADING_PRODUCTS: &str = "Loading products…";
pub const EMPTY_CART: &str = "No items in cart";
pub const NO_ORDERS: &str = "No orders yet";

#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub loading: bool,
    pub products: Vec<Product>,
    pub cart: Vec<Product>,
    pub orders: Vec<Order>,
}

impl PageSnapshot {
    pub fn capture(storefront: &Storefront) -> Self {
        let catalog = storefront.catalog().snapshot();
        Self {
            loading: catalog.is_loading(),
            products: catalog.products,
            cart: storefront.cart().cart(),
            orders: storefront.orders().orders(),
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        if self.loading {
            return vec![LOADING_PRODUCTS.to_string()];
        }

        let mut lines = vec![PAGE_TITLE.to_string(), String::new(), "Products".to_string()];
        lines.extend(self.products.iter().map(product_line));

        lines.push(String::new());
        lines.push("Cart".to_string());
        if self.cart.is_empty() {
            lines.push(EMPTY_CART.to_string());
        } else {
            lines.extend(self.cart.iter().map(cart_line));
        }

        lines.push(String::new());
        lines.push("Orders".to_string());
        if self.orders.is_empty() {
            lines.push(NO_ORDERS.to_string());
        } else {
            lines.extend(self.orders.iter().map(order_line));
        }
        lines
    }
}

pub fn product_line(product: &Product) -> String {
    format!("[{}] {} {}", product.id, product.name, product.display_price())
}

pub fn cart_line(product: &Product) -> String {
    format!("{} – {}", product.name, product.display_price())
}

pub fn order_line(order: &Order) -> String {
    format!("Order #{} – {} items", order.id, order.items.len())
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
