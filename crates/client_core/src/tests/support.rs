//! Stand-ins for the remote storefront API.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::{OrderId, ProductId},
    protocol::{CreateOrderRequest, Order, Product},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    api::{HttpStorefrontApi, StorefrontApi},
    config::ClientConfig,
    error::Result,
};

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price,
    }
}

pub fn order(id: i64, request: &CreateOrderRequest) -> Order {
    Order {
        id: OrderId(id),
        items: request.items.clone(),
    }
}

/// In-memory API that never fails and counts every call.
#[derive(Default)]
pub struct CountingApi {
    pub products: Vec<Product>,
    pub orders: Mutex<Vec<Order>>,
    pub product_fetches: AtomicUsize,
    pub order_fetches: AtomicUsize,
    pub order_posts: AtomicUsize,
}

impl CountingApi {
    pub fn with_products(products: Vec<Product>) -> Arc<Self> {
        Arc::new(Self {
            products,
            ..Self::default()
        })
    }

    pub fn network_calls(&self) -> usize {
        self.product_fetches.load(Ordering::SeqCst)
            + self.order_fetches.load(Ordering::SeqCst)
            + self.order_posts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorefrontApi for CountingApi {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.product_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.order_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders.lock().await.clone())
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<()> {
        self.order_posts.fetch_add(1, Ordering::SeqCst);
        let mut orders = self.orders.lock().await;
        let next_id = i64::try_from(orders.len()).unwrap_or(i64::MAX) + 1;
        orders.push(order(next_id, request));
        Ok(())
    }
}

/// Shared knobs and recordings of the in-process HTTP server.
#[derive(Clone, Default)]
pub struct ServerState {
    pub products_body: Arc<Mutex<Option<serde_json::Value>>>,
    pub orders: Arc<Mutex<Vec<Order>>>,
    pub posted: Arc<Mutex<Vec<CreateOrderRequest>>>,
    pub reject_posts: Arc<Mutex<bool>>,
    pub reject_order_listing: Arc<Mutex<bool>>,
    pub order_fetches: Arc<AtomicUsize>,
}

async fn handle_list_products(
    State(state): State<ServerState>,
) -> std::result::Result<Json<serde_json::Value>, StatusCode> {
    state
        .products_body
        .lock()
        .await
        .clone()
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn handle_list_orders(
    State(state): State<ServerState>,
) -> std::result::Result<Json<Vec<Order>>, StatusCode> {
    state.order_fetches.fetch_add(1, Ordering::SeqCst);
    if *state.reject_order_listing.lock().await {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(state.orders.lock().await.clone()))
}

async fn handle_create_order(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> StatusCode {
    if *state.reject_posts.lock().await {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    state.posted.lock().await.push(payload.clone());
    let mut orders = state.orders.lock().await;
    let next_id = i64::try_from(orders.len()).unwrap_or(i64::MAX) + 1;
    orders.push(order(next_id, &payload));
    StatusCode::CREATED
}

pub async fn spawn_storefront_server(state: ServerState) -> std::io::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/api/products", get(handle_list_products))
        .route(
            "/api/orders",
            get(handle_list_orders).post(handle_create_order),
        )
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

pub fn http_api(base_url: &str) -> Arc<dyn StorefrontApi> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let config = ClientConfig::from_base_url(base_url).expect("config");
    Arc::new(HttpStorefrontApi::new(config))
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}
