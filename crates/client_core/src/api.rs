//! HTTP transport for the storefront REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::protocol::{CreateOrderRequest, Order, Product};
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
};

#[async_trait]
pub trait StorefrontApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn list_orders(&self) -> Result<Vec<Order>>;
    /// The response is not inspected: only a failed send is an error. An
    /// error status is logged and otherwise treated as accepted.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<()>;
}

pub struct HttpStorefrontApi {
    http: Client,
    config: ClientConfig,
}

impl HttpStorefrontApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint = %endpoint, "GET");
        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| ClientError::transport(endpoint, err))?;
        res.json()
            .await
            .map_err(|err| ClientError::decode(endpoint, err))
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.get_json(&self.config.products_url()).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.get_json(&self.config.orders_url()).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<()> {
        let endpoint = self.config.orders_url();
        debug!(endpoint = %endpoint, line_items = request.items.len(), "POST");
        let res = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| ClientError::transport(&endpoint, err))?;
        if !res.status().is_success() {
            warn!(
                endpoint = %endpoint,
                status = %res.status(),
                "order POST answered with an error status"
            );
        }
        Ok(())
    }
}
