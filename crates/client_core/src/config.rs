use url::Url;

use crate::error::{ClientError, Result};

/// Storefront API the clients talk to unless told otherwise.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

pub const PRODUCTS_PATH: &str = "api/products";
pub const ORDERS_PATH: &str = "api/orders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: Url,
}

impl ClientConfig {
    pub fn from_base_url(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        // `Url::join` replaces the last path segment unless the base ends in '/'.
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let api_base_url = Url::parse(&normalized).map_err(|source| ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(Self { api_base_url })
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match self.api_base_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{path}", self.api_base_url),
        }
    }

    pub fn products_url(&self) -> String {
        self.endpoint(PRODUCTS_PATH)
    }

    pub fn orders_url(&self) -> String {
        self.endpoint(ORDERS_PATH)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
