//! Remote Data Client
//!
//! Read-only access to the REST API. Failures never reach the caller:
//! they are logged and turned into an empty list.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Comment, Post, Todo, User};

/// Source of the remote collections
#[allow(async_fn_in_trait)]
pub trait RemoteSource {
    async fn users(&self) -> Vec<User>;
    async fn todos(&self) -> Vec<Todo>;
    async fn posts(&self) -> Vec<Post>;
    async fn comments(&self) -> Vec<Comment>;
}

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list_or_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Vec<T> {
        match self.fetch_list(endpoint).await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("API error on {}: {}", endpoint, e);
                Vec::new()
            }
        }
    }
}

impl RemoteSource for ApiClient {
    async fn users(&self) -> Vec<User> {
        self.list_or_empty("/users").await
    }

    async fn todos(&self) -> Vec<Todo> {
        self.list_or_empty("/todos").await
    }

    async fn posts(&self) -> Vec<Post> {
        self.list_or_empty("/posts").await
    }

    async fn comments(&self) -> Vec<Comment> {
        self.list_or_empty("/comments").await
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unreachable_host_yields_empty_list() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(client.users().await.is_empty());
        assert!(client.comments().await.is_empty());
    }
}
