//! HTTP client for the hosted list store (Supabase-style REST interface).

use uuid::Uuid;

use crate::config::BackendConfig;

use super::backend::{Backend, BackendError};
use super::types::{ListItem, NewItem, ShoppingList};

/// Synchronous REST client against the hosted backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    owner_id: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            owner_id: config.owner_id.clone(),
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let mut request = ureq::get(url)
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key));
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call().map_err(map_ureq_error)?;
        response
            .into_json::<T>()
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

fn map_ureq_error(error: ureq::Error) -> BackendError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Error desconocido".to_string());
            BackendError::Api { code, message }
        }
        ureq::Error::Transport(t) => BackendError::Network(t.to_string()),
    }
}

impl Backend for HttpBackend {
    fn add_item(&self, list_id: Uuid, item: NewItem) -> Result<(), BackendError> {
        let body = serde_json::json!({
            "list_id": list_id,
            "name": item.name,
            "price": item.price,
            "brand": item.brand,
            "model": item.model,
        });

        log::debug!("POST list_items name={:?} list={}", item.name, list_id);

        ureq::post(&self.rest_url("list_items"))
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_ureq_error)?;

        Ok(())
    }

    fn fetch_lists(&self) -> Result<Vec<ShoppingList>, BackendError> {
        self.get_json(
            &self.rest_url("shopping_lists"),
            &[
                ("select", "*"),
                ("owner_id", &format!("eq.{}", self.owner_id)),
            ],
        )
    }

    fn fetch_items(&self, list_ids: &[Uuid]) -> Result<Vec<ListItem>, BackendError> {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = list_ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.get_json(
            &self.rest_url("list_items"),
            &[("select", "*"), ("list_id", &format!("in.({})", ids))],
        )
    }
}
