use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product the user has saved before, offered as an autocomplete candidate.
///
/// `name` is the match key and is never empty. `default_price` is absent when
/// the product was saved without a price (a price of 0 counts as absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price: Option<f64>,
}

impl SavedProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: None,
            model: None,
            default_price: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_default_price(mut self, price: f64) -> Self {
        self.default_price = Some(price);
        self
    }

    /// Secondary line shown under the name in the suggestion dropdown,
    /// e.g. "Dodot - Sensitive".
    pub fn detail_line(&self) -> Option<String> {
        match (&self.brand, &self.model) {
            (None, None) => None,
            (Some(b), None) => Some(b.clone()),
            (None, Some(m)) => Some(m.clone()),
            (Some(b), Some(m)) => Some(format!("{} - {}", b, m)),
        }
    }
}
