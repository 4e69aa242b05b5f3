//! Catalog records for the laundry dashboard: products, categories, and the
//! feature/include reference lists, plus the create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod wire;

pub use wire::{CategoryWire, EmbeddedFeature};

/// A sellable laundry product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_per_kg: Option<f64>,
    #[serde(default)]
    pub savings: Option<String>,
    #[serde(default)]
    pub popular: bool,
    pub category_id: i64,
    #[serde(default)]
    pub feature_ids: Vec<i64>,
    #[serde(default)]
    pub include_ids: Vec<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product category.
///
/// The backend is inconsistent about how it references features: some
/// responses carry bare `featureIds`, others embed full `features` objects.
/// Deserialization goes through [`CategoryWire`] so that the rest of the
/// codebase only ever sees id lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "wire::CategoryWire")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub feature_ids: Vec<i64>,
}

/// An entry in the features reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An entry in the includes reference list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Include {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    pub popular: bool,
    pub category_id: i64,
    pub feature_ids: Vec<i64>,
    pub include_ids: Vec<i64>,
}

/// Body for `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub feature_ids: Vec<i64>,
}
