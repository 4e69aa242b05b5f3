//! The aggregated analytics payload behind the dashboard overview, and the
//! filter set it is queried with.

use serde::{Deserialize, Serialize};

/// Aggregated report from `GET /auth/analytics`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub best_seller: Option<BestSeller>,
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
    #[serde(default)]
    pub product_sales: Vec<ProductSales>,
}

/// The highest-volume product in the filtered window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub name: String,
    pub total_sold: u64,
}

/// One revenue bucket on the dashboard timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub label: String,
    pub revenue: f64,
}

/// Per-product sales volume in the filtered window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub name: String,
    pub total_sold: u64,
}

/// Filters for the analytics report; unset filters are omitted from the
/// query string entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
