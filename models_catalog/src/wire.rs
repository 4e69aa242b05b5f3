//! Wire-shape normalization for categories.

use serde::Deserialize;

use crate::Category;

/// The raw shape `/categories` responses arrive in. Legacy responses embed
/// `features` objects; current ones carry bare `featureIds`. When both are
/// present the bare ids win.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWire {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub feature_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub features: Option<Vec<EmbeddedFeature>>,
}

/// An embedded feature object inside a legacy category response. Only the id
/// matters for normalization; the name is kept for completeness.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedFeature {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        let feature_ids = match (wire.feature_ids, wire.features) {
            (Some(ids), _) => ids,
            (None, Some(embedded)) => embedded.into_iter().map(|f| f.id).collect(),
            (None, None) => Vec::new(),
        };
        Category {
            id: wire.id,
            name: wire.name,
            description: wire.description.unwrap_or_default(),
            feature_ids,
        }
    }
}
