#![deny(missing_docs)]
//! This crate supplies the list envelope every paginated dashboard endpoint
//! returns. The backend is the source of truth for page counts; consumers
//! read `total_pages`/`total` off the envelope instead of recomputing them.

use serde::{Deserialize, Deserializer, Serialize};

/// The `{data, total, page, limit, totalPages}` envelope returned by every
/// list endpoint.
///
/// Backends have been observed to send `data: null` or omit it entirely on
/// empty result sets, so `data` decodes to an empty list in both cases and
/// the count fields are defaulted rather than failing the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records for the requested page, in backend order.
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_empty",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Vec<T>,
    /// Total records across all pages.
    #[serde(default)]
    pub total: u64,
    /// The page this envelope holds, 1-based.
    #[serde(default)]
    pub page: u32,
    /// Requested page size.
    #[serde(default)]
    pub limit: u32,
    /// Total page count as computed by the backend.
    #[serde(default)]
    pub total_pages: u32,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_data_decodes_to_empty_list() {
        let page: Page<String> =
            serde_json::from_str(r#"{"total":0,"page":1,"limit":10,"totalPages":0}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.page, 1);
    }

    #[test]
    fn null_data_decodes_to_empty_list() {
        let page: Page<i64> = serde_json::from_str(r#"{"data":null,"total":0}"#).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn full_envelope_round_trips() {
        let page: Page<i64> = serde_json::from_str(
            r#"{"data":[1,2,3],"total":23,"page":2,"limit":10,"totalPages":3}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
    }
}
