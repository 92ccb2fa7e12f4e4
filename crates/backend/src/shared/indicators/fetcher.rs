use contracts::domain::a001_locality::{IndicatorKey, IndicatorKeyError, IndicatorMap};
use contracts::shared::numbers::lenient_f64;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::content_store::{decode, ContentStore, ContentStoreError, QueryParams};

#[derive(Debug, Error)]
pub enum IndicatorFetchError {
    #[error("invalid indicator key: {0}")]
    InvalidIndicatorKey(#[from] IndicatorKeyError),

    #[error("indicator data fetch failed: {0}")]
    DataFetch(#[from] ContentStoreError),
}

/// Locality projected on a single indicator; identity fields other than
/// the name are not needed for the map.
#[derive(Debug, Deserialize)]
struct IndicatorRow {
    name: String,
    #[serde(default)]
    value: Value,
}

/// Every locality ordered by name, projected to identity fields plus `key`.
///
/// `key` is interpolated as a field name, which is only sound because an
/// `IndicatorKey` can only hold an allow-listed value.
pub fn indicator_query(key: IndicatorKey) -> String {
    format!(
        r#"*[_type == "locality"] | order(name asc) {{ _id, name, fips, "value": coalesce({}, 0) }}"#,
        key.as_str()
    )
}

/// Fetch `{locality name: value}` for one indicator.
///
/// The key is validated before anything is sent to the store; an invalid
/// key never produces a query. Store failures and malformed rows fail the
/// whole fetch, no partial map is returned.
pub async fn fetch_indicator_map(
    store: &dyn ContentStore,
    raw_key: Option<&str>,
) -> Result<IndicatorMap, IndicatorFetchError> {
    let key = IndicatorKey::parse_opt(raw_key)?;

    let result = store.query(&indicator_query(key), &QueryParams::new()).await?;
    let rows: Vec<IndicatorRow> = decode(result)?;

    let map: IndicatorMap = rows
        .into_iter()
        .map(|row| (row.name, lenient_f64(&row.value).unwrap_or(0.0)))
        .collect();

    tracing::debug!(
        "Indicators: {} -> {} localities from {}",
        key,
        map.len(),
        store.store_name()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_store::testing::RecordingStore;
    use contracts::domain::a001_locality::INDICATOR_KEYS;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_values_become_zero() {
        let store = RecordingStore::returning(json!([
            { "_id": "a", "name": "Alpha", "fips": "01001", "value": 12.5 },
            { "_id": "b", "name": "Beta", "fips": "01003", "value": null },
            { "_id": "c", "name": "Gamma" }
        ]));

        let map = fetch_indicator_map(&store, Some("Total_PerCapita")).await.unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["Alpha"], 12.5);
        assert_eq!(map["Beta"], 0.0);
        assert_eq!(map["Gamma"], 0.0);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn test_every_allow_listed_key_queries_its_field() {
        for key in INDICATOR_KEYS {
            let store = RecordingStore::returning(json!([
                { "_id": "a", "name": "Alpha", "value": 1 },
                { "_id": "b", "name": "Beta" }
            ]));
            let map = fetch_indicator_map(&store, Some(*key)).await.unwrap();
            assert_eq!(map.len(), 2);
            assert_eq!(map["Beta"], 0.0);
            assert!(store.queries()[0].contains(&format!("coalesce({}, 0)", key)));
        }
    }

    #[tokio::test]
    async fn test_invalid_keys_issue_no_query() {
        let store = RecordingStore::returning(json!([]));
        for raw in [None, Some(""), Some("Total_PerCapita}, *[_type == \"secret\"]{"), Some("name")] {
            let err = fetch_indicator_map(&store, raw).await.unwrap_err();
            assert!(matches!(err, IndicatorFetchError::InvalidIndicatorKey(_)));
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_data_fetch_error() {
        let store = RecordingStore::failing(ContentStoreError::Transport("refused".into()));
        let err = fetch_indicator_map(&store, Some("Labor_PerCapita")).await.unwrap_err();
        assert!(matches!(err, IndicatorFetchError::DataFetch(_)));
    }

    #[tokio::test]
    async fn test_malformed_response_returns_no_partial_map() {
        let store = RecordingStore::returning(json!([
            { "_id": "a", "name": "Alpha", "value": 3 },
            { "_id": "b", "value": 4 }
        ]));
        let err = fetch_indicator_map(&store, Some("Labor_PerCapita")).await.unwrap_err();
        assert!(matches!(err, IndicatorFetchError::DataFetch(ContentStoreError::Malformed(_))));

        let store = RecordingStore::returning(json!({ "not": "a list" }));
        assert!(fetch_indicator_map(&store, Some("Labor_PerCapita")).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_names_last_write_wins() {
        let store = RecordingStore::returning(json!([
            { "_id": "a", "name": "Alpha", "value": 1 },
            { "_id": "b", "name": "Alpha", "value": 2 }
        ]));
        let map = fetch_indicator_map(&store, Some("Household_Cost")).await.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["Alpha"], 2.0);
    }
}
