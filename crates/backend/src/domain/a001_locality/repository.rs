use contracts::domain::a001_locality::{Locality, INDICATOR_KEYS};

use crate::shared::content_store::{decode, ContentStore, ContentStoreError, QueryParams};

/// Roster query: every locality ordered by name with all allow-listed
/// indicators, each coalesced to `0`.
pub fn roster_query() -> String {
    let indicators: Vec<String> = INDICATOR_KEYS
        .iter()
        .map(|k| format!(r#""{k}": coalesce({k}, 0)"#))
        .collect();
    format!(
        r#"*[_type == "locality"] | order(name asc) {{ _id, name, fips, "indicators": {{ {} }} }}"#,
        indicators.join(", ")
    )
}

pub async fn list_all(store: &dyn ContentStore) -> Result<Vec<Locality>, ContentStoreError> {
    let result = store.query(&roster_query(), &QueryParams::new()).await?;
    decode(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_store::testing::RecordingStore;
    use contracts::domain::a001_locality::IndicatorKey;
    use serde_json::json;

    #[test]
    fn test_roster_query_projects_every_indicator() {
        let query = roster_query();
        for key in INDICATOR_KEYS {
            assert!(query.contains(&format!("\"{key}\": coalesce({key}, 0)")));
        }
        assert!(query.contains("order(name asc)"));
    }

    #[tokio::test]
    async fn test_list_all_decodes_roster() {
        let store = RecordingStore::returning(json!([
            {
                "_id": "a", "name": "Alpha", "fips": "01001",
                "indicators": { "Total_PerCapita": 12.5, "Labor_PerCapita": null }
            },
            { "_id": "b", "name": "Beta", "fips": "01003" }
        ]));

        let roster = list_all(&store).await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].indicator(IndicatorKey::total_per_capita()), 12.5);
        assert_eq!(roster[1].indicator(IndicatorKey::total_per_capita()), 0.0);
    }
}
