use async_trait::async_trait;
use serde_json::Value;

use super::{ContentStore, ContentStoreError, QueryParams};
use crate::shared::config::ContentStoreConfig;

/// HTTP client for the Sanity query API (`/data/query/<dataset>`).
pub struct SanityClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &ContentStoreConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            endpoint: query_endpoint(config),
            token: config
                .token
                .as_ref()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `https://<project>.api[cdn].sanity.io/v<version>/data/query/<dataset>`
fn query_endpoint(config: &ContentStoreConfig) -> String {
    let origin = match &config.base_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let host = if config.use_cdn { "apicdn" } else { "api" };
            format!("https://{}.{}.sanity.io", config.project_id, host)
        }
    };
    let version = config.api_version.trim_start_matches('v');
    format!("{}/v{}/data/query/{}", origin, version, config.dataset)
}

/// Query-string pairs: the query itself plus one `$name=<json>` per parameter.
fn query_pairs(query: &str, params: &QueryParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len() + 1);
    pairs.push(("query".to_string(), query.to_string()));
    for (name, value) in params {
        pairs.push((format!("${}", name), value.to_string()));
    }
    pairs
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentStoreError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&query_pairs(query, params));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                format!("timed out: {}", e)
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                e.to_string()
            };
            ContentStoreError::Transport(reason)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentStoreError::Status {
                status: status.as_u16(),
                body: body.chars().take(512).collect(),
            });
        }

        let mut payload: Value = response
            .json()
            .await
            .map_err(|e| ContentStoreError::Malformed(e.to_string()))?;

        match payload.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(ContentStoreError::Malformed(
                "response has no `result` field".into(),
            )),
        }
    }

    fn store_name(&self) -> &str {
        "sanity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ContentStoreConfig {
        ContentStoreConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "v2023-05-03".into(),
            use_cdn: true,
            timeout_secs: 10,
            token: Some("  ".into()),
            base_url: None,
        }
    }

    #[test]
    fn test_endpoint_from_project() {
        assert_eq!(
            query_endpoint(&config()),
            "https://abc123.apicdn.sanity.io/v2023-05-03/data/query/production"
        );

        let mut cfg = config();
        cfg.use_cdn = false;
        cfg.base_url = Some("http://localhost:9000/".into());
        assert_eq!(
            query_endpoint(&cfg),
            "http://localhost:9000/v2023-05-03/data/query/production"
        );
    }

    #[test]
    fn test_params_are_sent_as_json() {
        let mut params = QueryParams::new();
        params.insert("slug".into(), json!("home\" || true"));
        let pairs = query_pairs("*[slug.current == $slug]", &params);
        assert_eq!(pairs[0].1, "*[slug.current == $slug]");
        assert_eq!(pairs[1], ("$slug".to_string(), r#""home\" || true""#.to_string()));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let client = SanityClient::new(&config()).unwrap();
        assert!(client.token.is_none());
    }
}
