use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub content_store: ContentStoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the compiled frontend (trunk output)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentStoreConfig {
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub use_cdn: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Read token for private datasets; `CONTENT_STORE_TOKEN` overrides it
    #[serde(default)]
    pub token: Option<String>,
    /// Full API origin, replaces the `https://<project>.api.sanity.io` default
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".into()
}

fn default_dataset() -> String {
    "production".into()
}

fn default_api_version() -> String {
    "2023-05-03".into()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[content_store]
project_id = "costatlas"
dataset = "production"
api_version = "2023-05-03"
use_cdn = true
timeout_secs = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied on top of either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            parse_config(&std::fs::read_to_string(&path)?)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn find_config_file() -> Option<std::path::PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.content_store.project_id.trim().is_empty() {
        anyhow::bail!("content_store.project_id must not be empty");
    }
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, env: impl Fn(&str) -> Option<String>) {
    if let Some(token) = env("CONTENT_STORE_TOKEN").filter(|t| !t.trim().is_empty()) {
        config.content_store.token = Some(token);
    }
    if let Some(port) = env("PORT").and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
}

/// Resolves `static_dir` relative to the executable unless it is absolute
pub fn resolve_static_dir(config: &Config) -> std::path::PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(dir)))
        .filter(|p| p.exists())
        .unwrap_or_else(|| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content_store.dataset, "production");
        assert!(config.content_store.token.is_none());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse_config("[content_store]\nproject_id = \"abc\"\n").unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.content_store.api_version, "2023-05-03");
        assert_eq!(config.content_store.timeout_secs, 10);
        assert!(!config.content_store.use_cdn);
    }

    #[test]
    fn test_empty_project_is_rejected() {
        assert!(parse_config("[content_store]\nproject_id = \" \"\n").is_err());
        assert!(parse_config("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, |name| match name {
            "CONTENT_STORE_TOKEN" => Some("sk-test".into()),
            "PORT" => Some("8080".into()),
            _ => None,
        });
        assert_eq!(config.content_store.token.as_deref(), Some("sk-test"));
        assert_eq!(config.server.port, 8080);
    }
}
