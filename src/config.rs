use dioxus::prelude::*;
use serde::Deserialize;

const DEFAULT_GITHUB_USERNAME: &str = "TurkiAlslamah";
const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub github_username: String,
    pub github_api_base_url: String,
    pub show_projects: bool,
    pub contact_endpoint: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            show_projects: true,
            contact_endpoint: None,
        }
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move { fetch_runtime_config().await })
}

// A broken or missing config document must never block the page.
#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> RuntimeConfig {
    match fetch_config_from("/config.json").await {
        Ok(config) => config,
        Err(_) => match fetch_config_from("/assets/config.json").await {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("config fallback to defaults: {err}");
                RuntimeConfig::default()
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let github_username =
        std::env::var("PORTFOLIO_GITHUB_USERNAME").unwrap_or(defaults.github_username);
    let github_api_base_url =
        std::env::var("PORTFOLIO_GITHUB_API_BASE_URL").unwrap_or(defaults.github_api_base_url);
    let show_projects = std::env::var("PORTFOLIO_SHOW_PROJECTS")
        .map(|value| value != "0" && !value.eq_ignore_ascii_case("false"))
        .unwrap_or(defaults.show_projects);
    let contact_endpoint = std::env::var("PORTFOLIO_CONTACT_ENDPOINT").ok();
    RuntimeConfig {
        github_username,
        github_api_base_url,
        show_projects,
        contact_endpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_github() {
        let config = RuntimeConfig::default();
        assert_eq!(config.github_username, "TurkiAlslamah");
        assert_eq!(config.github_api_base_url, "https://api.github.com");
        assert!(config.show_projects);
        assert_eq!(config.contact_endpoint, None);
    }

    #[test]
    fn partial_document_fills_missing_fields() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"github_username":"octocat"}"#).unwrap();
        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.github_api_base_url, "https://api.github.com");
        assert!(config.show_projects);
    }

    #[test]
    fn full_document_decodes() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "github_username": "octocat",
                "github_api_base_url": "https://api.example.test",
                "show_projects": false,
                "contact_endpoint": "https://example.test/contact"
            }"#,
        )
        .unwrap();
        assert_eq!(config.github_api_base_url, "https://api.example.test");
        assert!(!config.show_projects);
        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("https://example.test/contact")
        );
    }
}
