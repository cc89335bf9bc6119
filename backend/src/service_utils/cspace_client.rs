use std::sync::OnceLock;

use anyhow::Context;
use tracing::info;

/// Where the records service lives and how to log in, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CSPACE_SERVICES_URL")
                .unwrap_or("http://127.0.0.1:8180/cspace-services".to_string()),
            username: std::env::var("CSPACE_USERNAME")
                .unwrap_or("admin@core.collectionspace.org".to_string()),
            password: std::env::var("CSPACE_PASSWORD").unwrap_or("Administrator".to_string()),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn get_http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// GETs a JSON document from the records service.
pub async fn service_get_json(path: &str, params: &[(String, String)]) -> anyhow::Result<serde_json::Value> {
    service_get_json_from(&ServiceSettings::from_env(), path, params).await
}

pub async fn service_get_json_from(
    settings: &ServiceSettings,
    path: &str,
    params: &[(String, String)],
) -> anyhow::Result<serde_json::Value> {
    let url = settings.url_for(path);
    let t0 = std::time::Instant::now();

    let response = get_http_client()
        .get(&url)
        .query(params)
        .basic_auth(&settings.username, Some(&settings.password))
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }

    let dt_ms = t0.elapsed().as_millis();
    info!("GET {url}: {status}, {} bytes in {dt_ms}ms", response_txt.len());
    let payload = serde_json::from_str(&response_txt).context("records service returned invalid JSON")?;
    Ok(payload)
}
