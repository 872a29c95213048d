use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::api::{StoreHandle, SupabaseClient, UnconfiguredStore};

/// Name of the optional global injected by `env.js`:
/// `window.__AGENCY_ENV = { SUPABASE_URL: "...", SUPABASE_ANON_KEY: "..." }`.
#[cfg(target_arch = "wasm32")]
const ENV_GLOBAL: &str = "__AGENCY_ENV";
const CONFIG_ASSET: &str = "/config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "SUPABASE_URL")]
    pub supabase_url: Option<String>,
    #[serde(default, alias = "SUPABASE_ANON_KEY")]
    pub supabase_anon_key: Option<String>,
}

impl RuntimeConfig {
    pub fn new(supabase_url: Option<String>, supabase_anon_key: Option<String>) -> Self {
        Self {
            supabase_url,
            supabase_anon_key,
        }
        .normalized()
    }

    /// Trims values and treats blank ones as absent.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            supabase_url: clean(self.supabase_url),
            supabase_anon_key: clean(self.supabase_anon_key),
        }
    }

    /// Fills whatever is still missing from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> Self {
        Self {
            supabase_url: self.supabase_url.or(fallback.supabase_url),
            supabase_anon_key: self.supabase_anon_key.or(fallback.supabase_anon_key),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.supabase_url.is_none() {
            missing.push("SUPABASE_URL");
        }
        if self.supabase_anon_key.is_none() {
            missing.push("SUPABASE_ANON_KEY");
        }
        missing
    }
}

fn from_build_env() -> RuntimeConfig {
    RuntimeConfig::new(
        option_env!("SUPABASE_URL").map(str::to_string),
        option_env!("SUPABASE_ANON_KEY").map(str::to_string),
    )
}

#[cfg(target_arch = "wasm32")]
fn from_env_js() -> RuntimeConfig {
    fn read(object: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(object, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    let Some(window) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let global = match js_sys::Reflect::get(&window, &ENV_GLOBAL.into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return RuntimeConfig::default(),
    };
    RuntimeConfig::new(
        read(&global, &["SUPABASE_URL", "supabase_url"]),
        read(&global, &["SUPABASE_ANON_KEY", "supabase_anon_key"]),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn from_env_js() -> RuntimeConfig {
    RuntimeConfig::default()
}

/// Fetches `config.json` served next to the bundle at `origin`.
pub async fn fetch_runtime_config(origin: &str) -> anyhow::Result<RuntimeConfig> {
    let url = format!("{}{}", origin.trim_end_matches('/'), CONFIG_ASSET);
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("requesting {}", url))?;
    if !response.status().is_success() {
        bail!("{} returned {}", url, response.status());
    }
    let config = response
        .json::<RuntimeConfig>()
        .await
        .with_context(|| format!("parsing {}", url))?;
    Ok(config.normalized())
}

/// Resolves the configuration: `env.js` global, then `config.json`, then
/// values baked in at build time.
pub async fn load() -> RuntimeConfig {
    let config = from_env_js();
    if config.is_complete() {
        return config;
    }
    let fetched = match crate::utils::navigation::current_origin() {
        Some(origin) => match fetch_runtime_config(&origin).await {
            Ok(fetched) => fetched,
            Err(err) => {
                log::debug!("No runtime config.json: {:#}", err);
                RuntimeConfig::default()
            }
        },
        None => RuntimeConfig::default(),
    };
    config.or(fetched).or(from_build_env())
}

/// Store adapter for `config`; falls back to the configuration-error stub.
pub fn build_store(config: &RuntimeConfig) -> StoreHandle {
    match (&config.supabase_url, &config.supabase_anon_key) {
        (Some(url), Some(key)) => {
            log::info!("Content store: {}", url);
            StoreHandle::new(SupabaseClient::new(url.clone(), key.clone()))
        }
        _ => {
            log::error!(
                "Supabase not configured: missing {}",
                config.missing().join(", ")
            );
            StoreHandle::new(UnconfiguredStore::new())
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn config_json_is_fetched_and_normalized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(200)
                    .json_body(serde_json::json!({ "supabase_url": "https://x.co", "supabase_anon_key": "" }));
            })
            .await;

        let config = fetch_runtime_config(&server.base_url()).await.unwrap();
        assert_eq!(config.supabase_url.as_deref(), Some("https://x.co"));
        assert_eq!(config.supabase_anon_key, None);
    }

    #[tokio::test]
    async fn missing_config_json_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/config.json");
                then.status(404);
            })
            .await;

        let err = fetch_runtime_config(&server.base_url()).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn incomplete_config_selects_the_unconfigured_store() {
        let store = build_store(&RuntimeConfig::default());
        assert!(store.get_session().await.is_none());
        let err = store
            .select(&crate::api::Query::new(crate::api::Collection::Projects))
            .await
            .unwrap_err();
        assert_eq!(err, crate::api::StoreError::NotConfigured);
    }
}
