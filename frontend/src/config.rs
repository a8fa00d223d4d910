use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_SIGN_IN_ENDPOINT: &str = "https://social-login.druckland.de/api/v1/user/signin";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub sign_in_endpoint: Option<String>,
}

static SIGN_IN_ENDPOINT: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn get_from_env_js() -> Option<String> {
    // Optional global: window.__STOREFRONT_ENV = { SIGN_IN_ENDPOINT: "..." }
    read_global_key("__STOREFRONT_ENV", &["SIGN_IN_ENDPOINT", "sign_in_endpoint"])
}

fn get_from_window_config() -> Option<String> {
    // Optional global: window.__STOREFRONT_CONFIG = { sign_in_endpoint: "..." }
    read_global_key("__STOREFRONT_CONFIG", &["sign_in_endpoint", "SIGN_IN_ENDPOINT"])
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First non-blank candidate in precedence order, else the built-in default.
pub fn pick_endpoint(candidates: impl IntoIterator<Item = Option<String>>) -> String {
    candidates
        .into_iter()
        .find_map(non_blank)
        .unwrap_or_else(|| DEFAULT_SIGN_IN_ENDPOINT.to_string())
}

fn cache_endpoint(value: String) -> String {
    SIGN_IN_ENDPOINT.get_or_init(|| value).clone()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let origin = web_sys::window()
        .context("no window")?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("no location origin"))?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("fetching config.json")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

pub async fn await_sign_in_endpoint() -> String {
    if let Some(cached) = SIGN_IN_ENDPOINT.get() {
        return cached.clone();
    }
    let from_globals = non_blank(get_from_env_js()).or_else(|| non_blank(get_from_window_config()));
    if let Some(existing) = from_globals {
        return cache_endpoint(existing);
    }
    let from_file = match fetch_runtime_config().await {
        Ok(cfg) => cfg.sign_in_endpoint,
        Err(err) => {
            log::debug!("runtime config unavailable: {:#}", err);
            None
        }
    };
    cache_endpoint(pick_endpoint([from_file]))
}

pub async fn init() {
    let endpoint = await_sign_in_endpoint().await;
    log::info!("sign-in endpoint: {}", endpoint);
}
