use iced::widget::image::Handle;
use profilecore::content::Catalog;
use profilecore::prelude::DeckConfig;
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:9000";

/// Mirror of the presenter's `/content` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPayload {
    pub catalog: Catalog,
    #[serde(default)]
    pub deck: DeckConfig,
}

pub fn bridge_url() -> String {
    std::env::var("PROFILE_BRIDGE_URL").unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string())
}

/// Joins an asset reference onto the bridge base URL without altering it.
pub fn asset_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub fn parse_payload(bytes: &[u8]) -> Result<ContentPayload, String> {
    let payload: ContentPayload = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    let catalog = payload.catalog.validated().map_err(|e| e.to_string())?;
    Ok(ContentPayload {
        catalog,
        deck: payload.deck,
    })
}

pub async fn fetch_content(base: String) -> Result<ContentPayload, String> {
    let response = reqwest::get(asset_url(&base, "/content"))
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("content request failed: {}", response.status()));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    parse_payload(&bytes)
}

pub async fn fetch_asset(base: String, path: String) -> Result<Vec<u8>, String> {
    let response = reqwest::get(asset_url(&base, &path))
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("{}: {}", path, response.status()));
    }
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| e.to_string())
}

/// Decoded image handles keyed by asset reference.
#[derive(Debug, Default)]
pub struct ImageCache {
    handles: HashMap<String, Handle>,
}

impl ImageCache {
    pub fn insert(&mut self, path: String, bytes: Vec<u8>) {
        self.handles.insert(path, Handle::from_bytes(bytes));
    }

    pub fn get(&self, path: &str) -> Option<&Handle> {
        self.handles.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.handles.contains_key(path)
    }
}
