//! HTTP client for the local emulator control server.

use pokebot_common::{game::Resource, BridgeError, BridgeResult};
use reqwest::{Client, Url};
use std::{future::Future, pin::Pin};

/// Action name that returns the current framebuffer instead of pressing a button.
pub const SCREEN_ACTION: &str = "screen";

pub type EmulatorFuture<'a> = Pin<Box<dyn Future<Output = BridgeResult<Vec<u8>>> + Send + 'a>>;

/// Operations the command router needs from the control server.
pub trait EmulatorApi: Send + Sync {
    /// GET `/{resource}`; returns the raw JSON body.
    fn fetch_state(&self, resource: Resource) -> EmulatorFuture<'_>;

    /// GET `/req?action=..&val=..`; returns the raw body.
    fn send_action<'a>(&'a self, action: &'a str, value: Option<&'a str>) -> EmulatorFuture<'a>;

    fn fetch_screen(&self) -> EmulatorFuture<'_> {
        self.send_action(SCREEN_ACTION, None)
    }
}

pub struct HttpEmulatorClient {
    http_client: Client,
    base: Url,
}

impl HttpEmulatorClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url)?;
        // keep any path prefix when joining endpoint names
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http_client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> BridgeResult<Url> {
        self.base
            .join(path)
            .map_err(|e| BridgeError::Network(format!("invalid endpoint {path}: {e}")))
    }

    async fn get(&self, url: Url) -> BridgeResult<Vec<u8>> {
        log::debug!("GET {url}");
        let resp = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                log::warn!("request to {url} failed: {e}");
                BridgeError::Network(e.to_string())
            })?;
        let body = resp
            .bytes()
            .await
            .map_err(|e| BridgeError::Network(format!("failed to read response: {e}")))?;
        log::debug!("GET {url} -> {} bytes", body.len());
        Ok(body.to_vec())
    }
}

impl EmulatorApi for HttpEmulatorClient {
    fn fetch_state(&self, resource: Resource) -> EmulatorFuture<'_> {
        Box::pin(async move {
            let url = self.endpoint(resource.path())?;
            self.get(url).await
        })
    }

    fn send_action<'a>(&'a self, action: &'a str, value: Option<&'a str>) -> EmulatorFuture<'a> {
        Box::pin(async move {
            let mut url = self.endpoint("req")?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("action", action);
                if let Some(value) = value {
                    query.append_pair("val", value);
                }
            }
            self.get(url).await
        })
    }
}
