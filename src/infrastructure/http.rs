// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`AssetSource`] port.

use crate::application::port::{AssetSource, FetchError, FetchResult};
use crate::config::defaults::MAX_REDIRECTS;
use futures_util::future::BoxFuture;
use futures_util::StreamExt;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Response, Url};
use std::time::Duration;

/// Largest asset body accepted, in bytes.
const MAX_ASSET_BYTES: usize = 64 * 1024 * 1024;

/// Reads concept files from a static HTTP(S) server.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: Client,
    base: Url,
}

impl HttpAssetSource {
    /// Creates a source rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `base_url` is not an absolute
    /// HTTP(S) URL, or [`FetchError::Transport`] if the client cannot be built.
    pub fn new(base_url: &str, connect_timeout: Duration) -> FetchResult<Self> {
        let base = parse_base_url(base_url)?;
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("ConceptLens/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for a server-relative path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the joined URL is invalid.
    pub fn url_for(&self, path: &str) -> FetchResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn get(&self, path: &str) -> FetchResult<Response> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        check_status(response)
    }
}

/// Parses and normalizes a base URL so relative joins stay below it.
fn parse_base_url(base_url: &str) -> FetchResult<Url> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url =
        Url::parse(&with_slash).map_err(|e| FetchError::InvalidUrl(format!("{trimmed}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{other}' in {trimmed}"
        ))),
    }
}

fn check_status(response: Response) -> FetchResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::from_status(
            status.as_u16(),
            status.canonical_reason(),
        ))
    }
}

impl AssetSource for HttpAssetSource {
    fn probe(&self, path: &str) -> BoxFuture<'_, FetchResult<bool>> {
        let path = path.to_string();
        Box::pin(async move {
            let url = self.url_for(&path)?;
            let response = self
                .client
                .head(url)
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            tracing::trace!(%path, status = %response.status(), "HEAD");
            Ok(response.status().is_success())
        })
    }

    fn fetch_text(&self, path: &str) -> BoxFuture<'_, FetchResult<String>> {
        let path = path.to_string();
        Box::pin(async move {
            let response = self.get(&path).await?;
            response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))
        })
    }

    fn fetch_bytes(&self, path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
        let path = path.to_string();
        Box::pin(async move {
            let response = self.get(&path).await?;
            let expected = response.content_length().unwrap_or(0) as usize;
            if expected > MAX_ASSET_BYTES {
                return Err(FetchError::Body(format!(
                    "{path} is too large ({expected} bytes)"
                )));
            }

            let mut body = Vec::with_capacity(expected);
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| FetchError::Body(e.to_string()))?;
                if body.len() + chunk.len() > MAX_ASSET_BYTES {
                    return Err(FetchError::Body(format!(
                        "{path} exceeds {MAX_ASSET_BYTES} bytes"
                    )));
                }
                body.extend_from_slice(&chunk);
            }
            Ok(body)
        })
    }
}
