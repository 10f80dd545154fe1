// SPDX-License-Identifier: MPL-2.0
//! Async picture fetching.

use super::ImageSource;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::sync::OnceLock;
use std::time::Duration;

const USER_AGENT: &str = concat!("Showroom/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn http_client() -> Result<&'static reqwest::Client> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(CLIENT.get_or_init(|| client))
}

/// Fetches the bytes behind `source` and wraps them in an image handle.
///
/// Decoding happens lazily in the renderer; here an empty body is the only
/// content check.
pub async fn load(source: ImageSource) -> Result<Handle> {
    let bytes = match &source {
        ImageSource::Remote(url) => fetch_remote(url).await?,
        ImageSource::Local(path) => tokio::fs::read(path).await?,
    };

    if bytes.is_empty() {
        return Err(Error::Image(format!("{source} is empty")));
    }

    tracing::debug!(%source, bytes = bytes.len(), "image loaded");
    Ok(Handle::from_bytes(bytes))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = http_client()?.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(format!("{url}: HTTP status {status}")));
    }

    Ok(response.bytes().await?.to_vec())
}
