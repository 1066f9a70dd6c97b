//! Browser fetch of the dataset file.

use anyhow::{anyhow, bail, Context};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET `url` relative to the page and return the body as text.
///
/// A network error or a non-2xx status is an error.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().context("no global window")?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch of {} failed: {:?}", url, e))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| anyhow!("fetch of {} did not return a Response", url))?;
    if !response.ok() {
        bail!("fetch of {} returned HTTP {}", url, response.status());
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("cannot read body of {}: {:?}", url, e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("cannot read body of {}: {:?}", url, e))?;
    let text = body
        .as_string()
        .with_context(|| format!("body of {} is not text", url))?;
    log::info!("[Disasters] fetched {} ({} bytes)", url, text.len());
    Ok(text)
}
