use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{EmbedError, Result};
use crate::options::EmbedOptions;
use crate::thumbnail::Thumbnail;
use crate::url_parts::UrlParts;

use super::{query_suffix, render_iframe, Provider};

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:/video|/channels/[A-Za-z0-9_-]+|/groups/[A-Za-z0-9_-]+/videos)?/([0-9]+)")
        .unwrap()
});

/// Extract the numeric video id.
///
/// Only the bare `vimeo.com` host is recognized, with paths of the form
/// `/<id>`, `/video/<id>`, `/channels/<name>/<id>` or
/// `/groups/<name>/videos/<id>`.
pub fn detect(url: &UrlParts) -> Option<String> {
    if url.hostname() != "vimeo.com" {
        return None;
    }

    PATH_PATTERN
        .captures(url.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn render_embed(id: &str, opts: &EmbedOptions) -> String {
    render_iframe("//player.vimeo.com/video/", id, &query_suffix(opts), opts)
}

/// Thumbnail fields in the Vimeo simple-API response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VimeoImage {
    Small,
    Medium,
    #[default]
    Large,
}

impl VimeoImage {
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("thumbnail_small") => Self::Small,
            Some("thumbnail_medium") => Self::Medium,
            _ => Self::Large,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "thumbnail_small",
            Self::Medium => "thumbnail_medium",
            Self::Large => "thumbnail_large",
        }
    }
}

/// Look up a thumbnail through `{api_base}/{id}.json`.
///
/// The response is a one-element array whose entry holds the chosen field.
/// The image URL is the part of the field value after its first colon,
/// which leaves a scheme-relative `//host/path` for `https://` values.
///
/// # Errors
///
/// Returns an error on transport failure, a non-200 status, or when the
/// field is missing or has nothing after its first colon.
pub async fn fetch_thumbnail(
    client: &Client,
    api_base: &str,
    id: &str,
    image: VimeoImage,
) -> Result<Thumbnail> {
    let url = format!("{}/{id}.json", api_base.trim_end_matches('/'));
    debug!(url = %url, image = image.as_str(), "Fetching Vimeo thumbnail metadata");

    let response = client
        .get(&url)
        .send()
        .await
        .inspect_err(|e| warn!(id = %id, error = %e, "Vimeo request failed"))?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(id = %id, status = %status, "Unexpected response from Vimeo");
        return Err(EmbedError::UnexpectedStatus {
            provider: Provider::Vimeo,
            status,
        });
    }

    let body: Value = response
        .json()
        .await
        .inspect_err(|e| warn!(id = %id, error = %e, "Unreadable Vimeo response"))?;
    let src = body
        .get(0)
        .and_then(|entry| entry.get(image.as_str()))
        .and_then(Value::as_str)
        .and_then(|value| value.split(':').nth(1))
        .filter(|src| !src.is_empty())
        .ok_or_else(|| {
            warn!(id = %id, field = image.as_str(), "No image in Vimeo response");
            EmbedError::MissingImage {
                provider: Provider::Vimeo,
                id: id.to_string(),
            }
        })?;

    Ok(Thumbnail::new(src))
}
