use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{EmbedError, Result};
use crate::options::EmbedOptions;
use crate::thumbnail::Thumbnail;
use crate::url_parts::UrlParts;

use super::{query_suffix, render_iframe, Provider};

/// Extract the video id.
///
/// On `dailymotion.com` hosts the id is the second path segment with any
/// `_title-slug` suffix removed; on `dai.ly` it is the first segment.
pub fn detect(url: &UrlParts) -> Option<String> {
    if url.hostname().contains("dailymotion.com") {
        let segment = url.segment(2).unwrap_or_default();
        let id = segment.split('_').next().unwrap_or_default();
        return Some(id.to_string());
    }

    if url.hostname() == "dai.ly" {
        return Some(url.segment(1).unwrap_or_default().to_string());
    }

    None
}

pub fn render_embed(id: &str, opts: &EmbedOptions) -> String {
    render_iframe("//www.dailymotion.com/embed/video/", id, &query_suffix(opts), opts)
}

/// Thumbnail fields exposed by the Dailymotion data API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DailymotionImage {
    Px60,
    Px120,
    Px180,
    Px240,
    Px360,
    #[default]
    Px480,
    Px720,
    Px1080,
}

impl DailymotionImage {
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("thumbnail_60_url") => Self::Px60,
            Some("thumbnail_120_url") => Self::Px120,
            Some("thumbnail_180_url") => Self::Px180,
            Some("thumbnail_240_url") => Self::Px240,
            Some("thumbnail_360_url") => Self::Px360,
            Some("thumbnail_720_url") => Self::Px720,
            Some("thumbnail_1080_url") => Self::Px1080,
            _ => Self::Px480,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Px60 => "thumbnail_60_url",
            Self::Px120 => "thumbnail_120_url",
            Self::Px180 => "thumbnail_180_url",
            Self::Px240 => "thumbnail_240_url",
            Self::Px360 => "thumbnail_360_url",
            Self::Px480 => "thumbnail_480_url",
            Self::Px720 => "thumbnail_720_url",
            Self::Px1080 => "thumbnail_1080_url",
        }
    }
}

/// Look up a thumbnail through `{api_base}/{id}?fields={field}`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-200 status, or when the
/// requested field is missing or empty.
pub async fn fetch_thumbnail(
    client: &Client,
    api_base: &str,
    id: &str,
    image: DailymotionImage,
) -> Result<Thumbnail> {
    let url = format!("{}/{id}", api_base.trim_end_matches('/'));
    debug!(url = %url, image = image.as_str(), "Fetching Dailymotion thumbnail metadata");

    let response = client
        .get(&url)
        .query(&[("fields", image.as_str())])
        .send()
        .await
        .inspect_err(|e| warn!(id = %id, error = %e, "Dailymotion request failed"))?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(id = %id, status = %status, "Unexpected response from Dailymotion");
        return Err(EmbedError::UnexpectedStatus {
            provider: Provider::Dailymotion,
            status,
        });
    }

    let body: Value = response
        .json()
        .await
        .inspect_err(|e| warn!(id = %id, error = %e, "Unreadable Dailymotion response"))?;
    let src = body
        .get(image.as_str())
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            warn!(id = %id, field = image.as_str(), "No image in Dailymotion response");
            EmbedError::MissingImage {
                provider: Provider::Dailymotion,
                id: id.to_string(),
            }
        })?;

    Ok(Thumbnail::new(src))
}
