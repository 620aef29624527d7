//! Provider detection and embed rendering.
//!
//! Detection tries each provider in [`Provider::ALL`] order and stops at the
//! first match, so a URL that looks like two providers belongs to whichever
//! comes first.

pub mod dailymotion;
pub mod loom;
pub mod panopto;
pub mod vimeo;
pub mod youtube;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::IFRAME_TAIL;
use crate::options::{escape_html, EmbedOptions};
use crate::url_parts::UrlParts;

pub use dailymotion::DailymotionImage;
pub use vimeo::VimeoImage;
pub use youtube::YouTubeImage;

/// A supported video host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    YouTube,
    Vimeo,
    Dailymotion,
    Loom,
    Panopto,
}

impl Provider {
    /// All providers, in detection priority order.
    pub const ALL: [Provider; 5] = [
        Provider::YouTube,
        Provider::Vimeo,
        Provider::Dailymotion,
        Provider::Loom,
        Provider::Panopto,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Dailymotion => "dailymotion",
            Provider::Loom => "loom",
            Provider::Panopto => "panopto",
        }
    }

    /// Extract this provider's video id from `url`, or `None` if the URL is
    /// not one of ours.
    #[must_use]
    pub fn detect(&self, url: &UrlParts) -> Option<String> {
        match self {
            Provider::YouTube => youtube::detect(url),
            Provider::Vimeo => vimeo::detect(url),
            Provider::Dailymotion => dailymotion::detect(url),
            Provider::Loom => loom::detect(url),
            Provider::Panopto => panopto::detect(url),
        }
    }

    /// Render the iframe player for `id`.
    ///
    /// `source_url` is the URL the id was taken from; only Panopto reads it,
    /// to embed from the customer's own host.
    #[must_use]
    pub fn render_embed(&self, id: &str, opts: &EmbedOptions, source_url: &str) -> String {
        match self {
            Provider::YouTube => youtube::render_embed(id, opts),
            Provider::Vimeo => vimeo::render_embed(id, opts),
            Provider::Dailymotion => dailymotion::render_embed(id, opts),
            Provider::Loom => loom::render_embed(id, opts),
            Provider::Panopto => panopto::render_embed(id, opts, source_url),
        }
    }

    /// Whether thumbnails can be resolved for this provider.
    #[must_use]
    pub fn supports_thumbnail(&self) -> bool {
        matches!(
            self,
            Provider::YouTube | Provider::Vimeo | Provider::Dailymotion
        )
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::YouTube => "youtube.com",
            Provider::Vimeo => "vimeo.com",
            Provider::Dailymotion => "dailymotion.com",
            Provider::Loom => "loom.com",
            Provider::Panopto => "panopto.com",
        })
    }
}

/// The provider and id found in a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Provider-native id. Empty when the host matched but the id carrier
    /// (query parameter or path segment) was missing.
    pub id: String,
    pub provider: Provider,
    pub normalized_url: String,
}

impl Resolution {
    #[must_use]
    pub fn render_embed(&self, opts: &EmbedOptions) -> String {
        self.provider
            .render_embed(&self.id, opts, &self.normalized_url)
    }
}

/// Identify the provider behind `url` and extract its video id.
///
/// Returns `None` for malformed URLs and unsupported hosts.
#[must_use]
pub fn resolve(url: &str) -> Option<Resolution> {
    let parts = UrlParts::parse(url)?;

    Provider::ALL.iter().find_map(|provider| {
        provider.detect(&parts).map(|id| {
            debug!(provider = provider.as_str(), id = %id, url = %url, "Detected video provider");
            Resolution {
                id,
                provider: *provider,
                normalized_url: parts.href().to_string(),
            }
        })
    })
}

/// Resolve `url` and render its embed player in one step.
#[must_use]
pub fn embed(url: &str, opts: &EmbedOptions) -> Option<String> {
    resolve(url).map(|res| res.render_embed(opts))
}

/// Build the iframe tag for `{prefix}{id}{suffix}`.
///
/// `id` comes from the input URL and may hold anything after decoding, so
/// it is escaped; `prefix` and `suffix` must already be safe.
fn render_iframe(prefix: &str, id: &str, suffix: &str, opts: &EmbedOptions) -> String {
    format!(
        r#"<iframe src="{prefix}{}{suffix}"{}{IFRAME_TAIL}"#,
        escape_html(id),
        opts.attributes()
    )
}

/// `?query` for templates whose base URL has no query string yet.
fn query_suffix(opts: &EmbedOptions) -> String {
    let query = opts.query_string();
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}
