//! Caller-supplied options for embed and thumbnail rendering.

use std::collections::BTreeMap;

use maud::html;
use serde::{Deserialize, Serialize};

/// Options for [`render_embed`](crate::Provider::render_embed).
///
/// `query` is appended to the player URL, `attr` is added to the iframe
/// tag. Keys are emitted in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedOptions {
    pub query: BTreeMap<String, String>,
    pub attr: BTreeMap<String, String>,
}

impl EmbedOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add an iframe attribute. The value is HTML-escaped on output.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr.insert(key.into(), value.into());
        self
    }

    /// Set a provider-specific boolean player flag.
    #[must_use]
    pub fn with_flag<F: PlayerFlag>(self, flag: F, enabled: bool) -> Self {
        self.with_query(flag.as_str(), if enabled { "true" } else { "false" })
    }

    /// Percent-encoded `key=value` pairs joined with `&`, without a leading
    /// separator. Empty when there is no query.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Space-prefixed `key="value"` attributes with escaped values.
    #[must_use]
    pub fn attributes(&self) -> String {
        self.attr
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, escape_html(v)))
            .collect()
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` so a value cannot leave a quoted
/// attribute of either style.
#[must_use]
pub fn escape_html(value: &str) -> String {
    html! { (value) }.into_string().replace('\'', "&#39;")
}

/// A typed query flag understood by one provider's player.
pub trait PlayerFlag {
    fn as_str(&self) -> &'static str;
}

/// Loom player flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoomFlag {
    HideOwner,
    HideShare,
    HideTitle,
    HideEmbedTopBar,
}

impl PlayerFlag for LoomFlag {
    fn as_str(&self) -> &'static str {
        match self {
            Self::HideOwner => "hide_owner",
            Self::HideShare => "hide_share",
            Self::HideTitle => "hide_title",
            Self::HideEmbedTopBar => "hideEmbedTopBar",
        }
    }
}

/// Panopto player flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanoptoFlag {
    Autoplay,
    OfferViewer,
    ShowTitle,
    ShowBrand,
    Captions,
    Interactivity,
}

impl PlayerFlag for PanoptoFlag {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Autoplay => "autoplay",
            Self::OfferViewer => "offerviewer",
            Self::ShowTitle => "showtitle",
            Self::ShowBrand => "showbrand",
            Self::Captions => "captions",
            Self::Interactivity => "interactivity",
        }
    }
}

/// Options for thumbnail lookups.
///
/// `image` names the provider's size variant; unknown or missing values fall
/// back to the provider default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailOptions {
    pub image: Option<String>,
}

impl ThumbnailOptions {
    #[must_use]
    pub fn image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
        }
    }
}
