use crate::constants::YOUTUBE_IMAGE_BASE;
use crate::options::EmbedOptions;
use crate::thumbnail::Thumbnail;
use crate::url_parts::UrlParts;

use super::{query_suffix, render_iframe};

/// Extract the video id.
///
/// Any `youtube.com` host (including `m.` and `music.`) carries the id in
/// `v`; `youtu.be` carries it in the first path segment. A matching host
/// with no id still counts as YouTube and yields an empty id.
pub fn detect(url: &UrlParts) -> Option<String> {
    if url.hostname().contains("youtube.com") {
        return Some(url.query_param("v").unwrap_or_default());
    }

    if url.hostname() == "youtu.be" {
        return Some(url.segment(1).unwrap_or_default().to_string());
    }

    None
}

pub fn render_embed(id: &str, opts: &EmbedOptions) -> String {
    render_iframe("//www.youtube-nocookie.com/embed/", id, &query_suffix(opts), opts)
}

/// Static thumbnail variants served from `img.youtube.com`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YouTubeImage {
    /// 120x90
    #[default]
    Default,
    /// 320x180
    Medium,
    /// 480x360
    High,
    /// 640x480
    StandardDef,
    /// 1280x720
    MaxRes,
}

impl YouTubeImage {
    /// Map a caller-supplied variant name, falling back to `default`.
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some("mqdefault") => Self::Medium,
            Some("hqdefault") => Self::High,
            Some("sddefault") => Self::StandardDef,
            Some("maxresdefault") => Self::MaxRes,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::StandardDef => "sddefault",
            Self::MaxRes => "maxresdefault",
        }
    }
}

/// Build the thumbnail without any network access.
#[must_use]
pub fn thumbnail(id: &str, image: YouTubeImage) -> Thumbnail {
    Thumbnail::new(format!("{YOUTUBE_IMAGE_BASE}/{id}/{}.jpg", image.as_str()))
}
