//! Shared constants used across the crate.

/// User agent string sent with thumbnail metadata requests.
pub const DEFAULT_USER_AGENT: &str = concat!("video-embed/", env!("CARGO_PKG_VERSION"));

/// Vimeo simple-API endpoint; `{base}/{id}.json` yields a one-element array.
pub const VIMEO_API_BASE: &str = "https://vimeo.com/api/v2/video";

/// Dailymotion data-API endpoint; `{base}/{id}?fields={field}` yields an object.
pub const DAILYMOTION_API_BASE: &str = "https://api.dailymotion.com/video";

/// Base URL for YouTube's static thumbnail images.
pub const YOUTUBE_IMAGE_BASE: &str = "//img.youtube.com/vi";

/// Trailing attributes shared by every iframe we emit.
pub const IFRAME_TAIL: &str =
    r#" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#;
