//! Video embed library.
//!
//! Works out which video host a URL points at (YouTube, Vimeo, Dailymotion,
//! Loom or Panopto), extracts the video id, and renders an iframe player or
//! looks up a thumbnail image.
//!
//! ```
//! use video_embed::{embed, resolve, EmbedOptions, Provider};
//!
//! let res = resolve("https://vimeo.com/76979871").unwrap();
//! assert_eq!(res.provider, Provider::Vimeo);
//! assert_eq!(res.id, "76979871");
//!
//! let html = embed("https://youtu.be/abc123", &EmbedOptions::new()).unwrap();
//! assert!(html.contains("youtube-nocookie.com/embed/abc123"));
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod options;
pub mod providers;
pub mod thumbnail;
pub mod url_parts;

pub use client::{Completion, EmbedClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{EmbedError, Result};
pub use options::{EmbedOptions, LoomFlag, PanoptoFlag, PlayerFlag, ThumbnailOptions};
pub use providers::{
    embed, resolve, DailymotionImage, Provider, Resolution, VimeoImage, YouTubeImage,
};
pub use thumbnail::Thumbnail;
pub use url_parts::UrlParts;
