use crate::options::EmbedOptions;
use crate::url_parts::UrlParts;

use super::{query_suffix, render_iframe};

/// Any `loom.com` host; the id is the second path segment, as in
/// `/share/<id>` or `/embed/<id>`.
pub fn detect(url: &UrlParts) -> Option<String> {
    url.hostname()
        .contains("loom.com")
        .then(|| url.segment(2).unwrap_or_default().to_string())
}

pub fn render_embed(id: &str, opts: &EmbedOptions) -> String {
    render_iframe("https://www.loom.com/embed/", id, &query_suffix(opts), opts)
}
