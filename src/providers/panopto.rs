use crate::options::{escape_html, EmbedOptions, PanoptoFlag, PlayerFlag};
use crate::url_parts::UrlParts;

use super::render_iframe;

/// Any host ending in `panopto.com` (customers get their own subdomain);
/// the id is the `tid` query parameter.
pub fn detect(url: &UrlParts) -> Option<String> {
    url.hostname()
        .ends_with("panopto.com")
        .then(|| url.query_param("tid").unwrap_or_default())
}

/// Render a player on the same Panopto host as `source_url`.
///
/// `offerviewer=true` is added unless the caller set `offerviewer`.
pub fn render_embed(id: &str, opts: &EmbedOptions, source_url: &str) -> String {
    let hostname = UrlParts::parse(source_url)
        .map(|url| url.hostname().to_string())
        .unwrap_or_default();

    let mut query = opts.clone();
    let offer_viewer = PanoptoFlag::OfferViewer.as_str();
    if !query.query.contains_key(offer_viewer) {
        query.query.insert(offer_viewer.to_string(), "true".to_string());
    }

    let prefix = format!(
        "https://{}/Panopto/Pages/Embed.aspx?tid=",
        escape_html(&hostname)
    );
    render_iframe(&prefix, id, &format!("&{}", query.query_string()), opts)
}
