//! Integration tests for provider detection and embed rendering.

use video_embed::{embed, resolve, EmbedOptions, PanoptoFlag, Provider};

fn assert_resolves(url: &str, provider: Provider, id: &str) {
    let res = resolve(url).unwrap_or_else(|| panic!("expected {url} to resolve"));
    assert_eq!(res.provider, provider, "provider for {url}");
    assert_eq!(res.id, id, "id for {url}");
}

#[test]
fn test_resolve_documented_urls() {
    assert_resolves("https://vimeo.com/76979871", Provider::Vimeo, "76979871");
    assert_resolves(
        "https://www.youtube.com/watch?v=abc123",
        Provider::YouTube,
        "abc123",
    );
    assert_resolves("https://youtu.be/abc123", Provider::YouTube, "abc123");
    assert_resolves(
        "https://www.dailymotion.com/video/x2jvvep_title",
        Provider::Dailymotion,
        "x2jvvep",
    );
}

#[test]
fn test_resolve_all_url_shapes() {
    let cases = [
        ("https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42", Provider::YouTube, "dQw4w9WgXcQ"),
        ("http://youtu.be/dQw4w9WgXcQ", Provider::YouTube, "dQw4w9WgXcQ"),
        ("https://vimeo.com/video/76979871", Provider::Vimeo, "76979871"),
        ("https://vimeo.com/channels/staffpicks/76979871", Provider::Vimeo, "76979871"),
        ("https://vimeo.com/groups/shortfilms/videos/76979871", Provider::Vimeo, "76979871"),
        ("https://dai.ly/x2jvvep", Provider::Dailymotion, "x2jvvep"),
        ("https://www.loom.com/share/abcdef123", Provider::Loom, "abcdef123"),
        (
            "https://uni.hosted.panopto.com/Panopto/Pages/Viewer.aspx?tid=f00d",
            Provider::Panopto,
            "f00d",
        ),
    ];

    for (url, provider, id) in cases {
        assert_resolves(url, provider, id);
    }
}

#[test]
fn test_resolve_host_match_without_id() {
    assert_resolves("https://www.youtube.com/feed/trending", Provider::YouTube, "");
    assert_resolves(
        "https://uni.hosted.panopto.com/Panopto/Pages/Home.aspx",
        Provider::Panopto,
        "",
    );
}

#[test]
fn test_resolve_unsupported_urls() {
    for url in [
        "https://example.com/video/1",
        "https://www.vimeo.com/76979871",
        "https://vimeo.com/about",
        "ftp://",
        "not a url",
        "",
    ] {
        assert!(resolve(url).is_none(), "{url} should not resolve");
    }
}

#[test]
fn test_vimeo_embed() {
    let html = embed("https://vimeo.com/76979871", &EmbedOptions::new()).unwrap();
    assert!(html.contains("player.vimeo.com/video/76979871"));
    assert!(html.ends_with("allowfullscreen></iframe>"));
}

#[test]
fn test_embed_snapshots() {
    let opts = EmbedOptions::new()
        .with_query("autoplay", "1")
        .with_attr("class", "player");

    insta::assert_snapshot!(
        embed("https://www.youtube.com/watch?v=abc123", &opts).unwrap(),
        @r#"<iframe src="//www.youtube-nocookie.com/embed/abc123?autoplay=1" class="player" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
    );
    insta::assert_snapshot!(
        embed("https://dai.ly/x2jvvep", &opts).unwrap(),
        @r#"<iframe src="//www.dailymotion.com/embed/video/x2jvvep?autoplay=1" class="player" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
    );
    insta::assert_snapshot!(
        embed("https://www.loom.com/share/abc", &opts).unwrap(),
        @r#"<iframe src="https://www.loom.com/embed/abc?autoplay=1" class="player" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
    );
    insta::assert_snapshot!(
        embed("https://uni.hosted.panopto.com/Panopto/Pages/Viewer.aspx?tid=f00d", &opts).unwrap(),
        @r#"<iframe src="https://uni.hosted.panopto.com/Panopto/Pages/Embed.aspx?tid=f00d&autoplay=1&offerviewer=true" class="player" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
    );
}

#[test]
fn test_panopto_offerviewer_default_and_override() {
    let url = "https://uni.hosted.panopto.com/Panopto/Pages/Viewer.aspx?tid=f00d";

    let html = embed(url, &EmbedOptions::new()).unwrap();
    assert!(html.contains("offerviewer=true"));

    let opts = EmbedOptions::new().with_flag(PanoptoFlag::OfferViewer, false);
    let html = embed(url, &opts).unwrap();
    assert!(html.contains("offerviewer=false"));
    assert!(!html.contains("offerviewer=true"));
}

#[test]
fn test_attr_values_cannot_break_out() {
    let opts = EmbedOptions::new().with_attr("title", r#"x" onload="alert(1)"#);
    let html = embed("https://vimeo.com/76979871", &opts).unwrap();
    assert!(html.contains(r#"title="x&quot; onload=&quot;alert(1)""#));
    assert!(!html.contains(r#"" onload=""#));

    let opts = EmbedOptions::new().with_attr("title", "</iframe><script>");
    let html = embed("https://vimeo.com/76979871", &opts).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;/iframe&gt;&lt;script&gt;"));
}

#[test]
fn test_resolution_round_trips_through_json() {
    let res = resolve("https://youtu.be/abc123").unwrap();
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["provider"], "youtube");
    assert_eq!(json["id"], "abc123");
    assert_eq!(json["normalizedUrl"], "https://youtu.be/abc123");
}

#[test]
fn test_decoded_ids_cannot_break_out_of_src() {
    let html = embed(
        "https://www.youtube.com/watch?v=%22%3E%3Cscript%3Ealert(1)%3C/script%3E",
        &EmbedOptions::new(),
    )
    .unwrap();
    assert_eq!(
        html,
        r#"<iframe src="//www.youtube-nocookie.com/embed/&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
    );

    let html = embed(
        "https://uni.hosted.panopto.com/Panopto/Pages/Viewer.aspx?tid=%22%20onload%3D%22alert(1)",
        &EmbedOptions::new(),
    )
    .unwrap();
    assert!(html.contains(r#"Embed.aspx?tid=&quot; onload=&quot;alert(1)&offerviewer=true""#));
    assert!(!html.contains(r#"" onload=""#));
}
