use maud::{Markup, PreEscaped, Render};
use serde::{Deserialize, Serialize};

/// A resolved thumbnail image and its ready-made `<img>` markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub src: String,
    pub html: String,
}

impl Thumbnail {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        let html = format!(r#"<img src="{src}"/>"#);
        Self { src, html }
    }
}

impl Render for Thumbnail {
    fn render(&self) -> Markup {
        PreEscaped(self.html.clone())
    }
}
