use url::Url;

/// The pieces of a URL that provider detection looks at.
///
/// Built once per input string and thrown away after resolution.
#[derive(Debug, Clone)]
pub struct UrlParts {
    url: Url,
    hostname: String,
}

impl UrlParts {
    /// Parse an absolute URL. Returns `None` if the string is not a URL or
    /// has no host (`mailto:`, `data:` and friends).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let url = Url::parse(input.trim()).ok()?;
        let hostname = url.host_str()?.to_lowercase();
        Some(Self { url, hostname })
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Path segment `n` when the path is split on `/`.
    ///
    /// Index 0 is the empty string in front of the leading slash, so the
    /// first real segment of `/a/b` is `segment(1)`.
    #[must_use]
    pub fn segment(&self, n: usize) -> Option<&str> {
        self.url.path().split('/').nth(n)
    }

    /// First decoded value of query parameter `name`.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Serialized form of the parsed URL.
    #[must_use]
    pub fn href(&self) -> &str {
        self.url.as_str()
    }
}
