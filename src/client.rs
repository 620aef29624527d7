use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{EmbedError, Result};
use crate::options::ThumbnailOptions;
use crate::providers::{
    dailymotion, resolve, vimeo, youtube, DailymotionImage, Provider, VimeoImage, YouTubeImage,
};
use crate::thumbnail::Thumbnail;

/// Completion handler for [`EmbedClient::image_with_callback`].
pub type Completion = Box<dyn FnOnce(Result<Option<Thumbnail>>) + Send + 'static>;

/// Thumbnail resolver backed by a shared HTTP client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct EmbedClient {
    client: Client,
    config: ClientConfig,
}

impl EmbedClient {
    /// Build a client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Use a caller-owned HTTP client. Its timeout and headers apply as-is;
    /// `config.timeout` and `config.user_agent` are ignored.
    #[must_use]
    pub fn with_http_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the thumbnail for a known provider and id.
    ///
    /// YouTube completes without I/O. Vimeo and Dailymotion make a single
    /// metadata request and never retry.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::ThumbnailUnsupported`] for Loom and Panopto,
    /// and transport or upstream errors from the metadata endpoints.
    pub async fn thumbnail(
        &self,
        provider: Provider,
        id: &str,
        opts: &ThumbnailOptions,
    ) -> Result<Thumbnail> {
        let image = opts.image.as_deref();
        match provider {
            Provider::YouTube => Ok(youtube::thumbnail(id, YouTubeImage::from_option(image))),
            Provider::Vimeo => {
                vimeo::fetch_thumbnail(
                    &self.client,
                    &self.config.vimeo_api_base,
                    id,
                    VimeoImage::from_option(image),
                )
                .await
            }
            Provider::Dailymotion => {
                dailymotion::fetch_thumbnail(
                    &self.client,
                    &self.config.dailymotion_api_base,
                    id,
                    DailymotionImage::from_option(image),
                )
                .await
            }
            Provider::Loom | Provider::Panopto => Err(EmbedError::ThumbnailUnsupported(provider)),
        }
    }

    /// Resolve `url` and look up its thumbnail.
    ///
    /// Returns `Ok(None)` when the URL matches no provider.
    ///
    /// # Errors
    ///
    /// See [`EmbedClient::thumbnail`].
    pub async fn image(&self, url: &str, opts: &ThumbnailOptions) -> Result<Option<Thumbnail>> {
        let Some(res) = resolve(url) else {
            debug!(url = %url, "No video provider for URL");
            return Ok(None);
        };

        self.thumbnail(res.provider, &res.id, opts).await.map(Some)
    }

    /// Callback-style variant of [`EmbedClient::image`].
    ///
    /// Without a callback, only lookups that need no network complete: a
    /// YouTube thumbnail is returned directly and an unmatched URL returns
    /// `Ok(None)`. With a callback, every outcome (errors, and `Ok(None)` for
    /// an unmatched URL) is delivered from a spawned task, never before this
    /// method returns, and the method itself returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Without a callback, fails before any I/O with
    /// [`EmbedError::MissingCallback`] for Vimeo and Dailymotion and
    /// [`EmbedError::ThumbnailUnsupported`] for Loom and Panopto. With a
    /// callback, fails only with [`EmbedError::NoRuntime`] when called
    /// outside a tokio runtime.
    pub fn image_with_callback(
        &self,
        url: &str,
        opts: &ThumbnailOptions,
        callback: Option<Completion>,
    ) -> Result<Option<Thumbnail>> {
        let resolution = resolve(url);

        let Some(callback) = callback else {
            return match resolution {
                None => Ok(None),
                Some(res) if !res.provider.supports_thumbnail() => {
                    Err(EmbedError::ThumbnailUnsupported(res.provider))
                }
                Some(res) if res.provider == Provider::YouTube => Ok(Some(youtube::thumbnail(
                    &res.id,
                    YouTubeImage::from_option(opts.image.as_deref()),
                ))),
                Some(res) => Err(EmbedError::MissingCallback(res.provider)),
            };
        };

        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| EmbedError::NoRuntime)?;
        let client = self.clone();
        let opts = opts.clone();

        handle.spawn(async move {
            let result = match resolution {
                Some(res) => client.thumbnail(res.provider, &res.id, &opts).await.map(Some),
                None => Ok(None),
            };
            callback(result);
        });

        Ok(None)
    }
}
