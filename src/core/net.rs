// src/core/net.rs
//
// Blocking GET for one page. The pipeline only sees the `PageFetcher` trait,
// so tests can serve canned HTML instead of hitting the site.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;

use crate::config::options::ScrapeOptions;
use crate::error::{FetchError, ScrapeError};

pub trait PageFetcher: Sync {
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        let ua = HeaderValue::from_str(&opts.user_agent).map_err(|source| {
            ScrapeError::BadUserAgent { value: opts.user_agent.clone(), source }
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, ua);

        let mut builder = Client::builder().default_headers(headers);
        // reqwest's blocking client defaults to 30s; the site is only ever
        // given a deadline when the user asks for one.
        builder = builder.timeout(opts.timeout_secs.map(Duration::from_secs));

        let client = builder.build().map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!(%url, "GET");
        let wrap = |source| FetchError::Http { url: url.clone(), source };
        self.client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(wrap)
    }
}
