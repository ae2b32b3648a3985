use futures_util::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;

use super::{ResolverError, UrlResolver};
use crate::config::MirrorConfig;

const USER_AGENT: &str = concat!("ubuntu-headers-resolver/", env!("CARGO_PKG_VERSION"));

/// Probes candidates with `HEAD` requests. A 2xx answer means the package
/// exists; any other status means it does not.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: Client,
    concurrency: usize,
}

impl HttpResolver {
    pub fn new(config: &MirrorConfig) -> Result<Self, ResolverError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(ResolverError::Client)?;

        Ok(Self {
            client,
            concurrency: config.concurrency(),
        })
    }

    async fn exists(&self, url: &str) -> Result<bool, ResolverError> {
        let res = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|source| ResolverError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        log::trace!("HEAD {url} -> {status}");
        Ok(status.is_success())
    }
}

#[async_trait::async_trait]
impl UrlResolver for HttpResolver {
    async fn resolve(&self, candidates: &[String]) -> Result<Vec<String>, ResolverError> {
        // `buffered` keeps results in candidate order.
        let found: Vec<bool> = stream::iter(candidates)
            .map(|url| async move { self.exists(url).await })
            .boxed()
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(candidates
            .iter()
            .zip(found)
            .filter_map(|(url, exists)| exists.then(|| url.clone()))
            .collect())
    }
}
