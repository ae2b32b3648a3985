mod http;

pub use http::HttpResolver;

/// Existence check for candidate package URLs.
///
/// Implementations return the candidates that exist, verbatim and in
/// candidate order. "Not there" is an empty result, never an error; errors
/// are reserved for the check itself failing.
#[async_trait::async_trait]
pub trait UrlResolver {
    async fn resolve(&self, candidates: &[String]) -> Result<Vec<String>, ResolverError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ResolverError {
    #[error("probe of '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
