pub mod candidates;
pub mod extraversion;
pub mod mirrors;
pub mod template;

pub use candidates::{PackageConvention, candidate_urls};
pub use extraversion::{ExtraversionError, ParsedExtraversion, parse_extraversion};
pub use mirrors::bases_for;
pub use template::{TemplateData, template_data};

use crate::config::MirrorConfig;
use crate::kernel::KernelRelease;
use crate::resolver::{ResolverError, UrlResolver};

/// Both a common `_all.deb` package and an `_{arch}.deb` package must exist.
pub const REQUIRED_URLS: usize = 2;

#[derive(thiserror::Error, Debug)]
pub enum HeadersError {
    #[error(transparent)]
    Extraversion(#[from] ExtraversionError),
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    #[error("kernel headers not found")]
    NotFound,
}

/// Find the header package URLs for `release` on the first mirror base
/// that has exactly [`REQUIRED_URLS`] of them.
///
/// `kernel_version` is the Ubuntu package build tag embedded in filenames.
/// Resolver failures abort immediately; a base with the wrong number of
/// packages just moves on to the next one.
pub async fn headers_urls<R>(
    resolver: &R,
    config: &MirrorConfig,
    release: &KernelRelease,
    kernel_version: &str,
) -> Result<Vec<String>, HeadersError>
where
    R: UrlResolver + ?Sized,
{
    for base in bases_for(config, release.architecture()) {
        let candidates = candidate_urls(base, release, kernel_version)?;
        log::debug!("probing {} candidates under {base}", candidates.len());

        let urls = resolver.resolve(&candidates).await?;
        if urls.len() == REQUIRED_URLS {
            log::debug!("found header packages under {base}");
            return Ok(urls);
        }
        log::debug!("{} of {REQUIRED_URLS} packages under {base}, moving on", urls.len());
    }

    Err(HeadersError::NotFound)
}

/// Resolve the packages and assemble the build-script variables.
pub async fn resolve<R>(
    resolver: &R,
    config: &MirrorConfig,
    release: &KernelRelease,
    kernel_version: &str,
) -> Result<TemplateData, HeadersError>
where
    R: UrlResolver + ?Sized,
{
    let urls = headers_urls(resolver, config, release, kernel_version).await?;
    Ok(template_data(release, urls)?)
}
