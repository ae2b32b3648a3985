//! Resolve the Ubuntu kernel header packages for a kernel release.
//!
//! Ubuntu mirrors only expose convention-named directory trees, so the
//! package URLs are built from every known naming convention and probed for
//! existence through a [`resolver::UrlResolver`].

pub mod config;
pub mod kernel;
pub mod logger;
pub mod resolver;
pub mod ubuntu;

pub use config::{ConfigError, MirrorConfig};
pub use kernel::{Architecture, KernelRelease, ReleaseError};
pub use resolver::{HttpResolver, ResolverError, UrlResolver};
pub use ubuntu::{HeadersError, TemplateData};
