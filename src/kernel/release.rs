use std::sync::OnceLock;

use regex::Regex;

use super::Architecture;

fn release_regex() -> &'static Regex {
    static RELEASE_RE: OnceLock<Regex> = OnceLock::new();
    RELEASE_RE.get_or_init(|| {
        Regex::new(
            r"^(?P<fullversion>(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)(?:\.(?:0|[1-9]\d*))?)(?P<extra>.*)$",
        )
        .expect("invalid kernel release regex")
    })
}

#[derive(thiserror::Error, Debug)]
pub enum ReleaseError {
    #[error("malformed kernel release '{0}'")]
    Malformed(String),
    #[error("unsupported architecture '{0}'")]
    UnknownArch(String),
}

/// A kernel release as reported by `uname -r`, split into the pieces the
/// package naming conventions need.
///
/// For `5.15.0-188-generic`:
/// - `fullversion`: `5.15.0`
/// - `full_extraversion`: `-188-generic`
/// - `extraversion`: `188-generic`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelRelease {
    major: u32,
    minor: u32,
    fullversion: String,
    extraversion: String,
    full_extraversion: String,
    architecture: Architecture,
}

impl KernelRelease {
    pub fn new(
        major: u32,
        minor: u32,
        fullversion: impl Into<String>,
        extraversion: impl Into<String>,
        full_extraversion: impl Into<String>,
        architecture: Architecture,
    ) -> Self {
        Self {
            major,
            minor,
            fullversion: fullversion.into(),
            extraversion: extraversion.into(),
            full_extraversion: full_extraversion.into(),
            architecture,
        }
    }

    /// Parse an exact `uname -r` string.
    pub fn parse(release: &str, architecture: Architecture) -> Result<Self, ReleaseError> {
        let malformed = || ReleaseError::Malformed(release.to_string());
        let caps = release_regex().captures(release.trim()).ok_or_else(malformed)?;

        let major = caps["major"].parse().map_err(|_| malformed())?;
        let minor = caps["minor"].parse().map_err(|_| malformed())?;
        let full_extraversion = caps["extra"].to_string();
        let extraversion = full_extraversion
            .strip_prefix(['-', '.', '+'])
            .unwrap_or(&full_extraversion)
            .to_string();

        Ok(Self {
            major,
            minor,
            fullversion: caps["fullversion"].to_string(),
            extraversion,
            full_extraversion,
            architecture,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn fullversion(&self) -> &str {
        &self.fullversion
    }

    pub fn extraversion(&self) -> &str {
        &self.extraversion
    }

    pub fn full_extraversion(&self) -> &str {
        &self.full_extraversion
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }
}
