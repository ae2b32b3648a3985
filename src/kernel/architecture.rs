use std::fmt;
use std::str::FromStr;

use super::ReleaseError;

/// Architectures Ubuntu publishes kernel header packages for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Amd64,
    Arm64,
    Ppc64el,
    S390x,
}

impl Architecture {
    /// Debian name, as it appears in `.deb` filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Amd64 => "amd64",
            Architecture::Arm64 => "arm64",
            Architecture::Ppc64el => "ppc64el",
            Architecture::S390x => "s390x",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Kernel names (`uname -m`) normalise to the Debian ones.
        match s {
            "amd64" | "x86_64" => Ok(Architecture::Amd64),
            "arm64" | "aarch64" => Ok(Architecture::Arm64),
            "ppc64el" | "ppc64le" => Ok(Architecture::Ppc64el),
            "s390x" => Ok(Architecture::S390x),
            other => Err(ReleaseError::UnknownArch(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_aliases_map_to_debian_names() {
        assert_eq!("x86_64".parse::<Architecture>().unwrap(), Architecture::Amd64);
        assert_eq!("aarch64".parse::<Architecture>().unwrap(), Architecture::Arm64);
        assert_eq!(Architecture::Ppc64el.to_string(), "ppc64el");
    }

    #[test]
    fn unknown_arch_is_rejected() {
        let err = "riscv64".parse::<Architecture>().unwrap_err();
        assert!(matches!(err, ReleaseError::UnknownArch(ref a) if a == "riscv64"));
    }
}
