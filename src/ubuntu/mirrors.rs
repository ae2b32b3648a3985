use crate::config::MirrorConfig;
use crate::kernel::Architecture;

/// amd64 packages: the kernel.org mirror first, then the security pocket,
/// which carries some header packages the general mirror never gets.
pub const DEFAULT_AMD64_MIRRORS: &[&str] = &[
    "https://mirrors.edge.kernel.org/ubuntu/pool/main/l",
    "http://security.ubuntu.com/ubuntu/pool/main/l",
];

/// arm64 and the rest live on ports.ubuntu.com. The amd64 mirrors would
/// still answer for these packages, so they must not be tried here.
pub const DEFAULT_PORTS_MIRRORS: &[&str] = &["http://ports.ubuntu.com/ubuntu-ports/pool/main/l"];

/// Mirror bases to try for `arch`, in order. The first base that yields a
/// complete set of packages wins.
pub fn bases_for(config: &MirrorConfig, arch: Architecture) -> &[String] {
    match arch {
        Architecture::Amd64 => config.amd64(),
        Architecture::Arm64 | Architecture::Ppc64el | Architecture::S390x => config.ports(),
    }
}
