use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use ubuntu_headers_resolver::{Architecture, HttpResolver, KernelRelease, MirrorConfig, logger, ubuntu};

const MIRRORS_ENV: &str = "UBUNTU_HEADERS_MIRRORS";

#[derive(Parser, Debug)]
#[command(name = "ubuntu-headers")]
#[command(about = "Resolve Ubuntu kernel header package URLs for a kernel release")]
#[command(version)]
struct Cli {
    /// Kernel release exactly as `uname -r` prints it (e.g. 5.15.0-188-generic)
    release: String,

    /// Ubuntu package build tag (the 198 in 5.15.0-188.198)
    kernel_version: String,

    /// Target architecture (amd64, arm64, ppc64el, s390x; x86_64/aarch64 accepted)
    #[arg(short, long, default_value = "amd64")]
    arch: Architecture,

    /// JSON file overriding mirrors and probe settings
    #[arg(long, env = "UBUNTU_HEADERS_MIRRORS_FILE")]
    mirrors_file: Option<PathBuf>,
}

/// Mirrors from a JSON file, inline JSON, or the built-in defaults.
fn load_config(mirrors_file: Option<&PathBuf>) -> Result<MirrorConfig> {
    if let Some(path) = mirrors_file {
        return MirrorConfig::from_file(path).with_context(|| format!("load mirrors from {}", path.display()));
    }
    if std::env::var_os(MIRRORS_ENV).is_some() {
        return MirrorConfig::from_env(MIRRORS_ENV).with_context(|| format!("load mirrors from ${MIRRORS_ENV}"));
    }
    Ok(MirrorConfig::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logger::init() {
        eprintln!("logger already installed: {err}");
    }

    let release = KernelRelease::parse(&cli.release, cli.arch)?;
    let config = load_config(cli.mirrors_file.as_ref())?;
    let resolver = HttpResolver::new(&config)?;

    let data = ubuntu::resolve(&resolver, &config, &release, &cli.kernel_version)
        .await
        .with_context(|| format!("resolve headers for {} ({})", cli.release, cli.arch))?;

    println!("{}", serde_json::to_string_pretty(&data)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_defaults_to_amd64() {
        let cli = Cli::try_parse_from(["ubuntu-headers", "5.15.0-188-generic", "198"]).unwrap();
        assert_eq!(cli.release, "5.15.0-188-generic");
        assert_eq!(cli.kernel_version, "198");
        assert_eq!(cli.arch, Architecture::Amd64);
    }

    #[test]
    fn arch_flag_accepts_kernel_aliases() {
        let cli =
            Cli::try_parse_from(["ubuntu-headers", "5.15.0-188-generic", "198", "--arch", "aarch64"]).unwrap();
        assert_eq!(cli.arch, Architecture::Arm64);

        let cli = Cli::try_parse_from(["ubuntu-headers", "-a", "s390x", "5.15.0-188-generic", "198"]).unwrap();
        assert_eq!(cli.arch, Architecture::S390x);
    }

    #[test]
    fn bad_arguments_are_usage_errors() {
        assert!(Cli::try_parse_from(["ubuntu-headers", "5.15.0-188-generic"]).is_err());
        assert!(Cli::try_parse_from(["ubuntu-headers", "5.15.0-188-generic", "198", "--arch", "riscv64"]).is_err());

        let help = Cli::try_parse_from(["ubuntu-headers", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn mirrors_file_flag_is_optional() {
        let cli = Cli::try_parse_from([
            "ubuntu-headers",
            "5.15.0-188-generic",
            "198",
            "--mirrors-file",
            "/etc/ubuntu-headers/mirrors.json",
        ])
        .unwrap();
        assert_eq!(cli.mirrors_file, Some(PathBuf::from("/etc/ubuntu-headers/mirrors.json")));
    }
}
