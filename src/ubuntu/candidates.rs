use std::collections::HashSet;

use crate::kernel::KernelRelease;

use super::extraversion::{DEFAULT_FLAVOR, ExtraversionError, parse_extraversion};

/// Package filename conventions observed on Ubuntu mirrors over time.
///
/// Two of them must resolve for a given kernel: an `_all.deb` package and
/// an `_{arch}.deb` package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageConvention {
    /// `linux-headers-5.15.0-188-generic_5.15.0-188.198_amd64_all.deb`
    ArchAll,
    /// `linux-headers-5.15.0-188-generic_5.15.0-188.198_amd64.deb`
    FlavoredArch,
    /// `linux-aws-headers-5.15.0-1054_5.15.0-1054.59_all.deb`
    FlavorPrefixedAll,
    /// Same shape as `FlavoredArch`, but keeps the full extraversion as reported.
    ExtraversionArch,
    /// `linux-headers-5.15.0-188_5.15.0-188.198_all.deb`, generic kernels only.
    GenericAll,
}

/// Conventions tried for every flavor.
pub const BASE_CONVENTIONS: &[PackageConvention] = &[
    PackageConvention::ArchAll,
    PackageConvention::FlavoredArch,
    PackageConvention::FlavorPrefixedAll,
    PackageConvention::ExtraversionArch,
];

/// Extra conventions tried only for the `generic` flavor; non-generic
/// packages always carry their flavor in the filename.
pub const GENERIC_CONVENTIONS: &[PackageConvention] = &[PackageConvention::GenericAll];

/// Values substituted into a convention.
struct PackageFields<'a> {
    release: &'a KernelRelease,
    build_number: &'a str,
    flavor: &'a str,
    kernel_version: &'a str,
}

impl PackageConvention {
    pub fn name(&self) -> &'static str {
        match self {
            PackageConvention::ArchAll => "arch-all",
            PackageConvention::FlavoredArch => "flavored-arch",
            PackageConvention::FlavorPrefixedAll => "flavor-prefixed-all",
            PackageConvention::ExtraversionArch => "extraversion-arch",
            PackageConvention::GenericAll => "generic-all",
        }
    }

    fn filename(&self, f: &PackageFields<'_>) -> String {
        let full = f.release.fullversion();
        let extra = f.release.full_extraversion();
        let arch = f.release.architecture();
        let build = f.build_number;
        let kv = f.kernel_version;

        match self {
            PackageConvention::ArchAll => {
                format!("linux-headers-{full}{extra}_{full}-{build}.{kv}_{arch}_all.deb")
            }
            PackageConvention::FlavoredArch => format!(
                "linux-headers-{full}-{build}-{flavor}_{full}-{build}.{kv}_{arch}.deb",
                flavor = f.flavor
            ),
            PackageConvention::FlavorPrefixedAll => format!(
                "linux-{flavor}-headers-{full}-{build}_{full}-{build}.{kv}_all.deb",
                flavor = f.flavor
            ),
            PackageConvention::ExtraversionArch => {
                format!("linux-headers-{full}{extra}_{full}-{build}.{kv}_{arch}.deb")
            }
            PackageConvention::GenericAll => {
                format!("linux-headers-{full}-{build}_{full}-{build}.{kv}_all.deb")
            }
        }
    }
}

/// Conventions that apply to `flavor`, in probing order.
pub fn conventions_for(flavor: &str) -> Vec<PackageConvention> {
    let mut conventions = BASE_CONVENTIONS.to_vec();
    if flavor == DEFAULT_FLAVOR {
        conventions.extend_from_slice(GENERIC_CONVENTIONS);
    }
    conventions
}

/// Subdirectories under a mirror base a flavor's packages may live in.
///
/// e.g. `linux`, `linux-aws`, `linux-azure-5.15`
fn subdirectories(release: &KernelRelease, flavor: &str) -> [String; 3] {
    [
        "linux".to_string(),
        format!("linux-{flavor}"),
        format!("linux-{flavor}-{}.{}", release.major(), release.minor()),
    ]
}

/// Every plausible header package URL for `release` under one mirror base.
///
/// `kernel_version` is the Ubuntu package build tag (the `198` in
/// `5.15.0-188.198`). The result is deduplicated, keeping first occurrences.
pub fn candidate_urls(
    mirror_base: &str,
    release: &KernelRelease,
    kernel_version: &str,
) -> Result<Vec<String>, ExtraversionError> {
    let parsed = parse_extraversion(release.extraversion())?;
    let fields = PackageFields {
        release,
        build_number: parsed.build_number(),
        flavor: parsed.flavor(),
        kernel_version,
    };

    let filenames: Vec<String> = conventions_for(parsed.flavor())
        .iter()
        .map(|convention| {
            let filename = convention.filename(&fields);
            log::trace!("{} -> {filename}", convention.name());
            filename
        })
        .collect();

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for subdir in subdirectories(release, parsed.flavor()) {
        for filename in &filenames {
            let url = format!("{mirror_base}/{subdir}/{filename}");
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }

    Ok(urls)
}
