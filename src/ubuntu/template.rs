use serde::Serialize;

use crate::kernel::KernelRelease;

use super::extraversion::{ExtraversionError, parse_extraversion};

/// hwe kernels are published as "generic" packages under `linux-hwe`,
/// e.g. `linux-hwe/linux-headers-4.18.0-24-generic_4.18.0-24.25~18.04.1_amd64.deb`.
const HWE_HEADERS_PATTERN: &str = "linux-headers*generic";

/// Substitution variables for the header build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    #[serde(rename = "KernelDownloadURLS")]
    kernel_download_urls: Vec<String>,
    #[serde(rename = "KernelLocalVersion")]
    kernel_local_version: String,
    #[serde(rename = "KernelHeadersPattern")]
    kernel_headers_pattern: String,
}

impl TemplateData {
    pub fn kernel_download_urls(&self) -> &[String] {
        &self.kernel_download_urls
    }

    pub fn kernel_local_version(&self) -> &str {
        &self.kernel_local_version
    }

    pub fn kernel_headers_pattern(&self) -> &str {
        &self.kernel_headers_pattern
    }
}

/// Glob matching the headers directory extracted from the packages.
fn headers_pattern(flavor: &str) -> String {
    if flavor == "hwe" {
        return HWE_HEADERS_PATTERN.to_string();
    }
    // Composite flavors (lowlatency-hwe) extract under their first segment only.
    let first = flavor.split('-').next().unwrap_or(flavor);
    format!("linux-headers*{first}*")
}

pub fn template_data(
    release: &KernelRelease,
    urls: Vec<String>,
) -> Result<TemplateData, ExtraversionError> {
    let parsed = parse_extraversion(release.extraversion())?;

    Ok(TemplateData {
        kernel_download_urls: urls,
        kernel_local_version: release.full_extraversion().to_string(),
        kernel_headers_pattern: headers_pattern(parsed.flavor()),
    })
}
