use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ubuntu::mirrors::{DEFAULT_AMD64_MIRRORS, DEFAULT_PORTS_MIRRORS};

const DEFAULT_CONCURRENCY: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_amd64() -> Vec<String> {
    DEFAULT_AMD64_MIRRORS.iter().map(|s| s.to_string()).collect()
}

fn default_ports() -> Vec<String> {
    DEFAULT_PORTS_MIRRORS.iter().map(|s| s.to_string()).collect()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Mirror bases and probe settings. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Bases tried, in order, for amd64 kernels.
    #[serde(default = "default_amd64")]
    pub(crate) amd64: Vec<String>,
    /// Bases tried, in order, for every other architecture.
    #[serde(default = "default_ports")]
    pub(crate) ports: Vec<String>,
    /// Max in-flight existence probes.
    #[serde(default = "default_concurrency")]
    pub(crate) concurrency: usize,
    #[serde(default = "default_timeout_secs")]
    pub(crate) timeout_secs: u64,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            amd64: default_amd64(),
            ports: default_ports(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MirrorConfig {
    pub fn amd64(&self) -> &[String] {
        &self.amd64
    }

    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
