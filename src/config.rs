use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::*;
use serde::Deserialize;

use crate::cloud_metadata::{DEFAULT_METADATA_HOST, GCE_METADATA_HOST_ENV_VAR};
use crate::descriptors::NAMESPACE_PATH;

pub const CONFIG_PATH: &str = "/etc/gcp-resource/config.yaml";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_METADATA_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Inner {
    metadata_host: Option<String>,

    metadata_timeout_ms: Option<u64>,

    namespace_path: Option<PathBuf>,

    log_level: Option<String>,
}

// Environment variables take precedence over the config file.
#[derive(Default)]
pub struct Config {
    inner: Inner,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner: Inner = match std::fs::File::open(path.as_ref()) {
            Ok(file) => serde_yaml::from_reader(file)
                .with_context(|| format!("Invalid config file {}", path.as_ref().display()))?,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    // Don't bail since everything has a default or an env var.
                    // Logging is not set up yet, so print the warning directly.
                    eprintln!(
                        "Could not open config file at {}, {err}",
                        path.as_ref().display()
                    );
                }
                Inner::default()
            }
        };

        Ok(Self { inner })
    }

    pub fn metadata_host(&self) -> String {
        non_empty_var(GCE_METADATA_HOST_ENV_VAR)
            .or_else(|| self.inner.metadata_host.clone())
            .unwrap_or_else(|| DEFAULT_METADATA_HOST.to_string())
    }

    pub fn metadata_timeout(&self) -> Duration {
        non_empty_var("GCP_RESOURCE_METADATA_TIMEOUT_MS")
            .and_then(|ms| match ms.parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(err) => {
                    warn!("Ignoring GCP_RESOURCE_METADATA_TIMEOUT_MS={ms}: {err}");
                    None
                }
            })
            .or(self.inner.metadata_timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_METADATA_TIMEOUT)
    }

    pub fn namespace_path(&self) -> PathBuf {
        non_empty_var("GCP_RESOURCE_NAMESPACE_PATH")
            .map(PathBuf::from)
            .or_else(|| self.inner.namespace_path.clone())
            .unwrap_or_else(|| PathBuf::from(NAMESPACE_PATH))
    }

    pub fn log_level(&self) -> String {
        non_empty_var("GCP_RESOURCE_LOG_LEVEL")
            .or_else(|| self.inner.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
