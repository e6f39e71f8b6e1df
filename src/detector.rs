use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::*;

use crate::cloud_metadata::{GceMetadataClient, MetadataProvider, PATH_CLUSTER_NAME};
use crate::env::{self, EnvSource};

pub const APP_ENGINE: &str = "APP_ENGINE";
pub const CLOUD_FUNCTIONS: &str = "CLOUD_FUNCTIONS";
pub const COMPUTE_ENGINE: &str = "COMPUTE_ENGINE";
pub const KUBERNETES_ENGINE: &str = "KUBERNETES_ENGINE";
pub const NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    AppEngine,
    CloudFunctions,
    ComputeEngine,
    KubernetesEngine,
    None,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::AppEngine => APP_ENGINE,
            Environment::CloudFunctions => CLOUD_FUNCTIONS,
            Environment::ComputeEngine => COMPUTE_ENGINE,
            Environment::KubernetesEngine => KUBERNETES_ENGINE,
            Environment::None => NONE,
        }
    }
}

// Total: tokens this crate does not know about are treated like NONE.
impl From<&str> for Environment {
    fn from(token: &str) -> Self {
        match token {
            APP_ENGINE => Environment::AppEngine,
            CLOUD_FUNCTIONS => Environment::CloudFunctions,
            COMPUTE_ENGINE => Environment::ComputeEngine,
            KUBERNETES_ENGINE => Environment::KubernetesEngine,
            _ => Environment::None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reports which Google Cloud runtime the process belongs to, as a token
/// such as `COMPUTE_ENGINE` or `NONE`.
#[async_trait]
pub trait EnvironmentSignal: Send + Sync {
    async fn environment(&self) -> Result<String>;
}

#[async_trait]
pub trait MetadataProbe: Send + Sync {
    async fn is_available(&self) -> Result<()>;
}

#[async_trait]
impl MetadataProbe for GceMetadataClient {
    async fn is_available(&self) -> Result<()> {
        GceMetadataClient::is_available(self).await
    }
}

pub struct EnvironmentDetector {
    env: Arc<dyn EnvSource>,
    probe: Arc<dyn MetadataProbe>,
    metadata: Arc<dyn MetadataProvider>,
}

impl EnvironmentDetector {
    pub fn new(
        env: Arc<dyn EnvSource>,
        probe: Arc<dyn MetadataProbe>,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            env,
            probe,
            metadata,
        }
    }

    pub async fn detect(&self) -> Environment {
        if self.is_set(env::GAE_SERVICE) || self.is_set(env::GAE_MODULE_NAME) {
            return Environment::AppEngine;
        }

        if self.is_set(env::FUNCTION_NAME) || self.is_set(env::FUNCTION_TARGET) {
            return Environment::CloudFunctions;
        }

        if let Err(err) = self.probe.is_available().await {
            debug!("Metadata server not available: {err}");
            return Environment::None;
        }

        // Only GKE nodes carry the cluster-name attribute; a self-managed
        // cluster on plain VMs is still Compute Engine.
        match self.metadata.instance(PATH_CLUSTER_NAME).await {
            Ok(_) => Environment::KubernetesEngine,
            Err(err) => {
                debug!("No GKE cluster name: {err}");
                Environment::ComputeEngine
            }
        }
    }

    // Empty counts as unset, matching the descriptor builders.
    fn is_set(&self, name: &str) -> bool {
        self.env.var(name).is_some_and(|v| !v.is_empty())
    }
}

#[async_trait]
impl EnvironmentSignal for EnvironmentDetector {
    async fn environment(&self) -> Result<String> {
        Ok(self.detect().await.as_str().to_string())
    }
}
