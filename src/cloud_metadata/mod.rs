mod gce;

use anyhow::Result;
use async_trait::async_trait;

pub use gce::{GceMetadataClient, DEFAULT_METADATA_HOST, GCE_METADATA_HOST_ENV_VAR};

pub const PATH_INSTANCE_ID: &str = "id";
pub const PATH_CLUSTER_NAME: &str = "attributes/cluster-name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataResponse {
    pub data: String,
}

// Errors are opaque to callers and must be passed through as-is.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn instance(&self, path: &str) -> Result<MetadataResponse>;
}
