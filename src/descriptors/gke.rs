use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::DescriptorBuilder;
use crate::cloud_metadata::{MetadataProvider, PATH_CLUSTER_NAME};
use crate::error::ResourceError;
use crate::fs::FileReader;
use crate::label::*;
use crate::resource::{MonitoredResource, ResourceType};

// The namespace is not exposed by the metadata server, only through
// the service account mount.
pub const NAMESPACE_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/namespace";

// The two lookups are sequential: the namespace file is only read once
// the cluster name has been fetched, and at most one error comes back.
pub async fn gke_descriptor(
    metadata: &dyn MetadataProvider,
    files: &dyn FileReader,
    namespace_path: &Path,
) -> Result<MonitoredResource> {
    let cluster = metadata.instance(PATH_CLUSTER_NAME).await?;

    let namespace = files
        .read_to_string(namespace_path)
        .await
        .map_err(|err| ResourceError::NamespaceRead {
            path: namespace_path.to_path_buf(),
            message: err.to_string(),
            source: err.into(),
        })?;

    Ok(MonitoredResource::new(
        ResourceType::Container,
        [
            (LABEL_CLUSTER_NAME, Some(cluster.data)),
            (LABEL_NAMESPACE_ID, Some(namespace)),
        ],
    ))
}

pub struct GkeDescriptor {
    metadata: Arc<dyn MetadataProvider>,
    files: Arc<dyn FileReader>,
    namespace_path: PathBuf,
}

impl GkeDescriptor {
    pub fn new(metadata: Arc<dyn MetadataProvider>, files: Arc<dyn FileReader>) -> Self {
        Self::with_namespace_path(metadata, files, NAMESPACE_PATH)
    }

    pub fn with_namespace_path<P: Into<PathBuf>>(
        metadata: Arc<dyn MetadataProvider>,
        files: Arc<dyn FileReader>,
        namespace_path: P,
    ) -> Self {
        Self {
            metadata,
            files,
            namespace_path: namespace_path.into(),
        }
    }
}

#[async_trait]
impl DescriptorBuilder for GkeDescriptor {
    async fn build(&self) -> Result<MonitoredResource> {
        gke_descriptor(
            self.metadata.as_ref(),
            self.files.as_ref(),
            &self.namespace_path,
        )
        .await
    }
}
