use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::DescriptorBuilder;
use crate::cloud_metadata::{MetadataProvider, PATH_INSTANCE_ID};
use crate::label::*;
use crate::resource::{MonitoredResource, ResourceType};

// Metadata errors are returned untouched.
pub async fn gce_descriptor(metadata: &dyn MetadataProvider) -> Result<MonitoredResource> {
    let resp = metadata.instance(PATH_INSTANCE_ID).await?;

    Ok(MonitoredResource::new(
        ResourceType::GceInstance,
        [(LABEL_INSTANCE_ID, Some(resp.data))],
    ))
}

pub struct GceDescriptor {
    metadata: Arc<dyn MetadataProvider>,
}

impl GceDescriptor {
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self { metadata }
    }
}

#[async_trait]
impl DescriptorBuilder for GceDescriptor {
    async fn build(&self) -> Result<MonitoredResource> {
        gce_descriptor(self.metadata.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use super::*;
    use crate::descriptors::testing::{FakeError, FakeMetadata};

    #[tokio::test]
    async fn test_gce() {
        let metadata = FakeMetadata::with(&[("id", "fake-instance-id")]);

        let res = gce_descriptor(&metadata).await.unwrap();

        assert!(
            res == MonitoredResource::new(
                ResourceType::GceInstance,
                [("instance_id", Some("fake-instance-id".to_string()))],
            )
        );
        assert!(metadata.requests() == vec!["id".to_string()]);
    }

    #[tokio::test]
    async fn test_gce_metadata_error() {
        let metadata = FakeMetadata::failing("fake error");

        let err = gce_descriptor(&metadata).await.unwrap_err();

        let fake = err.downcast_ref::<FakeError>().unwrap();
        assert!(fake.0 == "fake error");
        assert!(err.to_string() == "fake error");
    }

    #[tokio::test]
    async fn test_builder_is_repeatable() {
        let builder = GceDescriptor::new(Arc::new(FakeMetadata::with(&[("id", "1234")])));

        let first = builder.build().await.unwrap();
        let second = builder.build().await.unwrap();

        assert!(first == second);
    }
}
