use anyhow::Result;
use async_trait::async_trait;

use super::DescriptorBuilder;
use crate::resource::{Labels, MonitoredResource, ResourceType};

pub fn global_descriptor() -> MonitoredResource {
    MonitoredResource {
        resource_type: ResourceType::Global,
        labels: Labels::new(),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalDescriptor;

#[async_trait]
impl DescriptorBuilder for GlobalDescriptor {
    async fn build(&self) -> Result<MonitoredResource> {
        Ok(global_descriptor())
    }
}
