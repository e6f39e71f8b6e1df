use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::DescriptorBuilder;
use crate::env::{EnvSource, FUNCTION_NAME, FUNCTION_REGION};
use crate::label::*;
use crate::resource::{MonitoredResource, ResourceType};

// Values are passed through as found, unset ones included.
pub fn cloud_function_descriptor(env: &dyn EnvSource) -> MonitoredResource {
    MonitoredResource::new(
        ResourceType::CloudFunction,
        [
            (LABEL_FUNCTION_NAME, env.var(FUNCTION_NAME)),
            (LABEL_REGION, env.var(FUNCTION_REGION)),
        ],
    )
}

pub struct CloudFunctionDescriptor {
    env: Arc<dyn EnvSource>,
}

impl CloudFunctionDescriptor {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }
}

#[async_trait]
impl DescriptorBuilder for CloudFunctionDescriptor {
    async fn build(&self) -> Result<MonitoredResource> {
        Ok(cloud_function_descriptor(self.env.as_ref()))
    }
}
