use std::sync::Arc;

use anyhow::Result;
use log::*;

use crate::cloud_metadata::{GceMetadataClient, MetadataProvider};
use crate::config::Config;
use crate::descriptors::{
    CloudFunctionDescriptor, DescriptorBuilder, GaeDescriptor, GceDescriptor, GkeDescriptor,
    GlobalDescriptor,
};
use crate::detector::{Environment, EnvironmentDetector, EnvironmentSignal};
use crate::env::{EnvSource, ProcessEnv};
use crate::fs::{FileReader, TokioFileReader};
use crate::resource::MonitoredResource;

#[derive(Clone)]
pub struct Builders {
    pub gce: Arc<dyn DescriptorBuilder>,
    pub gke: Arc<dyn DescriptorBuilder>,
    pub gae: Arc<dyn DescriptorBuilder>,
    pub cloud_function: Arc<dyn DescriptorBuilder>,
    pub global: Arc<dyn DescriptorBuilder>,
}

impl Builders {
    pub fn new(
        metadata: Arc<dyn MetadataProvider>,
        files: Arc<dyn FileReader>,
        env: Arc<dyn EnvSource>,
        config: &Config,
    ) -> Self {
        Self {
            gce: Arc::new(GceDescriptor::new(metadata.clone())),
            gke: Arc::new(GkeDescriptor::with_namespace_path(
                metadata,
                files,
                config.namespace_path(),
            )),
            gae: Arc::new(GaeDescriptor::new(env.clone())),
            cloud_function: Arc::new(CloudFunctionDescriptor::new(env)),
            global: Arc::new(GlobalDescriptor),
        }
    }

    fn for_environment(&self, env: Environment) -> &dyn DescriptorBuilder {
        match env {
            Environment::AppEngine => self.gae.as_ref(),
            Environment::CloudFunctions => self.cloud_function.as_ref(),
            Environment::ComputeEngine => self.gce.as_ref(),
            Environment::KubernetesEngine => self.gke.as_ref(),
            Environment::None => self.global.as_ref(),
        }
    }
}

#[derive(Clone)]
pub struct EnvironmentResolver {
    signal: Arc<dyn EnvironmentSignal>,
    builders: Builders,
}

impl EnvironmentResolver {
    pub fn new(signal: Arc<dyn EnvironmentSignal>, builders: Builders) -> Self {
        Self { signal, builders }
    }

    // Wires up the real metadata server, filesystem and process environment.
    pub fn from_config(config: &Config) -> Self {
        let metadata = Arc::new(GceMetadataClient::new(
            &config.metadata_host(),
            config.metadata_timeout(),
        ));
        let env: Arc<dyn EnvSource> = Arc::new(ProcessEnv);

        let signal = EnvironmentDetector::new(env.clone(), metadata.clone(), metadata.clone());
        let builders = Builders::new(metadata, Arc::new(TokioFileReader), env, config);

        Self::new(Arc::new(signal), builders)
    }

    pub async fn environment(&self) -> Result<Environment> {
        let token = self.signal.environment().await?;
        let env = Environment::from(token.as_str());

        if env == Environment::None && token != env.as_str() {
            debug!("Unrecognized environment {token:?}, using the global resource");
        }

        Ok(env)
    }

    // A fresh descriptor on every call; nothing is cached.
    pub async fn default_resource(&self) -> Result<MonitoredResource> {
        let env = self.environment().await?;
        debug!("Resolving monitored resource for {env}");

        self.builders.for_environment(env).build().await
    }
}
