pub mod cloud_metadata;
pub mod config;
pub mod descriptors;
pub mod detector;
pub mod env;
pub mod error;
pub mod fs;
pub mod label;
pub mod resolver;
pub mod resource;

pub use cloud_metadata::{MetadataProvider, MetadataResponse};
pub use descriptors::{
    cloud_function_descriptor, gae_descriptor, gce_descriptor, gke_descriptor, global_descriptor,
    DescriptorBuilder,
};
pub use detector::{Environment, EnvironmentDetector, EnvironmentSignal};
pub use env::{EnvSource, ProcessEnv};
pub use error::ResourceError;
pub use fs::{FileReader, TokioFileReader};
pub use resolver::{Builders, EnvironmentResolver};
pub use resource::{Labels, MonitoredResource, ResourceType};
