mod cloud_function;
mod gae;
mod gce;
mod gke;
mod global;

use anyhow::Result;
use async_trait::async_trait;

use crate::resource::MonitoredResource;

pub use cloud_function::{cloud_function_descriptor, CloudFunctionDescriptor};
pub use gae::{gae_descriptor, GaeDescriptor};
pub use gce::{gce_descriptor, GceDescriptor};
pub use gke::{gke_descriptor, GkeDescriptor, NAMESPACE_PATH};
pub use global::{global_descriptor, GlobalDescriptor};

// One implementation per environment kind; the resolver picks which
// one to run.
#[async_trait]
pub trait DescriptorBuilder: Send + Sync {
    async fn build(&self) -> Result<MonitoredResource>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::cloud_metadata::{MetadataProvider, MetadataResponse};
    use crate::fs::FileReader;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    pub struct FakeError(pub String);

    // Serves fixed data for known paths and records every request.
    #[derive(Default)]
    pub struct FakeMetadata {
        pub values: Vec<(&'static str, &'static str)>,
        pub fail_with: Option<&'static str>,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeMetadata {
        pub fn with(values: &[(&'static str, &'static str)]) -> Self {
            Self {
                values: values.to_vec(),
                ..Default::default()
            }
        }

        pub fn failing(message: &'static str) -> Self {
            Self {
                fail_with: Some(message),
                ..Default::default()
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MetadataProvider for FakeMetadata {
        async fn instance(&self, path: &str) -> Result<MetadataResponse> {
            self.requests.lock().unwrap().push(path.to_string());

            if let Some(message) = self.fail_with {
                return Err(FakeError(message.to_string()).into());
            }

            self.values
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(_, data)| MetadataResponse {
                    data: data.to_string(),
                })
                .ok_or_else(|| anyhow!("no metadata at {path}"))
        }
    }

    #[derive(Default)]
    pub struct FakeFiles {
        pub contents: Option<&'static str>,
        pub fail_with: Option<&'static str>,
        pub reads: Mutex<Vec<PathBuf>>,
    }

    impl FakeFiles {
        pub fn with(contents: &'static str) -> Self {
            Self {
                contents: Some(contents),
                ..Default::default()
            }
        }

        pub fn failing(message: &'static str) -> Self {
            Self {
                fail_with: Some(message),
                ..Default::default()
            }
        }

        pub fn reads(&self) -> Vec<PathBuf> {
            self.reads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FileReader for FakeFiles {
        async fn read_to_string(&self, path: &Path) -> Result<String> {
            self.reads.lock().unwrap().push(path.to_path_buf());

            match (self.fail_with, self.contents) {
                (Some(message), _) => Err(FakeError(message.to_string()).into()),
                (None, Some(contents)) => Ok(contents.to_string()),
                (None, None) => Err(anyhow!("no such file: {}", path.display())),
            }
        }
    }
}
