use std::path::PathBuf;
use std::time::Duration;

use hyper::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Error reading {}: {message}", .path.display())]
    NamespaceRead {
        path: PathBuf,
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Non-200 response from metadata server for {path}: {code}")]
    MetadataStatus { path: String, code: StatusCode },

    #[error("Metadata request for {path} timed out after {timeout:?}")]
    MetadataTimeout { path: String, timeout: Duration },

    #[error("Response from {host} is missing the Metadata-Flavor header")]
    MissingFlavor { host: String },
}
