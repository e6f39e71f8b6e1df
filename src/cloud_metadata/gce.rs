use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{Body, Client, Method, Request, Response, StatusCode};
use log::*;

use super::{MetadataProvider, MetadataResponse};
use crate::error::ResourceError;

pub const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";
pub const GCE_METADATA_HOST_ENV_VAR: &str = "GCE_METADATA_HOST";

const METADATA_FLAVOR: &str = "Metadata-Flavor";
const METADATA_FLAVOR_VALUE: &str = "Google";
const INSTANCE_ROOT: &str = "/computeMetadata/v1/instance";

pub struct GceMetadataClient {
    host: String,
    timeout: Duration,
    client: Client<HttpConnector>,
}

impl GceMetadataClient {
    pub fn new(host: &str, timeout: Duration) -> Self {
        Self {
            host: host.to_string(),
            timeout,
            client: Client::new(),
        }
    }

    // Succeeds only if something answering as the Google metadata
    // server is reachable.
    pub async fn is_available(&self) -> Result<()> {
        let resp = self.get(INSTANCE_ROOT).await?;

        let flavor = resp
            .headers()
            .get(METADATA_FLAVOR)
            .and_then(|v| v.to_str().ok());

        match flavor {
            Some(METADATA_FLAVOR_VALUE) => Ok(()),
            _ => Err(ResourceError::MissingFlavor {
                host: self.host.clone(),
            }
            .into()),
        }
    }

    async fn get(&self, path: &str) -> Result<Response<Body>> {
        let url = format!("http://{}{path}", self.host);
        let req = Request::builder()
            .method(Method::GET)
            .header(METADATA_FLAVOR, METADATA_FLAVOR_VALUE)
            .uri(url)
            .body(Body::empty())?;

        match tokio::time::timeout(self.timeout, self.client.request(req)).await {
            Ok(resp) => Ok(resp?),
            Err(_) => Err(ResourceError::MetadataTimeout {
                path: path.to_string(),
                timeout: self.timeout,
            }
            .into()),
        }
    }
}

#[async_trait]
impl MetadataProvider for GceMetadataClient {
    async fn instance(&self, path: &str) -> Result<MetadataResponse> {
        let path = format!("{INSTANCE_ROOT}/{}", path.trim_start_matches('/'));
        let resp = self.get(&path).await?;

        match resp.status() {
            StatusCode::OK => {
                let bytes = hyper::body::to_bytes(resp.into_body()).await?;
                let data = String::from_utf8_lossy(&bytes).into_owned();
                debug!("Loaded metadata {path}: {data}");

                Ok(MetadataResponse { data })
            }
            code => Err(ResourceError::MetadataStatus { path, code }.into()),
        }
    }
}
