use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// Unset environment values are kept as None so that every
// prescribed key is present for its resource type.
pub type Labels = BTreeMap<String, Option<String>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    GceInstance,
    Container,
    GaeApp,
    CloudFunction,
    Global,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::GceInstance => "gce_instance",
            ResourceType::Container => "container",
            ResourceType::GaeApp => "gae_app",
            ResourceType::CloudFunction => "cloud_function",
            ResourceType::Global => "global",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the environment a process runs in, for tagging telemetry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonitoredResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub labels: Labels,
}

impl MonitoredResource {
    pub fn new<I, K>(resource_type: ResourceType, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        Self {
            resource_type,
            labels: labels.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).and_then(|v| v.as_deref())
    }
}
