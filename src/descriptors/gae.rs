use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::DescriptorBuilder;
use crate::env::{EnvSource, GAE_MODULE_NAME, GAE_SERVICE, GAE_VERSION};
use crate::label::*;
use crate::resource::{MonitoredResource, ResourceType};

// App Engine renamed modules to services; GAE_SERVICE is preferred
// and GAE_MODULE_NAME is only used when it is unset or empty.
pub fn gae_descriptor(env: &dyn EnvSource) -> MonitoredResource {
    let module_id = env
        .var(GAE_SERVICE)
        .filter(|s| !s.is_empty())
        .or_else(|| env.var(GAE_MODULE_NAME));

    MonitoredResource::new(
        ResourceType::GaeApp,
        [
            (LABEL_MODULE_ID, module_id),
            (LABEL_VERSION_ID, env.var(GAE_VERSION)),
        ],
    )
}

pub struct GaeDescriptor {
    env: Arc<dyn EnvSource>,
}

impl GaeDescriptor {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }
}

#[async_trait]
impl DescriptorBuilder for GaeDescriptor {
    async fn build(&self) -> Result<MonitoredResource> {
        Ok(gae_descriptor(self.env.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::assert;

    use super::*;

    fn env(vars: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        vars.iter().copied().collect()
    }

    #[test]
    fn test_service() {
        let res = gae_descriptor(&env(&[
            (GAE_SERVICE, "gae-service"),
            (GAE_MODULE_NAME, "gae-module-name"),
            (GAE_VERSION, "gae-version"),
        ]));

        assert!(res.resource_type == ResourceType::GaeApp);
        assert!(res.label(LABEL_MODULE_ID) == Some("gae-service"));
        assert!(res.label(LABEL_VERSION_ID) == Some("gae-version"));
        assert!(res.labels.len() == 2);
    }

    #[test]
    fn test_module_name_fallback() {
        let res = gae_descriptor(&env(&[
            (GAE_MODULE_NAME, "gae-module-name"),
            (GAE_VERSION, "gae-version"),
        ]));
        assert!(res.label(LABEL_MODULE_ID) == Some("gae-module-name"));

        let res = gae_descriptor(&env(&[
            (GAE_SERVICE, ""),
            (GAE_MODULE_NAME, "gae-module-name"),
        ]));
        assert!(res.label(LABEL_MODULE_ID) == Some("gae-module-name"));
        assert!(res.labels.get(LABEL_VERSION_ID) == Some(&None));
    }

    #[test]
    fn test_nothing_set() {
        let res = gae_descriptor(&env(&[]));

        assert!(res.labels.len() == 2);
        assert!(res.labels.get(LABEL_MODULE_ID) == Some(&None));
    }
}
