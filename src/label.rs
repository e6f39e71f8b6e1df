// gce_instance
pub const LABEL_INSTANCE_ID: &str = "instance_id";

// container (GKE)
pub const LABEL_CLUSTER_NAME: &str = "cluster_name";
pub const LABEL_NAMESPACE_ID: &str = "namespace_id";

// gae_app
pub const LABEL_MODULE_ID: &str = "module_id";
pub const LABEL_VERSION_ID: &str = "version_id";

// cloud_function
pub const LABEL_FUNCTION_NAME: &str = "function_name";
pub const LABEL_REGION: &str = "region";
