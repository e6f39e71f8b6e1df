use std::collections::HashMap;

pub const FUNCTION_NAME: &str = "FUNCTION_NAME";
pub const FUNCTION_REGION: &str = "FUNCTION_REGION";
pub const FUNCTION_TARGET: &str = "FUNCTION_TARGET";
pub const GAE_MODULE_NAME: &str = "GAE_MODULE_NAME";
pub const GAE_SERVICE: &str = "GAE_SERVICE";
pub const GAE_VERSION: &str = "GAE_VERSION";

// Lookups must hit the source every time; callers rely on
// changes between calls being visible.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for HashMap<&'static str, &'static str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use super::*;

    #[test]
    fn test_map_env() {
        let env: HashMap<&'static str, &'static str> = [(GAE_SERVICE, "svc")].into();

        assert!(env.var(GAE_SERVICE).as_deref() == Some("svc"));
        assert!(env.var(GAE_VERSION).is_none());
    }

    #[test]
    fn test_process_env_is_live() {
        const VAR: &str = "GCP_RESOURCE_TEST_PROCESS_ENV";

        std::env::remove_var(VAR);
        assert!(ProcessEnv.var(VAR).is_none());

        std::env::set_var(VAR, "one");
        assert!(ProcessEnv.var(VAR).as_deref() == Some("one"));

        std::env::set_var(VAR, "two");
        assert!(ProcessEnv.var(VAR).as_deref() == Some("two"));

        std::env::remove_var(VAR);
    }
}
