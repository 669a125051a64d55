//! Environment lookup behind a trait, so resolution can be driven by a fixed
//! map in tests instead of the real process environment.

use std::collections::HashMap;
use std::fmt;

/// Name of the variable holding the user's editor preference.
pub const EDITOR_VAR: &str = "EDITOR";

/// Source of environment variables.
///
/// Implementations return `None` for unset variables. Empty values are
/// returned as-is; callers decide what an empty value means.
pub trait EnvProvider: fmt::Debug {
    /// Look up a single variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_env_lookup() {
        let mut env = HashMap::new();
        env.insert(EDITOR_VAR.to_string(), "nano".to_string());

        assert_eq!(env.var(EDITOR_VAR).as_deref(), Some("nano"));
        assert_eq!(env.var("VISUAL"), None);
    }

    #[test]
    fn test_non_empty_var_filters_empty_values() {
        let mut env = HashMap::new();
        env.insert(EDITOR_VAR.to_string(), String::new());

        assert_eq!(env.var(EDITOR_VAR).as_deref(), Some(""));
        assert_eq!(env.non_empty_var(EDITOR_VAR), None);
    }

    #[test]
    #[serial]
    fn test_system_env_reads_process_environment() {
        let key = "CLIDE_TEST_SYSTEM_ENV";
        std::env::set_var(key, "value");
        assert_eq!(SystemEnv.var(key).as_deref(), Some("value"));

        std::env::remove_var(key);
        assert_eq!(SystemEnv.var(key), None);
    }
}
