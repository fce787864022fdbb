//! Build-session capability: execution properties for a run.

use std::collections::BTreeMap;

/// Narrow view of a build session.
///
/// The real build environment assembles execution properties from the
/// system, the user and the command line. Consumers that only read
/// properties should depend on this trait rather than a concrete session.
pub trait BuildSession {
    /// Returns the execution properties active for this session.
    fn execution_properties(&self) -> BTreeMap<String, String>;
}

/// In-memory session stub for test setup.
///
/// Serves the process environment, with explicit overrides layered on top.
#[derive(Debug, Clone, Default)]
pub struct StubSession {
    overrides: BTreeMap<String, String>,
}

impl StubSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, shadowing any process env var of the same name.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.overrides.insert(key.to_string(), value.to_string());
        self
    }
}

impl BuildSession for StubSession {
    fn execution_properties(&self) -> BTreeMap<String, String> {
        let mut props: BTreeMap<String, String> = std::env::vars().collect();
        for (key, value) in &self.overrides {
            props.insert(key.clone(), value.clone());
        }
        tracing::debug!("stub session serving {} execution properties", props.len());
        props
    }
}
