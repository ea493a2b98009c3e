use serde::Deserialize;

/// Default maximum nesting depth of embedded structured fields.
pub const DEFAULT_RECURSION_MAX: usize = 20;

/// Flattener settings, usually loaded as part of the application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    pub recursion_max: usize,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self { recursion_max: DEFAULT_RECURSION_MAX }
    }
}
