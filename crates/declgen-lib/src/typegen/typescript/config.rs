//! Configuration types for TypeScript emission.

use std::collections::BTreeSet;

use super::policy::PolicyTable;

/// Synthetic namespace hosting every generated declaration.
pub const DEFAULT_INTERNAL_ROOT: &str = "ಠ_ಠ.declgen";
/// Platform prefix of external module names.
pub const DEFAULT_MODULE_PREFIX: &str = "goog";

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Internal root namespace
    pub(crate) internal_root: String,
    /// Prefix of declared module names (`'<prefix>:<name>'`)
    pub(crate) module_prefix: String,
    /// Restrict emission to these exports, if set
    pub(crate) entry_points: Option<BTreeSet<String>>,
    /// Back-reference and meta members removed from class bodies
    pub(crate) excluded_members: BTreeSet<String>,
    /// Projection policy
    pub(crate) policy: PolicyTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internal_root: DEFAULT_INTERNAL_ROOT.to_string(),
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            entry_points: None,
            excluded_members: ["constructor", "superClass_"]
                .into_iter()
                .map(String::from)
                .collect(),
            policy: PolicyTable::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the internal root namespace.
    pub fn internal_root(mut self, value: impl Into<String>) -> Self {
        self.internal_root = value.into();
        self
    }

    /// Set the module name prefix.
    pub fn module_prefix(mut self, value: impl Into<String>) -> Self {
        self.module_prefix = value.into();
        self
    }

    /// Only emit the given exports. Names that are not exported are ignored.
    pub fn entry_points<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_points = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Add a member name to drop from class and interface bodies.
    pub fn exclude_member(mut self, name: impl Into<String>) -> Self {
        self.excluded_members.insert(name.into());
        self
    }

    /// Set the projection policy.
    pub fn policy(mut self, value: PolicyTable) -> Self {
        self.policy = value;
        self
    }

    pub(crate) fn emits(&self, export: &str) -> bool {
        self.entry_points
            .as_ref()
            .is_none_or(|names| names.contains(export))
    }

    /// Whether a member is removed from bodies regardless of its type.
    pub(crate) fn is_excluded_member(&self, name: &str) -> bool {
        name == "prototype" || self.excluded_members.contains(name)
    }
}
