//! `use` imports visible in the file a plugin method is generated into
//!
//! Class hints rendered in "global" scope prefer the alias under which the
//! class is imported. Without an import they fall back to the short name,
//! unless that name is already imported for another class.

use plugingen_core::qualified_name::trim_leading_separator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from alias to fully qualified class name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportScope {
    /// alias -> fully qualified name (stored without the leading separator)
    mappings: HashMap<String, String>,
}

impl ImportScope {
    /// Create a new empty ImportScope
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import, `use Foo\Bar as Alias;`
    pub fn add(&mut self, alias: &str, qualified_name: &str) {
        self.mappings.insert(
            alias.to_string(),
            trim_leading_separator(qualified_name).to_string(),
        );
    }

    /// Add an import under its own short name, `use Foo\Bar;`
    pub fn add_class(&mut self, qualified_name: &str) {
        let fqn = trim_leading_separator(qualified_name);
        let alias = plugingen_core::qualified_name::short_name(fqn);
        self.add(alias, fqn);
    }

    /// Resolve an alias to its fully qualified name
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.mappings.get(alias).map(String::as_str)
    }

    /// Alias under which a fully qualified name is imported, if any
    ///
    /// When several aliases point at the same class the lexicographically
    /// smallest one is returned so output is stable.
    pub fn alias_for(&self, qualified_name: &str) -> Option<&str> {
        let fqn = trim_leading_separator(qualified_name);
        self.mappings
            .iter()
            .filter(|(_, target)| target.eq_ignore_ascii_case(fqn))
            .map(|(alias, _)| alias.as_str())
            .min()
    }

    /// Check if the scope is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Get the number of imports
    pub fn len(&self) -> usize {
        self.mappings.len()
    }
}

impl<A: AsRef<str>, Q: AsRef<str>> FromIterator<(A, Q)> for ImportScope {
    fn from_iter<I: IntoIterator<Item = (A, Q)>>(iter: I) -> Self {
        let mut scope = Self::new();
        for (alias, fqn) in iter {
            scope.add(alias.as_ref(), fqn.as_ref());
        }
        scope
    }
}
