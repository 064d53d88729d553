//! Lookup of UI component definitions referenced from configuration values

use std::collections::HashMap;
use std::path::PathBuf;

/// Index of declared component definition files by component name
pub trait ComponentIndex {
    /// Files declaring the component `key`; empty when none are known.
    fn files_for(&self, key: &str) -> Vec<PathBuf>;
}

/// Component index held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentIndex {
    entries: HashMap<String, Vec<PathBuf>>,
}

impl InMemoryComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition file under a component name.
    pub fn register(&mut self, key: impl Into<String>, file: impl Into<PathBuf>) {
        self.entries.entry(key.into()).or_default().push(file.into());
    }
}

impl ComponentIndex for InMemoryComponentIndex {
    fn files_for(&self, key: &str) -> Vec<PathBuf> {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

/// Resolve a quoted configuration value to the component files it names.
pub fn resolve_component_files(raw: &str, index: &dyn ComponentIndex) -> Vec<PathBuf> {
    index.files_for(unquote(raw.trim()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> InMemoryComponentIndex {
        let mut index = InMemoryComponentIndex::new();
        index.register("product_listing", "view/adminhtml/ui_component/product_listing.xml");
        index.register("product_listing", "view/base/ui_component/product_listing.xml");
        index
    }

    #[test]
    fn test_quoted_value_resolves_all_files() {
        let files = resolve_component_files("\"product_listing\"", &index());
        assert_eq!(files.len(), 2);

        let files = resolve_component_files("'product_listing'", &index());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_unknown_key_is_empty() {
        assert!(resolve_component_files("\"cms_block_listing\"", &index()).is_empty());
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        assert!(resolve_component_files("\"product_listing'", &index()).is_empty());
        assert_eq!(resolve_component_files("product_listing", &index()).len(), 2);
    }
}
