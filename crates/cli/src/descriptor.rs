//! Target-method descriptors read from JSON
//!
//! ```json
//! {
//!   "class": "\\Magento\\Catalog\\Model\\Product",
//!   "method": {
//!     "name": "save",
//!     "parameters": [
//!       { "name": "force", "types": ["bool"], "declaration": "bool $force = false" }
//!     ],
//!     "return_types": ["\\Magento\\Catalog\\Model\\Product"]
//!   },
//!   "imports": { "ProductModel": "Magento\\Catalog\\Model\\Product" }
//! }
//! ```

use plugingen_core::{Error, Result, ResultExt, TargetClass, TargetMethod};
use plugingen_generator::ImportScope;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Descriptor as written by the code model export
#[derive(Debug, Clone, Deserialize)]
struct RawDescriptor {
    class: Option<String>,
    method: Option<TargetMethod>,
    #[serde(default)]
    imports: ImportScope,
}

/// A validated descriptor: owning class and method are both present
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub target_class: TargetClass,
    pub method: TargetMethod,
    pub imports: ImportScope,
}

impl PluginDescriptor {
    /// Parse and validate descriptor JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawDescriptor =
            serde_json::from_str(content).context("Failed to parse descriptor JSON")?;

        let class = raw
            .class
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::descriptor("target class is missing"))?;
        let target_class = TargetClass::parse(&class)?;

        let method = raw
            .method
            .ok_or_else(|| Error::descriptor(format!("target method of {class} is missing")))?;
        if method.name.trim().is_empty() {
            return Err(Error::descriptor(format!(
                "target method of {class} has no name"
            )));
        }
        if let Some(param) = method.parameters.iter().find(|p| p.name.trim().is_empty()) {
            return Err(Error::descriptor(format!(
                "parameter of {class}::{} has no name: {param:?}",
                method.name
            )));
        }

        Ok(Self {
            target_class,
            method,
            imports: raw.imports,
        })
    }

    /// Read a descriptor from a file, or from stdin when the path is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read descriptor from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .context(format!("Failed to read descriptor {}", path.display()))?
        };
        Self::from_json(&content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_descriptor() {
        let descriptor = PluginDescriptor::from_json(
            r#"{
                "class": "\\Foo\\Bar",
                "method": { "name": "save", "parameters": [{ "name": "id", "types": ["int"] }] },
                "imports": { "Baz": "Foo\\Baz" }
            }"#,
        )
        .unwrap();
        assert_eq!(descriptor.target_class.name.short_name(), "Bar");
        assert_eq!(descriptor.method.parameters.len(), 1);
        assert_eq!(descriptor.imports.alias_for("Foo\\Baz"), Some("Baz"));
    }

    #[test]
    fn test_missing_class_is_rejected() {
        let err = PluginDescriptor::from_json(r#"{ "method": { "name": "save" } }"#).unwrap_err();
        assert!(err.to_string().contains("target class is missing"));
    }

    #[test]
    fn test_missing_method_is_rejected() {
        let err = PluginDescriptor::from_json(r#"{ "class": "Foo\\Bar" }"#).unwrap_err();
        assert!(err.to_string().contains("target method of Foo\\Bar is missing"));
    }

    #[test]
    fn test_unnamed_parameter_is_rejected() {
        let err = PluginDescriptor::from_json(
            r#"{ "class": "Foo", "method": { "name": "save", "parameters": [{ "name": "" }] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Descriptor(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(PluginDescriptor::from_json("{").is_err());
    }
}
