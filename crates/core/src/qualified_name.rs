//! Structured representation of PHP namespaced names.
//!
//! PHP class references arrive from the code model in several spellings
//! (`\Vendor\Module\Model\Product`, `Vendor\Module\Model\Product`,
//! `Product`). This module normalises them into segments so that callers can
//! ask for the short name or the fully qualified form without string slicing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};

use crate::error::{Error, Result};

/// Namespace separator used by PHP.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A PHP class, interface or function name split into namespace segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhpQualifiedName {
    /// Segments without separators (e.g. `["Magento", "Catalog", "Model", "Product"]`)
    segments: Vec<String>,
}

impl PhpQualifiedName {
    /// Parse a qualified name, with or without the leading separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains empty segments.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix(NAMESPACE_SEPARATOR)
            .unwrap_or(trimmed);

        if body.is_empty() {
            return Err(Error::invalid_input("qualified name cannot be empty"));
        }

        let segments: Vec<String> = body.split(NAMESPACE_SEPARATOR).map(String::from).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::invalid_input(format!(
                "qualified name contains empty segment: {s}"
            )));
        }

        Ok(Self { segments })
    }

    /// Last segment, the name as written after a `use` import.
    pub fn short_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Namespace part without the short name, `None` for global names.
    pub fn namespace(&self) -> Option<String> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(self.segments[..self.segments.len() - 1].join("\\"))
    }

    /// Whether the name has more than one segment.
    pub fn is_namespaced(&self) -> bool {
        self.segments.len() > 1
    }

    /// Name with the leading separator (`\Vendor\Module\Class`).
    pub fn fully_qualified(&self) -> String {
        format!("{NAMESPACE_SEPARATOR}{self}")
    }

    /// Segments of the name.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for PhpQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}

impl TryFrom<&str> for PhpQualifiedName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        PhpQualifiedName::parse(s)
    }
}

impl TryFrom<String> for PhpQualifiedName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        PhpQualifiedName::parse(&s)
    }
}

impl Serialize for PhpQualifiedName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PhpQualifiedName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhpQualifiedName::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Strip a single leading namespace separator.
pub fn trim_leading_separator(name: &str) -> &str {
    name.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(name)
}

/// Last segment of a possibly qualified name, without parsing.
pub fn short_name(name: &str) -> &str {
    name.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(name)
}

/// Rewrite every namespaced name in a declaration fragment to its last segment.
///
/// Names in the global namespace (`\DateTime`) are left as written.
///
/// Text inside quoted string literals is left untouched, as are the `?`, `&`
/// and `...` markers around a name.
pub fn shorten_qualified_names(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c == NAMESPACE_SEPARATOR || is_name_char(c) {
            token.push(c);
            continue;
        }

        flush_token(&mut token, &mut out);
        if c == '\'' || c == '"' {
            quote = Some(c);
        }
        out.push(c);
    }
    flush_token(&mut token, &mut out);
    out
}

fn flush_token(token: &mut String, out: &mut String) {
    if trim_leading_separator(token).contains(NAMESPACE_SEPARATOR) {
        out.push_str(short_name(token));
    } else {
        out.push_str(token);
    }
    token.clear();
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || !c.is_ascii()
}
