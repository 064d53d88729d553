//! Default values and functions for configuration

use crate::features::PhpLanguageLevel;

// Default constants
pub(crate) const DEFAULT_INDENT: &str = "    ";
pub(crate) const DEFAULT_METHOD_VISIBILITY: &str = "public";
pub(crate) const DEFAULT_BODY_COMMENT: &str = "// Implement plugin method.";

pub(crate) const VALID_VISIBILITIES: [&str; 3] = ["public", "protected", "private"];

pub(crate) fn default_language_level() -> PhpLanguageLevel {
    PhpLanguageLevel::default()
}

pub(crate) fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

pub(crate) fn default_method_visibility() -> String {
    DEFAULT_METHOD_VISIBILITY.to_string()
}

pub(crate) fn default_body_comment() -> String {
    DEFAULT_BODY_COMMENT.to_string()
}
