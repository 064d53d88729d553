//! Type hint resolution
//!
//! Turns the candidate type set the code model reports for a symbol into at
//! most one textual hint, gated by the target's [`FeatureProfile`]:
//!
//! 1. no candidates: no hint
//! 2. one candidate: `Foo[]` becomes `array`; scalars need scalar type hint
//!    support (except `array` and `callable`); class names are always hinted
//! 3. two candidates, one of them null: the other one, marked nullable
//! 4. anything else is an ambiguous union and stays unhinted
//!
//! The same rules serve documentation blocks, where names stay fully
//! qualified and scalars are always shown.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use plugingen_core::qualified_name::{short_name, trim_leading_separator, NAMESPACE_SEPARATOR};
use plugingen_core::{FeatureProfile, TypeCandidates};
use tracing::{debug, trace};

use crate::import_scope::ImportScope;

/// Generic array type name
pub const ARRAY_TYPE: &str = "array";

/// Callable pseudo-type name
pub const CALLABLE_TYPE: &str = "callable";

/// Suffix marking a typed array in documentation types (`Foo[]`)
pub const ARRAY_MARKER: &str = "[]";

/// Nullable marker for declarations
pub const NULLABLE_MARKER: char = '?';

/// Names the code model reports for non-class types.
const PRIMITIVE_TYPES: &[&str] = &[
    "int", "integer", "float", "double", "string", "bool", "boolean", "array", "callable",
    "iterable", "object", "mixed", "void", "null", "resource", "false", "true", "static", "self",
    "$this", "never",
];

/// Types that are valid in documentation but never as a declared plugin
/// parameter or return type.
const NON_DECLARABLE_TYPES: &[&str] = &[
    "mixed", "static", "self", "$this", "true", "false", "null", "void", "never", "resource",
];

/// Where a resolved hint is going to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    /// Parameter list, no cross-file qualification: class names use their
    /// short name (the subject, which is always the target class)
    Local,
    /// Parameter list with cross-file qualification: class names use the
    /// alias they are imported under, or their short name
    Global,
    /// Documentation block: fully qualified names, scalars always shown
    Documentation,
}

impl HintContext {
    fn is_documentation(self) -> bool {
        matches!(self, HintContext::Documentation)
    }
}

/// A resolved hint, before the nullable marker is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTypeHint {
    /// Hint without nullability (`int`, `Product`, `\Foo\Product`)
    pub base: String,
    /// Whether the symbol may also be null
    pub nullable: bool,
}

impl ResolvedTypeHint {
    /// Declaration form: `?base` when nullable types are supported, else `base`.
    pub fn declaration(&self, profile: &FeatureProfile) -> String {
        if self.nullable && profile.nullable_types {
            format!("{NULLABLE_MARKER}{}", self.base)
        } else {
            self.base.clone()
        }
    }

    /// Documentation form: `base|null` when nullable.
    pub fn documentation(&self) -> String {
        if self.nullable {
            format!("{}|null", self.base)
        } else {
            self.base.clone()
        }
    }
}

/// Resolves candidate type sets into hints for one feature profile
#[derive(Debug, Clone, Copy)]
pub struct TypeHintResolver<'a> {
    profile: FeatureProfile,
    imports: Option<&'a ImportScope>,
}

impl<'a> TypeHintResolver<'a> {
    pub fn new(profile: FeatureProfile) -> Self {
        Self {
            profile,
            imports: None,
        }
    }

    /// Use the given imports when rendering in [`HintContext::Global`].
    #[must_use]
    pub fn with_imports(mut self, imports: &'a ImportScope) -> Self {
        self.imports = Some(imports);
        self
    }

    pub fn profile(&self) -> &FeatureProfile {
        &self.profile
    }

    /// Resolve a candidate set to a hint.
    pub fn resolve(
        &self,
        candidates: &TypeCandidates,
        context: HintContext,
    ) -> Option<ResolvedTypeHint> {
        match candidates.len() {
            0 => None,
            1 => {
                let single = candidates.single()?;
                self.resolve_single(single, context).map(|base| ResolvedTypeHint {
                    base,
                    nullable: false,
                })
            }
            2 if candidates.contains_null() => {
                let without_null = candidates.without_null();
                let Some(single) = without_null.single() else {
                    debug!("Type set {candidates:?} has no non-null member, leaving unhinted");
                    return None;
                };
                self.resolve_single(single, context).map(|base| ResolvedTypeHint {
                    base,
                    nullable: true,
                })
            }
            _ => {
                debug!("Ambiguous union {candidates:?}, leaving unhinted");
                None
            }
        }
    }

    /// Resolve straight to declaration text (`?int`, `Product`).
    pub fn declaration(&self, candidates: &TypeCandidates, context: HintContext) -> Option<String> {
        self.resolve(candidates, context)
            .map(|hint| hint.declaration(&self.profile))
    }

    /// Resolve a candidate set that is about to be declared, rejecting
    /// pseudo-types such as `mixed`, `static` or `void`.
    pub fn declarable(&self, candidates: &TypeCandidates, context: HintContext) -> Option<String> {
        let hint = self.resolve(candidates, context)?;
        if is_declarable(&hint.base) {
            Some(hint.declaration(&self.profile))
        } else {
            trace!("Dropping non-declarable hint {}", hint.base);
            None
        }
    }

    fn resolve_single(&self, raw: &str, context: HintContext) -> Option<String> {
        let name = trim_leading_separator(raw);
        if name.is_empty() {
            return None;
        }

        if name.ends_with(ARRAY_MARKER) {
            let hint = if context.is_documentation() {
                documentation_name(name)
            } else {
                ARRAY_TYPE.to_string()
            };
            trace!("Typed array {raw} resolved to {hint}");
            return Some(hint);
        }

        if is_primitive(name) {
            let normalized = normalize_primitive(name);
            let always_hintable = normalized == ARRAY_TYPE || normalized == CALLABLE_TYPE;
            if context.is_documentation() || always_hintable || self.profile.scalar_type_hints {
                trace!("Primitive {raw} resolved to {normalized}");
                return Some(normalized);
            }
            trace!("Scalar {raw} dropped, scalar type hints unsupported");
            return None;
        }

        let hint = match context {
            HintContext::Documentation => documentation_name(name),
            HintContext::Local => short_name(name).to_string(),
            HintContext::Global => self.global_name(name),
        };
        trace!("Class {raw} resolved to {hint}");
        Some(hint)
    }

    /// Class reference for "global" scope, preferring an import alias.
    ///
    /// A short name already imported for a different class would bind to that
    /// class, so the name stays fully qualified in that case.
    fn global_name(&self, name: &str) -> String {
        let Some(imports) = self.imports else {
            return short_name(name).to_string();
        };
        if let Some(alias) = imports.alias_for(name) {
            return alias.to_string();
        }
        let short = short_name(name);
        match imports.resolve(short) {
            Some(other) if !other.eq_ignore_ascii_case(name) => {
                debug!("Short name {short} is imported as {other}, keeping {name} qualified");
                format!("{NAMESPACE_SEPARATOR}{name}")
            }
            _ => short.to_string(),
        }
    }
}

/// Whether a name (without leading separator) is one of the PHP primitive types.
pub fn is_primitive(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    PRIMITIVE_TYPES.contains(&lower.as_str())
}

/// Whether a resolved hint may appear in a declaration.
pub fn is_declarable(hint: &str) -> bool {
    let lower = hint.to_ascii_lowercase();
    !NON_DECLARABLE_TYPES.contains(&lower.as_str())
}

/// Canonical spelling of a primitive (`integer` -> `int`, `Boolean` -> `bool`).
pub fn normalize_primitive(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "integer" => "int".to_string(),
        "boolean" => "bool".to_string(),
        "double" => "float".to_string(),
        _ => lower,
    }
}

/// Documentation spelling: classes fully qualified, primitives canonical,
/// array markers kept.
fn documentation_name(name: &str) -> String {
    let (element, suffix) = match name.find(ARRAY_MARKER) {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    };
    let element = trim_leading_separator(element);
    if is_primitive(element) {
        format!("{}{suffix}", normalize_primitive(element))
    } else {
        format!("{NAMESPACE_SEPARATOR}{element}{suffix}")
    }
}
