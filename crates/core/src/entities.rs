use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Error, Result};
use crate::qualified_name::{trim_leading_separator, PhpQualifiedName};

/// Return type sentinel for methods that return nothing.
pub const VOID_TYPE: &str = "void";

/// Null type name, compared case-insensitively.
pub const NULL_TYPE: &str = "null";

/// Where the generated plugin logic runs relative to the target method
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterceptionKind {
    Before,
    After,
    Around,
}

impl InterceptionKind {
    /// Parse a kind name, failing on anything but `before`, `after` or `around`.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse::<Self>()
            .map_err(|_| Error::unsupported_kind(s.to_string()))
    }
}

/// Ordered, de-duplicated set of raw type names for one symbol.
///
/// Names are kept as the code model reports them (`\int`, `\Foo\Bar`,
/// `\Foo\Bar[]`, `\null`); classification happens at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCandidates(Vec<String>);

impl TypeCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate unless an equal one is already present.
    pub fn insert(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        if !self.0.contains(&candidate) {
            self.0.push(candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The sole candidate, if there is exactly one.
    pub fn single(&self) -> Option<&str> {
        match self.0.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Copy of this set with every null-type member removed.
    pub fn without_null(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|t| !is_null_type(t))
                .cloned()
                .collect(),
        )
    }

    /// Whether any member denotes the null type.
    pub fn contains_null(&self) -> bool {
        self.0.iter().any(|t| is_null_type(t))
    }

    /// Whether the set is exactly the `void` sentinel.
    pub fn is_void(&self) -> bool {
        self.single()
            .is_some_and(|t| trim_leading_separator(t).eq_ignore_ascii_case(VOID_TYPE))
    }
}

impl<S: Into<String>> FromIterator<S> for TypeCandidates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for candidate in iter {
            set.insert(candidate);
        }
        set
    }
}

/// Whether a raw type name denotes the null type (`null`, `\null`, `NULL`).
pub fn is_null_type(name: &str) -> bool {
    trim_leading_separator(name).eq_ignore_ascii_case(NULL_TYPE)
}

/// A parameter of the intercepted method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct MethodParameter {
    /// Name without the leading `$`
    pub name: String,

    /// Candidate types reported by the code model
    #[builder(default)]
    #[serde(default, rename = "types")]
    pub type_candidates: TypeCandidates,

    /// Declaration text as written in the target source (`?int $id = null`)
    #[builder(default = "None")]
    #[serde(default)]
    pub declaration: Option<String>,
}

impl MethodParameter {
    /// Parameter with candidate types and no source declaration.
    pub fn new<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            type_candidates: types.into_iter().collect(),
            declaration: None,
        }
    }

    /// Attach the verbatim declaration text.
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }
}

/// The method a plugin is generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct TargetMethod {
    /// Method name as declared
    pub name: String,

    /// Parameters in declaration order
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub parameters: Vec<MethodParameter>,

    /// Candidate return types; `void` when declared as such
    #[builder(default)]
    #[serde(default)]
    pub return_types: TypeCandidates,
}

impl TargetMethod {
    pub fn builder() -> TargetMethodBuilder {
        TargetMethodBuilder::default()
    }

    /// Whether the method is declared to return nothing.
    pub fn returns_void(&self) -> bool {
        self.return_types.is_void()
    }
}

/// The class that owns the target method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetClass {
    /// Fully qualified class name
    pub name: PhpQualifiedName,
}

impl TargetClass {
    pub fn new(name: PhpQualifiedName) -> Self {
        Self { name }
    }

    /// Parse a class name into a target class.
    pub fn parse(name: &str) -> Result<Self> {
        Ok(Self::new(PhpQualifiedName::parse(name)?))
    }

    /// The class name as a single-candidate type set.
    pub fn as_type_candidates(&self) -> TypeCandidates {
        std::iter::once(self.name.fully_qualified()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_interception_kind_parse() {
        assert_eq!(
            InterceptionKind::parse("before").unwrap(),
            InterceptionKind::Before
        );
        assert_eq!(
            InterceptionKind::parse("around").unwrap(),
            InterceptionKind::Around
        );
        assert_eq!(InterceptionKind::After.to_string(), "after");
    }

    #[test]
    fn test_interception_kind_unknown_fails() {
        let err = InterceptionKind::parse("instead").unwrap_err();
        assert!(matches!(err, Error::UnsupportedInterceptionKind(ref k) if k == "instead"));
    }

    #[test]
    fn test_interception_kind_iterates_all_three() {
        let kinds: Vec<_> = InterceptionKind::iter().collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_type_candidates_dedup_and_order() {
        let set: TypeCandidates = ["\\int", "\\null", "\\int"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["\\int", "\\null"]);
        assert!(set.contains_null());
        assert_eq!(set.without_null().single(), Some("\\int"));
    }

    #[test]
    fn test_null_detection_is_case_insensitive() {
        assert!(is_null_type("NULL"));
        assert!(is_null_type("\\null"));
        assert!(!is_null_type("nullable"));
    }

    #[test]
    fn test_void_detection() {
        let method = TargetMethod::builder()
            .name("execute")
            .return_types(TypeCandidates::from_iter(["void"]))
            .build()
            .unwrap();
        assert!(method.returns_void());

        let method = TargetMethod::builder().name("load").build().unwrap();
        assert!(!method.returns_void());
    }

    #[test]
    fn test_target_method_deserializes_descriptor_shape() {
        let json = r#"{
            "name": "save",
            "parameters": [
                {
                    "name": "product",
                    "types": ["\\Foo\\Product"],
                    "declaration": "\\Foo\\Product $product"
                },
                { "name": "force" }
            ],
            "return_types": ["\\Foo\\Product"]
        }"#;
        let method: TargetMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.parameters.len(), 2);
        assert_eq!(
            method.parameters[0].declaration.as_deref(),
            Some("\\Foo\\Product $product")
        );
        assert!(method.parameters[1].type_candidates.is_empty());
    }
}
