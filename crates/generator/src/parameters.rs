//! Rendering of individual plugin method parameters

use plugingen_core::qualified_name::shorten_qualified_names;
use plugingen_core::{MethodParameter, TargetClass, TypeCandidates};

use crate::type_hint::{HintContext, TypeHintResolver};

/// Name of the synthetic first parameter holding the intercepted object
pub const SUBJECT_PARAM: &str = "subject";

/// Name of the After parameter carrying the original return value
pub const RESULT_PARAM: &str = "result";

/// Name of the Around parameter invoking the next plugin or the original method
pub const PROCEED_PARAM: &str = "proceed";

/// Renders parameter declarations for a synthesized parameter list
#[derive(Debug, Clone, Copy)]
pub struct ParameterRenderer<'a> {
    resolver: TypeHintResolver<'a>,
}

impl<'a> ParameterRenderer<'a> {
    pub fn new(resolver: TypeHintResolver<'a>) -> Self {
        Self { resolver }
    }

    /// `<Class> $subject`, the intercepted object typed with its own class.
    pub fn render_subject(&self, target_class: &TargetClass) -> String {
        let hint = self
            .resolver
            .declarable(&target_class.as_type_candidates(), HintContext::Local);
        typed_variable(hint.as_deref(), SUBJECT_PARAM)
    }

    /// A parameter of the target method carried through unchanged.
    ///
    /// The source declaration is reused verbatim (default values, by-reference
    /// and variadic markers included) with qualified class names shortened.
    /// Without one the parameter is rebuilt from its candidate types.
    pub fn render_original(&self, param: &MethodParameter) -> String {
        match param.declaration.as_deref().map(str::trim) {
            Some(declaration) if !declaration.is_empty() => shorten_qualified_names(declaration),
            _ => self.render_typed(&param.name, &param.type_candidates),
        }
    }

    /// `<hint> $<name>`, or `$<name>` when no hint resolves.
    pub fn render_typed(&self, name: &str, candidates: &TypeCandidates) -> String {
        let hint = self.resolver.declarable(candidates, HintContext::Global);
        typed_variable(hint.as_deref(), name)
    }
}

/// Join an optional hint and a variable name into declaration text.
pub fn typed_variable(hint: Option<&str>, name: &str) -> String {
    match hint {
        Some(hint) if !hint.is_empty() => format!("{hint} ${name}"),
        _ => format!("${name}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use plugingen_core::FeatureProfile;

    fn renderer(profile: FeatureProfile) -> ParameterRenderer<'static> {
        ParameterRenderer::new(TypeHintResolver::new(profile))
    }

    #[test]
    fn test_subject_is_always_named_subject() {
        let class = TargetClass::parse("\\Magento\\Catalog\\Model\\Product").unwrap();
        assert_eq!(
            renderer(FeatureProfile::none()).render_subject(&class),
            "Product $subject"
        );
    }

    #[test]
    fn test_original_declaration_is_reused_and_shortened() {
        let param = MethodParameter::new("product", ["\\Foo\\Product", "null"])
            .with_declaration("?\\Foo\\Product $product = null");
        assert_eq!(
            renderer(FeatureProfile::all()).render_original(&param),
            "?Product $product = null"
        );
    }

    #[test]
    fn test_original_global_class_keeps_separator() {
        let param = MethodParameter::new("d", ["\\DateTime"]).with_declaration("\\DateTime $d");
        assert_eq!(
            renderer(FeatureProfile::all()).render_original(&param),
            "\\DateTime $d"
        );
    }

    #[test]
    fn test_original_without_declaration_uses_candidates() {
        let param = MethodParameter::new("id", ["int"]);
        assert_eq!(
            renderer(FeatureProfile::all()).render_original(&param),
            "int $id"
        );
        assert_eq!(
            renderer(FeatureProfile::none()).render_original(&param),
            "$id"
        );
    }

    #[test]
    fn test_blank_declaration_falls_back_to_candidates() {
        let param = MethodParameter::new("items", ["\\Foo\\Item[]"]).with_declaration("  ");
        assert_eq!(
            renderer(FeatureProfile::none()).render_original(&param),
            "array $items"
        );
    }

    #[test]
    fn test_unresolved_hint_omits_type_and_space() {
        let candidates: TypeCandidates = ["int", "string"].into_iter().collect();
        assert_eq!(
            renderer(FeatureProfile::all()).render_typed("value", &candidates),
            "$value"
        );
    }

    #[test]
    fn test_pseudo_types_are_not_declared() {
        let candidates: TypeCandidates = ["mixed"].into_iter().collect();
        assert_eq!(
            renderer(FeatureProfile::all()).render_typed("value", &candidates),
            "$value"
        );
    }
}
