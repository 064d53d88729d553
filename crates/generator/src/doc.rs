//! `@param` documentation for generated plugin methods
//!
//! Documentation types are resolved with the same rules as declarations, but
//! class names stay fully qualified and scalars are shown whatever the target
//! language level supports.

use plugingen_core::{FeatureProfile, InterceptionKind, TargetClass, TargetMethod, TypeCandidates};

use crate::parameters::{PROCEED_PARAM, RESULT_PARAM, SUBJECT_PARAM};
use crate::type_hint::{HintContext, TypeHintResolver, CALLABLE_TYPE};

const DOC_LINE_PREFIX: &str = " * @param";

/// Builds the `PARAM_DOC` block for one plugin method
#[derive(Debug, Clone, Copy)]
pub struct ParamDocBuilder<'a> {
    resolver: TypeHintResolver<'a>,
}

impl ParamDocBuilder<'_> {
    pub fn new(profile: FeatureProfile) -> Self {
        Self {
            resolver: TypeHintResolver::new(FeatureProfile {
                scalar_type_hints: true,
                ..profile
            }),
        }
    }

    /// One `@param` line per generated parameter, in parameter-list order.
    pub fn build(
        &self,
        target_class: &TargetClass,
        method: &TargetMethod,
        kind: InterceptionKind,
    ) -> String {
        let mut lines = Vec::with_capacity(method.parameters.len() + 2);
        lines.push(self.line(&target_class.as_type_candidates(), SUBJECT_PARAM));

        match kind {
            InterceptionKind::After => {
                let line = if method.returns_void() {
                    doc_line(Some("null"), RESULT_PARAM)
                } else {
                    self.line(&method.return_types, RESULT_PARAM)
                };
                lines.push(line);
            }
            InterceptionKind::Around => {
                lines.push(doc_line(Some(CALLABLE_TYPE), PROCEED_PARAM));
            }
            InterceptionKind::Before => {}
        }

        if kind != InterceptionKind::After {
            lines.extend(
                method
                    .parameters
                    .iter()
                    .map(|param| self.line(&param.type_candidates, &param.name)),
            );
        }

        lines.join("\n")
    }

    /// Documentation type for a candidate set, if one resolves.
    pub fn doc_type(&self, candidates: &TypeCandidates) -> Option<String> {
        self.resolver
            .resolve(candidates, HintContext::Documentation)
            .map(|hint| hint.documentation())
    }

    fn line(&self, candidates: &TypeCandidates, name: &str) -> String {
        doc_line(self.doc_type(candidates).as_deref(), name)
    }
}

fn doc_line(doc_type: Option<&str>, name: &str) -> String {
    match doc_type {
        Some(doc_type) => format!("{DOC_LINE_PREFIX} {doc_type} ${name}"),
        None => format!("{DOC_LINE_PREFIX} ${name}"),
    }
}
