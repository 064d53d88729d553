//! Signature synthesis for plugin methods
//!
//! The interception kind fixes the shape of the generated parameter list:
//!
//! | Kind   | Parameters                                   | Return hint    |
//! |--------|----------------------------------------------|----------------|
//! | before | `$subject, <originals...>`                   | none           |
//! | after  | `$subject, <ReturnType?> $result`            | target's, unless void |
//! | around | `$subject, callable $proceed, <originals...>`| none           |

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use plugingen_core::{FeatureProfile, InterceptionKind, TargetClass, TargetMethod};
use serde::Serialize;
use tracing::debug;

use crate::import_scope::ImportScope;
use crate::method_name::compose_method_name;
use crate::parameters::{typed_variable, ParameterRenderer, PROCEED_PARAM, RESULT_PARAM};
use crate::return_variables::compose_return_variables;
use crate::type_hint::{HintContext, TypeHintResolver, CALLABLE_TYPE};

/// Parameter list, return hint and pass-through expression of one plugin method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedSignature {
    /// Generated method name (`beforeSave`)
    pub method_name: String,
    /// Interception kind the signature was built for
    pub kind: InterceptionKind,
    /// Rendered parameter declarations, subject first
    pub parameters: Vec<String>,
    /// Declared return type of the target, when it can be declared
    pub return_type: Option<String>,
    /// Expression passed on by the generated body
    pub return_variables: Option<String>,
    /// Whether the target method is declared `void`
    pub target_returns_void: bool,
}

impl SynthesizedSignature {
    /// Parameters joined into a declaration list.
    pub fn parameter_list(&self) -> String {
        self.parameters.join(", ")
    }
}

/// Builds [`SynthesizedSignature`]s for one feature profile
#[derive(Debug, Clone, Copy)]
pub struct SignatureSynthesizer<'a> {
    resolver: TypeHintResolver<'a>,
}

impl<'a> SignatureSynthesizer<'a> {
    pub fn new(profile: FeatureProfile) -> Self {
        Self {
            resolver: TypeHintResolver::new(profile),
        }
    }

    /// Render cross-file class hints through the plugin file's imports.
    #[must_use]
    pub fn with_imports(mut self, imports: &'a ImportScope) -> Self {
        self.resolver = self.resolver.with_imports(imports);
        self
    }

    /// Synthesize the signature of the `kind` plugin for `method` of `target_class`.
    pub fn synthesize(
        &self,
        target_class: &TargetClass,
        method: &TargetMethod,
        kind: InterceptionKind,
    ) -> SynthesizedSignature {
        debug!(
            "Synthesizing {kind} plugin for {}::{}",
            target_class.name, method.name
        );

        let renderer = ParameterRenderer::new(self.resolver);
        let target_returns_void = method.returns_void();
        let return_type = match kind {
            InterceptionKind::After if !target_returns_void => self
                .resolver
                .declarable(&method.return_types, HintContext::Global),
            _ => None,
        };

        let mut parameters = Vec::with_capacity(method.parameters.len() + 2);
        parameters.push(renderer.render_subject(target_class));
        match kind {
            InterceptionKind::Before => {
                parameters.extend(method.parameters.iter().map(|p| renderer.render_original(p)));
            }
            InterceptionKind::After => {
                parameters.push(typed_variable(return_type.as_deref(), RESULT_PARAM));
            }
            InterceptionKind::Around => {
                parameters.push(typed_variable(Some(CALLABLE_TYPE), PROCEED_PARAM));
                parameters.extend(method.parameters.iter().map(|p| renderer.render_original(p)));
            }
        }

        let signature = SynthesizedSignature {
            method_name: compose_method_name(kind, &method.name),
            kind,
            parameters,
            return_type,
            return_variables: compose_return_variables(kind, &method.parameters),
            target_returns_void,
        };
        debug!(
            "Synthesized {}({}) return type {:?}",
            signature.method_name,
            signature.parameter_list(),
            signature.return_type
        );
        signature
    }
}
