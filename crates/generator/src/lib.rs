//! Plugin method generation
//!
//! Given a target method, an interception kind and the feature profile of the
//! target PHP version, this crate synthesizes the parameter list, return type
//! and documentation of the generated plugin method and renders it.
//!
//! - [`type_hint`]: candidate type sets to declaration or documentation hints
//! - [`parameters`]: individual parameter declarations
//! - [`signature`]: per-kind parameter list shapes
//! - [`doc`]: `@param` documentation
//! - [`attributes`]: typed attribute record for template renderers
//! - [`template`]: built-in method skeletons
//! - [`generator`]: the [`PluginMethodsGenerator`] entry point

pub mod attributes;
pub mod doc;
pub mod generator;
pub mod import_scope;
pub mod method_name;
pub mod parameters;
pub mod reference;
pub mod return_variables;
pub mod signature;
pub mod template;
pub mod type_hint;

pub use attributes::PluginMethodAttributes;
pub use doc::ParamDocBuilder;
pub use generator::PluginMethodsGenerator;
pub use import_scope::ImportScope;
pub use method_name::compose_method_name;
pub use parameters::ParameterRenderer;
pub use reference::{resolve_component_files, ComponentIndex, InMemoryComponentIndex};
pub use return_variables::compose_return_variables;
pub use signature::{SignatureSynthesizer, SynthesizedSignature};
pub use template::{MethodTemplateRenderer, PluginMethod, SkeletonRenderer};
pub use type_hint::{HintContext, ResolvedTypeHint, TypeHintResolver};
