//! Entry point tying synthesis, documentation and rendering together

use plugingen_core::{FeatureProfile, InterceptionKind, Result, TargetClass, TargetMethod};
use tracing::info;

use crate::attributes::PluginMethodAttributes;
use crate::doc::ParamDocBuilder;
use crate::import_scope::ImportScope;
use crate::signature::{SignatureSynthesizer, SynthesizedSignature};
use crate::template::{MethodTemplateRenderer, PluginMethod};

/// Generates plugin methods for one method of one target class
///
/// The owning class is an explicit argument; a generator cannot exist
/// without both the class and the method it intercepts.
#[derive(Debug, Clone, Copy)]
pub struct PluginMethodsGenerator<'a> {
    target_class: &'a TargetClass,
    method: &'a TargetMethod,
    imports: Option<&'a ImportScope>,
}

impl<'a> PluginMethodsGenerator<'a> {
    pub fn new(target_class: &'a TargetClass, method: &'a TargetMethod) -> Self {
        Self {
            target_class,
            method,
            imports: None,
        }
    }

    /// Render class hints through the plugin file's `use` imports.
    #[must_use]
    pub fn with_imports(mut self, imports: &'a ImportScope) -> Self {
        self.imports = Some(imports);
        self
    }

    pub fn target_class(&self) -> &TargetClass {
        self.target_class
    }

    pub fn method(&self) -> &TargetMethod {
        self.method
    }

    /// Signature of the `kind` plugin method.
    pub fn synthesize(
        &self,
        kind: InterceptionKind,
        profile: FeatureProfile,
    ) -> SynthesizedSignature {
        let synthesizer = SignatureSynthesizer::new(profile);
        let synthesizer = match self.imports {
            Some(imports) => synthesizer.with_imports(imports),
            None => synthesizer,
        };
        synthesizer.synthesize(self.target_class, self.method, kind)
    }

    /// Template attributes of the `kind` plugin method.
    pub fn attributes(
        &self,
        kind: InterceptionKind,
        profile: FeatureProfile,
    ) -> PluginMethodAttributes {
        let signature = self.synthesize(kind, profile);
        let param_doc = ParamDocBuilder::new(profile).build(self.target_class, self.method, kind);
        PluginMethodAttributes::build(&signature, param_doc, &profile)
    }

    /// Render the `kind` plugin methods with `renderer`.
    pub fn create_plugin_methods(
        &self,
        kind: InterceptionKind,
        profile: FeatureProfile,
        renderer: &dyn MethodTemplateRenderer,
    ) -> Result<Vec<PluginMethod>> {
        let attributes = self.attributes(kind, profile);
        let methods = renderer.render(kind, &attributes)?;
        info!(
            "Generated {} {kind} plugin method(s) for {}::{}",
            methods.len(),
            self.target_class.name,
            self.method.name
        );
        Ok(methods)
    }
}
