//! Rendering attribute records into PHP plugin methods
//!
//! The renderer returns documentation and method text as explicit pairs,
//! one [`PluginMethod`] per generated method.

use plugingen_core::entities::VOID_TYPE;
use plugingen_core::{InterceptionKind, OutputConfig, Result};
use serde::Serialize;
use std::fmt;

use crate::attributes::PluginMethodAttributes;
use crate::type_hint::ARRAY_TYPE;

/// Documentation block paired with the method it documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMethod {
    /// `/** ... */` block
    pub documentation: String,
    /// Method declaration and body
    pub body: String,
}

impl fmt::Display for PluginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.documentation, self.body)
    }
}

/// Turns plugin method attributes into method text
pub trait MethodTemplateRenderer {
    /// Render the methods for one interception kind.
    fn render(
        &self,
        kind: InterceptionKind,
        attributes: &PluginMethodAttributes,
    ) -> Result<Vec<PluginMethod>>;
}

/// Built-in method skeletons, one per interception kind
#[derive(Debug, Clone, Default)]
pub struct SkeletonRenderer {
    output: OutputConfig,
}

impl SkeletonRenderer {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    fn documentation(&self, attributes: &PluginMethodAttributes, return_doc: &str) -> String {
        let mut doc = String::from("/**\n");
        if !attributes.param_doc.is_empty() {
            doc.push_str(&attributes.param_doc);
            doc.push('\n');
        }
        doc.push_str(&format!(" * @return {return_doc}\n */"));
        doc
    }

    fn declaration(
        &self,
        attributes: &PluginMethodAttributes,
        return_decl: Option<&str>,
    ) -> String {
        let mut line = format!(
            "{} function {}({})",
            self.output.method_visibility, attributes.name, attributes.param_list
        );
        if let Some(decl) = return_decl {
            line.push_str(": ");
            line.push_str(decl);
        }
        line
    }

    fn method(&self, declaration: String, statement: &str) -> String {
        let indent = &self.output.indent;
        format!(
            "{declaration}\n{{\n{indent}{}\n{indent}{statement}\n}}",
            self.output.body_comment
        )
    }
}

impl MethodTemplateRenderer for SkeletonRenderer {
    fn render(
        &self,
        kind: InterceptionKind,
        attributes: &PluginMethodAttributes,
    ) -> Result<Vec<PluginMethod>> {
        let void = attributes.void_return_type.as_deref();
        let return_type = attributes.return_type.as_deref();
        let args = attributes.return_variables.as_deref().unwrap_or("");

        let (return_doc, return_decl, statement) = match kind {
            InterceptionKind::Before => (ARRAY_TYPE, None, format!("return [{args}];")),
            InterceptionKind::After => match (return_type, void) {
                (Some(hint), _) => (hint, Some(hint), format!("return {args};")),
                (None, Some(void)) => (VOID_TYPE, Some(void), "return;".to_string()),
                (None, None) => ("mixed", None, format!("return {args};")),
            },
            InterceptionKind::Around => match void {
                Some(void) => (VOID_TYPE, Some(void), format!("$proceed({args});")),
                None => ("mixed", None, format!("return $proceed({args});")),
            },
        };

        Ok(vec![PluginMethod {
            documentation: self.documentation(attributes, return_doc),
            body: self.method(self.declaration(attributes, return_decl), &statement),
        }])
    }
}
