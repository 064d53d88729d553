//! Library interface for the plugingen CLI
//!
//! This module exposes descriptor loading and output formatting for
//! integration testing while keeping argument handling in main.rs.

pub mod descriptor;

pub use anyhow::Result;
pub use descriptor::PluginDescriptor;

use anyhow::Context;
use plugingen_core::{FeatureProfile, InterceptionKind, OutputConfig};
use plugingen_generator::{PluginMethodAttributes, PluginMethodsGenerator, SkeletonRenderer};

/// Render the plugin methods of every requested kind, separated by blank lines.
pub fn render_methods(
    descriptor: &PluginDescriptor,
    kinds: &[InterceptionKind],
    profile: FeatureProfile,
    output: &OutputConfig,
) -> Result<String> {
    let generator = PluginMethodsGenerator::new(&descriptor.target_class, &descriptor.method)
        .with_imports(&descriptor.imports);
    let renderer = SkeletonRenderer::new(output.clone());

    let mut rendered = Vec::new();
    for kind in kinds {
        let methods = generator
            .create_plugin_methods(*kind, profile, &renderer)
            .with_context(|| format!("Failed to render {kind} plugin"))?;
        rendered.extend(methods.iter().map(ToString::to_string));
    }
    Ok(rendered.join("\n\n"))
}

/// Attribute records of every requested kind as pretty JSON.
pub fn attributes_json(
    descriptor: &PluginDescriptor,
    kinds: &[InterceptionKind],
    profile: FeatureProfile,
) -> Result<String> {
    let generator = PluginMethodsGenerator::new(&descriptor.target_class, &descriptor.method)
        .with_imports(&descriptor.imports);
    let records: Vec<PluginMethodAttributes> = kinds
        .iter()
        .map(|kind| generator.attributes(*kind, profile))
        .collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize attributes")
}
