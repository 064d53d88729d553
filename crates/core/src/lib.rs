//! Core types for the plugin method generator
//!
//! This crate provides the foundational abstractions used by the generator
//! and the CLI, including:
//!
//! - **Entities**: the intercepted method, its parameters and candidate types
//! - **Features**: PHP language levels and the capabilities they unlock
//! - **Qualified names**: PHP namespaced name handling
//! - **Configuration**: layered TOML/environment configuration
//! - **Error handling**: Unified error types
//!

pub mod config;
pub mod entities;
pub mod error;
pub mod features;
pub mod qualified_name;

// Re-export main types for convenience
pub use config::{Config, OutputConfig, PhpConfig};
pub use entities::{
    is_null_type, InterceptionKind, MethodParameter, MethodParameterBuilder, TargetClass,
    TargetMethod, TargetMethodBuilder, TypeCandidates, NULL_TYPE, VOID_TYPE,
};
pub use error::{Error, Result, ResultExt};
pub use features::{FeatureProfile, PhpLanguageLevel};
pub use qualified_name::PhpQualifiedName;

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{InterceptionKind, TargetClass, TargetMethod};
    pub use crate::error::{Result, ResultExt};
    pub use crate::features::FeatureProfile;
}
