//! Pass-through expression appended to generated method bodies

use plugingen_core::{InterceptionKind, MethodParameter};

/// Compose the return-variables expression for a kind.
///
/// After always passes `$result` on. Before and Around pass the original
/// arguments as `$a, $b`; with no original parameters there is nothing to
/// pass and the result is `None`, never an empty string.
pub fn compose_return_variables(
    kind: InterceptionKind,
    original_params: &[MethodParameter],
) -> Option<String> {
    match kind {
        InterceptionKind::After => Some("$result".to_string()),
        InterceptionKind::Before | InterceptionKind::Around => {
            if original_params.is_empty() {
                return None;
            }
            Some(
                original_params
                    .iter()
                    .map(|param| format!("${}", param.name))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
    }
}
