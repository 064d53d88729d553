//! Plugin method naming

use plugingen_core::InterceptionKind;

/// `<kind><MethodName>`: `save` intercepted before becomes `beforeSave`.
pub fn compose_method_name(kind: InterceptionKind, method_name: &str) -> String {
    let mut chars = method_name.chars();
    let suffix: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{kind}{suffix}")
}
