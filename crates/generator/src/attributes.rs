//! Named attributes handed to the method template renderer
//!
//! Absent values are absent keys: renderers treat a missing attribute as
//! "no declaration", so no field is ever set to an empty string.

use plugingen_core::entities::VOID_TYPE;
use plugingen_core::FeatureProfile;
use serde::Serialize;

use crate::signature::SynthesizedSignature;

pub const NAME: &str = "NAME";
pub const PARAM_LIST: &str = "PARAM_LIST";
pub const PARAM_DOC: &str = "PARAM_DOC";
pub const RETURN_VARIABLES: &str = "RETURN_VARIABLES";
pub const SCALAR_TYPE_HINT: &str = "SCALAR_TYPE_HINT";
pub const VOID_RETURN_TYPE: &str = "VOID_RETURN_TYPE";
pub const RETURN_TYPE: &str = "RETURN_TYPE";

/// Attribute record for one plugin method template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PluginMethodAttributes {
    pub name: String,
    pub param_list: String,
    pub param_doc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_variables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scalar_type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_return_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl PluginMethodAttributes {
    /// Map a synthesized signature and its documentation to attributes.
    pub fn build(
        signature: &SynthesizedSignature,
        param_doc: String,
        profile: &FeatureProfile,
    ) -> Self {
        let return_type = signature
            .return_type
            .clone()
            .filter(|hint| !hint.is_empty());

        Self {
            name: signature.method_name.clone(),
            param_list: signature.parameter_list(),
            param_doc,
            return_variables: signature.return_variables.clone(),
            scalar_type_hint: return_type
                .clone()
                .filter(|_| profile.scalar_type_hints),
            void_return_type: (profile.void_return_type && signature.target_returns_void)
                .then(|| VOID_TYPE.to_string()),
            return_type: return_type.filter(|_| profile.return_type_declarations),
        }
    }

    /// Key/value pairs in template order, absent attributes skipped.
    pub fn to_properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = vec![
            (NAME, self.name.clone()),
            (PARAM_DOC, self.param_doc.clone()),
            (PARAM_LIST, self.param_list.clone()),
        ];
        let optional = [
            (RETURN_VARIABLES, &self.return_variables),
            (SCALAR_TYPE_HINT, &self.scalar_type_hint),
            (VOID_RETURN_TYPE, &self.void_return_type),
            (RETURN_TYPE, &self.return_type),
        ];
        properties.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|value| (key, value))),
        );
        properties
    }

    /// Look up an attribute by its template key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            NAME => Some(&self.name),
            PARAM_LIST => Some(&self.param_list),
            PARAM_DOC => Some(&self.param_doc),
            RETURN_VARIABLES => self.return_variables.as_deref(),
            SCALAR_TYPE_HINT => self.scalar_type_hint.as_deref(),
            VOID_RETURN_TYPE => self.void_return_type.as_deref(),
            RETURN_TYPE => self.return_type.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugingen_core::InterceptionKind;

    fn signature(
        kind: InterceptionKind,
        return_type: Option<&str>,
        return_variables: Option<&str>,
        void: bool,
    ) -> SynthesizedSignature {
        SynthesizedSignature {
            method_name: format!("{kind}Load"),
            kind,
            parameters: vec!["Product $subject".to_string()],
            return_type: return_type.map(String::from),
            return_variables: return_variables.map(String::from),
            target_returns_void: void,
        }
    }

    #[test]
    fn test_absent_values_are_absent_keys() {
        let attrs = PluginMethodAttributes::build(
            &signature(InterceptionKind::Before, None, None, false),
            " * @param \\Foo $subject".to_string(),
            &FeatureProfile::all(),
        );
        let keys: Vec<_> = attrs.to_properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![NAME, PARAM_DOC, PARAM_LIST]);
        assert_eq!(attrs.get(RETURN_VARIABLES), None);
    }

    #[test]
    fn test_return_type_is_gated_by_profile() {
        let sig = signature(InterceptionKind::After, Some("int"), Some("$result"), false);

        let attrs = PluginMethodAttributes::build(&sig, String::new(), &FeatureProfile::all());
        assert_eq!(attrs.return_type.as_deref(), Some("int"));
        assert_eq!(attrs.scalar_type_hint.as_deref(), Some("int"));

        let attrs = PluginMethodAttributes::build(&sig, String::new(), &FeatureProfile::none());
        assert_eq!(attrs.return_type, None);
        assert_eq!(attrs.scalar_type_hint, None);
    }

    #[test]
    fn test_void_return_type_requires_void_target_and_support() {
        let sig = signature(InterceptionKind::After, None, Some("$result"), true);

        let attrs = PluginMethodAttributes::build(&sig, String::new(), &FeatureProfile::all());
        assert_eq!(attrs.get(VOID_RETURN_TYPE), Some("void"));

        let attrs = PluginMethodAttributes::build(&sig, String::new(), &FeatureProfile::none());
        assert_eq!(attrs.get(VOID_RETURN_TYPE), None);

        let sig = signature(InterceptionKind::After, None, Some("$result"), false);
        let attrs = PluginMethodAttributes::build(&sig, String::new(), &FeatureProfile::all());
        assert_eq!(attrs.get(VOID_RETURN_TYPE), None);
    }

    #[test]
    fn test_serializes_with_template_keys() {
        let attrs = PluginMethodAttributes::build(
            &signature(InterceptionKind::After, Some("int"), Some("$result"), false),
            String::new(),
            &FeatureProfile::all(),
        );
        let json = serde_json::to_value(&attrs).unwrap_or_default();
        assert_eq!(json["NAME"], "afterLoad");
        assert_eq!(json["RETURN_TYPE"], "int");
        assert!(json.get("VOID_RETURN_TYPE").is_none());
    }
}
