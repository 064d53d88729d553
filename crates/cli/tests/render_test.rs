//! Integration tests for descriptor loading and rendering

use plugingen::{attributes_json, render_methods, PluginDescriptor};
use plugingen_core::{InterceptionKind, OutputConfig, PhpLanguageLevel};
use pretty_assertions::assert_eq;
use std::io::Write;

const DESCRIPTOR: &str = r#"{
    "class": "\\Magento\\Catalog\\Model\\Product",
    "method": {
        "name": "setPrice",
        "parameters": [
            { "name": "price", "types": ["\\float"], "declaration": "float $price" }
        ],
        "return_types": ["\\Magento\\Catalog\\Model\\Product"]
    }
}"#;

#[test]
fn test_load_descriptor_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(DESCRIPTOR.as_bytes())
        .expect("write descriptor");

    let descriptor = PluginDescriptor::load(file.path()).expect("descriptor loads");
    assert_eq!(descriptor.method.name, "setPrice");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(PluginDescriptor::load(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_render_before_and_around() {
    let descriptor = PluginDescriptor::from_json(DESCRIPTOR).expect("valid descriptor");
    let output = render_methods(
        &descriptor,
        &[InterceptionKind::Before, InterceptionKind::Around],
        PhpLanguageLevel::Php74.feature_profile(),
        &OutputConfig::default(),
    )
    .expect("rendering succeeds");

    let expected = [
        "/**",
        " * @param \\Magento\\Catalog\\Model\\Product $subject",
        " * @param float $price",
        " * @return array",
        " */",
        "public function beforeSetPrice(Product $subject, float $price)",
        "{",
        "    // Implement plugin method.",
        "    return [$price];",
        "}",
        "",
        "/**",
        " * @param \\Magento\\Catalog\\Model\\Product $subject",
        " * @param callable $proceed",
        " * @param float $price",
        " * @return mixed",
        " */",
        "public function aroundSetPrice(Product $subject, callable $proceed, float $price)",
        "{",
        "    // Implement plugin method.",
        "    return $proceed($price);",
        "}",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn test_attributes_json_omits_absent_keys() {
    let descriptor = PluginDescriptor::from_json(DESCRIPTOR).expect("valid descriptor");
    let json = attributes_json(
        &descriptor,
        &[InterceptionKind::After],
        PhpLanguageLevel::Php56.feature_profile(),
    )
    .expect("serializes");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let record = &value[0];
    assert_eq!(record["NAME"], "afterSetPrice");
    assert_eq!(record["PARAM_LIST"], "Product $subject, Product $result");
    assert!(record.get("RETURN_TYPE").is_none());
    assert!(record.get("VOID_RETURN_TYPE").is_none());
}
