use plugingen_core::config::Config;
use plugingen_core::{FeatureProfile, PhpLanguageLevel};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

// Loading reads PLUGINGEN_* variables, which one test sets
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_with_explicit_path() {
    let _guard = env_lock();
    let file = write_config(
        r#"
        [php]
        language_level = "5.6"
    "#,
    );

    let config = Config::load(Some(file.path())).expect("Failed to load config");
    assert_eq!(config.php.language_level, PhpLanguageLevel::Php56);
    assert_eq!(config.feature_profile(), FeatureProfile::none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_environment_overrides_file() {
    let _guard = env_lock();
    let file = write_config(
        r#"
        [php]
        language_level = "7.0"

        [output]
        method_visibility = "public"
    "#,
    );

    std::env::set_var("PLUGINGEN_PHP__LANGUAGE_LEVEL", "8.1");
    std::env::set_var("PLUGINGEN_OUTPUT__BODY_COMMENT", "// generated");
    let result = Config::from_file(file.path());
    std::env::remove_var("PLUGINGEN_PHP__LANGUAGE_LEVEL");
    std::env::remove_var("PLUGINGEN_OUTPUT__BODY_COMMENT");

    let config = result.expect("Failed to load config");
    assert_eq!(config.php.language_level, PhpLanguageLevel::Php81);
    assert_eq!(config.output.body_comment, "// generated");
    assert_eq!(config.feature_profile(), FeatureProfile::all());
}

#[test]
fn test_invalid_visibility_fails_validation() {
    let _guard = env_lock();
    let file = write_config(
        r#"
        [output]
        method_visibility = "friend"
    "#,
    );

    let config = Config::load(Some(file.path())).expect("Failed to load config");
    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid method visibility"));
}
