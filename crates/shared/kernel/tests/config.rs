use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use tubeform_kernel::config::{ConfigError, load_config, load_config_or_default};
use tubeform_kernel::domain::config::{AppConfig, LookupFailurePolicy, ValidationMode};

#[test]
#[serial]
fn loads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("tubeform.toml");
    fs::write(
        &path,
        r#"
[lookup]
endpoint = "http://127.0.0.1:8080/users"
timeout_ms = 1500
on_error = "accept"

[form]
mode = "on_submit"
"#,
    )?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.lookup.endpoint, "http://127.0.0.1:8080/users");
    assert_eq!(cfg.lookup.timeout_ms, Some(1500));
    assert_eq!(cfg.lookup.on_error, LookupFailurePolicy::Accept);
    assert_eq!(cfg.form.mode, ValidationMode::OnSubmit);
    assert!(cfg.form.reset_on_success);
    Ok(())
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let err = load_config::<AppConfig>(Some("definitely/not/here.toml"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let cfg: AppConfig = load_config_or_default(Some("definitely/not/here.toml"));
    assert_eq!(cfg.form.mode, ValidationMode::OnBlur);
}
