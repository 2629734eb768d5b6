use super::*;
use tempfile::tempdir;

#[test]
fn ensure_config_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("conf").join("molecule.json");

    ensure_config_file(&path).unwrap();
    assert_eq!(load_config(&path), Some(ShellConfig::default()));

    std::fs::write(&path, r#"{ "shellUrl": "shell://custom" }"#).unwrap();
    ensure_config_file(&path).unwrap();
    assert_eq!(load_config(&path).unwrap().shell_url, "shell://custom");
}

#[test]
fn load_reads_file_and_remembers_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("molecule.json");
    std::fs::write(&path, r#"{ "shellUrl": "shell://index", "logFilter": "debug" }"#).unwrap();

    let service = ConfigService::load(&path);

    assert_eq!(service.config().shell_url, "shell://index");
    assert_eq!(service.config().log_filter.as_deref(), Some("debug"));
    assert_eq!(service.path(), Some(path.as_path()));
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let missing = ConfigService::load(&dir.path().join("absent.json"));
    assert_eq!(missing.config(), &ShellConfig::default());

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{").unwrap();
    assert_eq!(ConfigService::load(&broken).config(), &ShellConfig::default());
}

#[test]
fn shell_url_can_be_overridden() {
    let mut service = ConfigService::new();
    assert!(service.path().is_none());

    service.set_shell_url("shell://other");

    assert_eq!(service.into_config().shell_url, "shell://other");
}
