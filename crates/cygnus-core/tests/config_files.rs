// Cygnus Config File Tests
//
// Loading build configuration from files on disk.

use std::path::PathBuf;

use cygnus_core::{default_config_content, BuildConfig, ConfigError, Variant};

fn write_config(name: &str, content: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cygnus-config-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_shipped_config() {
    let path = write_config("shipped.toml", default_config_content());
    let config = BuildConfig::from_file(&path).unwrap();
    assert_eq!(config.source_path(), Some(path.as_path()));
    assert_eq!(config.tapping_term_ms, 200);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_terminal_variant() {
    let path = write_config(
        "terminal.toml",
        "variant = \"terminal\"\ntapping_term_ms = 175\n",
    );
    let config = BuildConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.variant, Variant::Terminal);
    assert_eq!(config.dispatcher().tapping_term(), 175);
}

#[test]
fn test_reload_picks_up_changes() {
    let path = write_config("reload.toml", "combo_term_ms = 40\n");
    let mut config = BuildConfig::from_file(&path).unwrap();
    assert_eq!(config.combo_term_ms, 40);

    std::fs::write(&path, "combo_term_ms = 25\n").unwrap();
    config.reload().unwrap();
    assert_eq!(config.combo_term_ms, 25);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("does-not-exist.toml");
    assert!(matches!(
        BuildConfig::from_file(&path),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_invalid_file_reports_reason() {
    let path = write_config("invalid.toml", "combo_count = 5\n");
    let config = BuildConfig::from_file(&path).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("combo_count is 5"));
}

#[test]
fn test_malformed_toml() {
    let path = write_config("malformed.toml", "tapping_term_ms = \"fast\"\n");
    assert!(matches!(
        BuildConfig::from_file(&path),
        Err(ConfigError::TomlParse(_))
    ));
}
