use iconkit::Settings;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_override_with_custom_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    fs::write(&config_path, "[icons]\ndefault_limit = 20\n").unwrap();

    unsafe {
        // Double underscore separates nesting levels
        env::set_var("ICONKIT_ICONS__DEFAULT_LIMIT", "42");
        env::set_var("ICONKIT_SERVER__BIND", "0.0.0.0:9999");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    unsafe {
        env::remove_var("ICONKIT_ICONS__DEFAULT_LIMIT");
        env::remove_var("ICONKIT_SERVER__BIND");
    }

    assert_eq!(settings.icons.default_limit, 42, "env beats the file");
    assert_eq!(settings.server.bind, "0.0.0.0:9999");
    assert_eq!(settings.logging.default, "warn");
}
