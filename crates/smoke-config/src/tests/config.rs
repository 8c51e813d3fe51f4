//! Unit tests for config loading, validation and env overrides.

use crate::Config;

use std::env;
use std::io::Write;

use serial_test::serial;

/// RAII guard for environment variables - automatically restores on drop
struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

#[test]
fn defaults_match_the_manual_check() {
    let config = Config::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.http.user_id, 1);
    assert_eq!(config.http.page, 1);
    assert_eq!(config.http.size, 10);
    assert_eq!(config.realtime.token, "test-token");
    assert_eq!(config.realtime.listen_window_secs, 5);
    assert!(!config.runner.strict);
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn base_url_without_scheme_is_rejected() {
    let config = Config {
        base_url: "localhost:8080".to_string(),
        ..Config::default()
    };

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("base_url"));
}

#[test]
fn trailing_sections_may_be_omitted_in_toml() {
    let toml = r#"
        base_url = "https://staging.example.com"

        [http]
        user_id = 42
    "#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.base_url, "https://staging.example.com");
    assert_eq!(config.http.user_id, 42);
    // untouched sections fall back to defaults
    assert_eq!(config.http.size, 10);
    assert_eq!(config.realtime.listen_window_secs, 5);
}

#[test]
#[serial]
fn load_reads_explicit_toml_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
base_url = "http://10.0.0.5:9000"

[runner]
strict = true
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.base_url, "http://10.0.0.5:9000");
    assert!(config.runner.strict);
}

#[test]
#[serial]
fn load_fails_on_missing_explicit_path() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/smoke.toml")));
    assert!(result.is_err());
}

#[test]
#[serial]
fn env_overrides_apply_after_file() {
    let _base = EnvGuard::set("SMOKE_BASE_URL", "http://override:1234");
    let _size = EnvGuard::set("SMOKE_HTTP_PAGE_SIZE", "25");
    let _strict = EnvGuard::set("SMOKE_STRICT", "1");

    let config = Config::load(None).unwrap();

    assert_eq!(config.base_url, "http://override:1234");
    assert_eq!(config.http.size, 25);
    assert!(config.runner.strict);
}

#[test]
#[serial]
fn unparseable_env_override_is_ignored() {
    let _guard = EnvGuard::set("SMOKE_HTTP_PAGE_SIZE", "not-a-number");

    let config = Config::load(None).unwrap();

    assert_eq!(config.http.size, 10);
}
