//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use nis_config::{ConfigError, NisConfig};
use pretty_assertions::assert_eq;

/// Point the user config directory into the jail so a real
/// `~/.config/nextinspace/config.toml` cannot leak in.
fn isolate_user_config(jail: &mut Jail) {
    let root = jail.directory().display().to_string();
    jail.set_env("HOME", &root);
    jail.set_env("XDG_CONFIG_HOME", format!("{root}/.config"));
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:8080/2.2.0"
timeout_secs = 3
user_agent = "nis-test"
max_concurrent_vehicle_requests = 1
"#,
        )?;

        let config: NisConfig = Figment::from(Serialized::defaults(NisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://127.0.0.1:8080/2.2.0");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "nis-test");
        assert_eq!(config.api.max_concurrent_vehicle_requests, 1);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "config.toml",
            r"
[general]
default_count = 5
",
        )?;

        let config: NisConfig = Figment::from(Serialized::defaults(NisConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_count, 5);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "nextinspace.toml",
            r"
[api]
timeout_secs = 30
",
        )?;

        let config = NisConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_beats_local_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "nextinspace.toml",
            r"
[general]
default_count = 3
",
        )?;
        jail.set_env("NEXTINSPACE_GENERAL__DEFAULT_COUNT", "7");
        jail.set_env("NEXTINSPACE_API__BASE_URL", "http://localhost:9999");

        let config = NisConfig::load().expect("config loads");
        assert_eq!(config.general.default_count, 7);
        assert_eq!(config.api.base_url, "http://localhost:9999");
        Ok(())
    });
}

#[test]
fn out_of_range_value_fails_validation() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("NEXTINSPACE_API__MAX_CONCURRENT_VEHICLE_REQUESTS", "0");

        let err = NisConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. }
            if field == "api.max_concurrent_vehicle_requests"));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            "nextinspace.toml",
            r#"
[api]
timeout_secs = "soon"
"#,
        )?;

        let err = NisConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_sits_under_local_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".config")?;
        jail.create_dir(".config/nextinspace")?;
        jail.create_file(
            ".config/nextinspace/config.toml",
            r"
[api]
timeout_secs = 20
max_concurrent_vehicle_requests = 2
",
        )?;
        jail.create_file(
            "nextinspace.toml",
            r"
[api]
timeout_secs = 30
",
        )?;

        let config = NisConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.max_concurrent_vehicle_requests, 2);
        Ok(())
    });
}
