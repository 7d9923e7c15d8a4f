#[cfg(test)]
mod env_vars_e2e_tests {
    use std::io::Write;

    use ntex_graphql_adapter_config::{
        load_config,
        log::{LogFormat, LogLevel},
        AdapterConfigError,
    };
    use tempfile::NamedTempFile;

    use crate::testkit::EnvVarsGuard;

    const OVERRIDE_VARS: [&str; 6] = [
        "LOG_LEVEL",
        "LOG_FORMAT",
        "LOG_FILTER",
        "HOST",
        "PORT",
        "GRAPHQL_ENDPOINT",
    ];

    /// A guard with every override variable cleared, so the ambient environment can't leak in.
    fn clean_env() -> EnvVarsGuard {
        OVERRIDE_VARS
            .iter()
            .fold(EnvVarsGuard::new(), |guard, key| guard.unset(key))
    }

    fn yaml_config_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("failed to create temp config file");
        file.write_all(contents.as_bytes())
            .expect("failed to write temp config file");
        file
    }

    fn path_of(file: &NamedTempFile) -> Option<String> {
        Some(file.path().to_string_lossy().to_string())
    }

    #[ntex::test]
    async fn explicit_config_path_is_read() {
        let _env_guard = clean_env().apply().await;
        let file = yaml_config_file(
            r#"
log:
  level: error
http:
  host: 127.0.0.1
  port: 4200
  graphql_endpoint: from-file
"#,
        );

        let config = load_config(path_of(&file)).expect("config should load");

        assert_eq!(config.address(), "127.0.0.1:4200");
        assert_eq!(config.graphql_path(), "/from-file");
        assert_eq!(config.log.level, LogLevel::Error);
    }

    #[ntex::test]
    async fn explicit_config_path_must_exist() {
        let _env_guard = clean_env().apply().await;

        let err = load_config(Some("does/not/exist/adapter.yaml".to_string()))
            .expect_err("a missing explicit config file should fail");

        assert!(matches!(err, AdapterConfigError::ConfigLoadError(_)));
    }

    #[ntex::test]
    async fn default_config_file_is_picked_up_from_the_working_directory() {
        let _env_guard = clean_env().apply().await;

        // e2e/adapter.config.yaml
        let config = load_config(None).expect("config should load");

        assert_eq!(config.address(), "0.0.0.0:4100");
        assert_eq!(config.graphql_path(), "/from-default-file");
    }

    #[ntex::test]
    async fn env_vars_override_the_config_file() {
        let _env_guard = clean_env()
            .set("PORT", "5000")
            .set("HOST", "10.0.0.1")
            .set("GRAPHQL_ENDPOINT", "/from-env")
            .set("LOG_LEVEL", "WARN")
            .set("LOG_FORMAT", "json")
            .set("LOG_FILTER", "ntex=error")
            .apply()
            .await;
        let file = yaml_config_file(
            r#"
http:
  port: 4200
  graphql_endpoint: /from-file
"#,
        );

        let config = load_config(path_of(&file)).expect("config should load");

        assert_eq!(config.address(), "10.0.0.1:5000");
        assert_eq!(config.graphql_path(), "/from-env");
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.env_filter_str(), "ntex=error");
    }

    #[ntex::test]
    async fn invalid_env_var_values_are_rejected() {
        let _env_guard = clean_env().set("PORT", "not-a-port").apply().await;

        let err = load_config(None).expect_err("an invalid PORT should fail");

        assert!(matches!(err, AdapterConfigError::EnvVarLoadError(_)));
    }
}
