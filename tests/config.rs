#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::config::{Config, GatewayConfig, CONFIG_FILE_NAME};
    use tudu::libs::data_storage::DataStorage;
    use tudu::libs::messages::Message;

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        owner: i64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://todos.example.com/api".to_string(),
                owner: 42,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config_points_at_demo_store(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.gateway.owner, 3200);
        assert!(config.gateway.api_url.starts_with("https://"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(ctx: &mut ConfigTestContext) {
        let config = Config {
            gateway: GatewayConfig {
                api_url: ctx.api_url.clone(),
                owner: ctx.owner,
            },
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.gateway.api_url, ctx.api_url);
        assert_eq!(loaded.gateway.owner, ctx.owner);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_file_reports_parse_error(_ctx: &mut ConfigTestContext) {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(config_file_path, "not json at all").unwrap();

        let err = Config::read().unwrap_err();
        assert_eq!(err.to_string(), Message::ConfigParseError.to_string());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_gateway_section_falls_back_to_default(_ctx: &mut ConfigTestContext) {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.gateway, GatewayConfig::default());
    }
}
