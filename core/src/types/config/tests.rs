use super::*;
use std::fs;
use tempfile::TempDir;

mod load {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window]\nwidth = 640.0\n").unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.height, 400.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn full_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[window]
width = 800.0
height = 600.0
min_width = 400.0
min_height = 300.0

[logging]
filter = "elist_core=debug"
"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.window.inner_size(), [800.0, 600.0]);
        assert_eq!(config.window.min_inner_size(), [400.0, 300.0]);
        assert_eq!(config.logging.filter, "elist_core=debug");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppConfigError::Parse(_)));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window]\nwidth = \"wide\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppConfigError::Parse(_)));
    }
}

mod path {
    use super::*;
    use std::path::Path;

    #[test]
    fn path_is_namespaced_under_config_dir() {
        let path = AppConfig::path(Path::new("/home/user/.config"));
        assert_eq!(path, Path::new("/home/user/.config/elist/config.toml"));
    }
}

mod validate {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_empty());
    }

    #[test]
    fn zero_and_negative_sizes_are_reported() {
        let mut config = AppConfig::default();
        config.window.width = 0.0;
        config.window.min_height = -10.0;

        let errors = config.validate();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("window.width")));
        assert!(errors.iter().any(|e| e.contains("window.min_height")));
    }

    #[test]
    fn empty_filter_is_reported() {
        let mut config = AppConfig::default();
        config.logging.filter = "  ".to_string();

        assert_eq!(config.validate(), vec!["logging.filter must not be empty"]);
    }

    #[test]
    fn invalid_values_are_replaced_with_defaults() {
        let mut config = AppConfig::default();
        config.window.width = 0.0;
        config.window.height = 720.0;
        config.logging.filter = String::new();

        let fixed = config.with_defaults_for_invalid();

        assert_eq!(fixed.window.width, 500.0);
        assert_eq!(fixed.window.height, 720.0);
        assert_eq!(fixed.logging.filter, "info");
        assert!(fixed.validate().is_empty());
    }
}
