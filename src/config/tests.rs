//! Configuration tests

use super::*;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.version, parsed.version);
    assert_eq!(config.provider, parsed.provider);
    assert_eq!(config.output, parsed.output);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.provider.kubeconfig = Some("~/.kube/config".to_string());
    config.provider.context = Some("kind-dev".to_string());
    config.output.format = OutputFormat::Yaml;

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.provider, config.provider);
    assert_eq!(loaded.output.format, OutputFormat::Yaml);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();

    assert!(config.validate().is_ok());
    assert!(!config.provider.offline);
    assert_eq!(config.provider.kubeconfig, None);
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.version = "2.0".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unsupported configuration version"));
}

#[rstest]
#[case::kubeconfig(ProviderConfig { kubeconfig: Some("".to_string()), ..Default::default() }, "kubeconfig")]
#[case::context(ProviderConfig { context: Some("  ".to_string()), ..Default::default() }, "context")]
#[case::cluster(ProviderConfig { cluster: Some("".to_string()), ..Default::default() }, "cluster")]
#[case::user(ProviderConfig { user: Some("".to_string()), ..Default::default() }, "user")]
fn test_empty_provider_fields_are_rejected(#[case] provider: ProviderConfig, #[case] field: &str) {
    let config = Config {
        provider,
        ..Config::default()
    };

    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), format!("Provider {} cannot be empty", field));
}

#[test]
fn test_invalid_file_reports_path() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "version: [").unwrap();

    let err = Config::from_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration file"));
}

#[test]
fn test_has_overrides() {
    let mut provider = ProviderConfig::default();
    assert!(!provider.has_overrides());

    provider.user = Some("admin".to_string());
    assert!(provider.has_overrides());
}

#[rstest]
#[case("json", OutputFormat::Json)]
#[case("YAML", OutputFormat::Yaml)]
#[case("yml", OutputFormat::Yaml)]
fn test_output_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
    assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
}

#[test]
fn test_output_format_rejects_unknown() {
    assert!("toml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_render() {
    let value = serde_json::json!({"id": "web/gloo"});

    let compact = OutputConfig {
        format: OutputFormat::Json,
        pretty: false,
    };
    assert_eq!(compact.render(&value).unwrap(), r#"{"id":"web/gloo"}"#);

    let yaml = OutputConfig {
        format: OutputFormat::Yaml,
        pretty: true,
    };
    assert_eq!(yaml.render(&value).unwrap(), "id: web/gloo\n");
}
