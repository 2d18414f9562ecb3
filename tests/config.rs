//! Tests for configuration loading from YAML files and the environment.

use genprompt::config::{HuggingFaceConfig, VertexConfig, HUGGINGFACE_API_KEY_ENV};
use genprompt::Error;

#[test]
fn test_vertex_yaml_file_loads_with_defaults_for_absent_fields() {
    let temp_file = std::env::temp_dir().join("genprompt_vertex_config.yaml");
    std::fs::write(
        &temp_file,
        r#"
api_key: file-key
chat:
  model: chat-bison-002
  temperature: 0.2
  candidate_count: 4
"#,
    )
    .unwrap();

    let config = VertexConfig::from_yaml_file(&temp_file).expect("config should load");
    let _ = std::fs::remove_file(&temp_file);

    assert_eq!(config.api_key, "file-key");
    assert_eq!(config.chat.model, "chat-bison-002");
    assert_eq!(config.chat.temperature, Some(0.2));
    assert_eq!(config.chat.candidate_count, Some(4));
    assert_eq!(
        config.base_url,
        "https://generativelanguage.googleapis.com/v1beta3"
    );
    assert_eq!(config.embedding.model, "embedding-gecko-001");
}

#[test]
fn test_huggingface_yaml_file_keeps_token_budget_default() {
    let temp_file = std::env::temp_dir().join("genprompt_hf_config.yaml");
    std::fs::write(
        &temp_file,
        "url: https://example.endpoints.huggingface.cloud\napi_key: tok\n",
    )
    .unwrap();

    let config = HuggingFaceConfig::from_yaml_file(&temp_file).expect("config should load");
    let _ = std::fs::remove_file(&temp_file);

    assert_eq!(config.url, "https://example.endpoints.huggingface.cloud");
    assert_eq!(config.max_new_tokens, 1000);
    assert!(config.temperature.is_none());
}

#[test]
fn test_malformed_yaml_is_a_configuration_error() {
    let temp_file = std::env::temp_dir().join("genprompt_bad_config.yaml");
    std::fs::write(&temp_file, "chat: [not, a, mapping\n").unwrap();

    let result = VertexConfig::from_yaml_file(&temp_file);
    let _ = std::fs::remove_file(&temp_file);

    match result {
        Err(Error::Configuration(message)) => {
            assert!(message.contains("genprompt_bad_config.yaml"));
        }
        other => panic!("expected a configuration error, got: {other:?}"),
    }
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let missing = std::env::temp_dir().join("genprompt_absent_config.yaml");
    let err = VertexConfig::from_yaml_file(&missing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_empty_api_key_falls_back_to_environment() {
    std::env::set_var(HUGGINGFACE_API_KEY_ENV, "env-token");
    let config = HuggingFaceConfig::default();
    let resolved = config.resolve_api_key().unwrap();
    std::env::remove_var(HUGGINGFACE_API_KEY_ENV);

    assert_eq!(resolved, "env-token");
}
