use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_mafcoder_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, mafcoder_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
name = "gpt-4.1"

[tools]
command_allowlist = ["git"]
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4.1");
    assert_eq!(config.tools.command_allowlist, vec!["git"]);
    // Defaults preserved
    assert_eq!(config.model.api_key_env, "OPENAI_API_KEY");
    assert!(config.agent.web_search);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, mafcoder_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[agent]\nmax_tool_rounds = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.agent.max_tool_rounds, 0);
}

#[test]
fn missing_file_is_created_from_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mafcoder").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4o");
    assert!(path.exists());

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.agent.max_tool_rounds, 10);
}

#[test]
fn existing_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nname = \"gpt-4.1-mini\"\n").unwrap();

    let config = load_or_create(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4.1-mini");
    assert!(std::fs::read_to_string(&path).unwrap().contains("gpt-4.1-mini"));
}

#[test]
fn parse_errors_are_not_replaced_by_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model\n").unwrap();

    let err = load_or_create(&path).unwrap_err();
    assert!(matches!(err, mafcoder_common::ConfigError::ParseError(_)));
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::MafConfig;

    let config: MafConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.model.name, "gpt-4o");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn config_path_is_under_mafcoder() {
    if let Ok(path) = config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("mafcoder"));
        assert!(path_str.ends_with("config.toml"));
    }
}
