use super::*;
use clap::Parser;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("flatlit.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn empty_config_uses_defaults() {
    let options = parse_options("{}").unwrap();
    assert_eq!(options, FlattenOptions::default());
    assert!(options.flatten_accessors);
    assert_eq!(options.max_nesting_depth, 100);
}

#[test]
fn config_keys_are_camel_case() {
    let options = parse_options(r#"{ "flattenAccessors": false, "maxNestingDepth": 3 }"#).unwrap();
    assert!(!options.flatten_accessors);
    assert_eq!(options.max_nesting_depth, 3);
}

#[test]
fn unknown_config_key_is_rejected() {
    let err = parse_options(r#"{ "flatten_accessors": false }"#).unwrap_err();
    assert!(
        format!("{err:#}").contains("unknown field"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn missing_config_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_options(&path).unwrap_err();

    assert!(err.to_string().contains("failed to read config"));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_config_file_reports_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let err = load_options(&path).unwrap_err();

    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn cli_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "flattenAccessors": true, "maxNestingDepth": 8 }"#);
    let config = path.to_string_lossy().into_owned();

    let args = CliArgs::try_parse_from([
        "flatlit",
        "input.json",
        "--config",
        config.as_str(),
        "--no-accessors",
        "--max-depth",
        "2",
    ])
    .unwrap();
    let options = resolve_options(&args).unwrap();

    assert!(!options.flatten_accessors);
    assert_eq!(options.max_nesting_depth, 2);
}

#[test]
fn config_file_applies_without_flags() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "maxNestingDepth": 5 }"#);
    let config = path.to_string_lossy().into_owned();

    let args =
        CliArgs::try_parse_from(["flatlit", "input.json", "-c", config.as_str()]).unwrap();
    let options = resolve_options(&args).unwrap();

    assert!(options.flatten_accessors);
    assert_eq!(options.max_nesting_depth, 5);
}

#[test]
fn no_config_and_no_flags_gives_defaults() {
    let args = CliArgs::try_parse_from(["flatlit", "input.json"]).unwrap();
    assert_eq!(resolve_options(&args).unwrap(), FlattenOptions::default());
    assert!(!args.summary);
    assert!(args.output.is_none());
}
