//! Config document parsing tests: the example file, unknown fields,
//! and the parse/schema failure split.

use std::fs;

use tempfile::TempDir;
use workforge_config::{
    load, select_profile, write_example, ConfigError, HookKind, CONFIG_FILE_NAME, EXAMPLE_CONFIG,
};

#[test]
fn example_config_parses_and_selects_default() {
    let dir = TempDir::new().expect("tempdir");
    write_example(dir.path()).expect("scaffold");

    let config = load(dir.path(), false).expect("load");
    let profile = select_profile(&config, None).expect("select");
    assert_eq!(profile, "default");

    let template = &config[&profile];
    assert_eq!(template.log_level.as_deref(), Some("DEBUG"));
    assert_eq!(template.hook_commands(HookKind::OnLoad).len(), 1);
    let tmux = template.tmux.as_ref().expect("tmux block");
    assert!(!tmux.attach);
    assert_eq!(tmux.session_name.as_deref(), Some("test_prj"));
    assert_eq!(tmux.windows.as_deref().map(|w| w.len()), Some(2));
}

#[test]
fn scaffold_writes_the_documented_example() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_example(dir.path()).expect("scaffold");
    assert!(path.ends_with(CONFIG_FILE_NAME));
    assert_eq!(fs::read_to_string(&path).expect("read"), EXAMPLE_CONFIG);
}

#[test]
fn gwt_load_reads_the_shared_root_config() {
    let root = TempDir::new().expect("tempdir");
    let leaf = root.path().join("main");
    fs::create_dir(&leaf).expect("mkdir");
    write_example(root.path()).expect("scaffold at root");

    let config = load(&leaf, true).expect("load through leaf");
    assert!(config.contains_key("default"));
}

#[test]
fn unknown_template_fields_are_preserved_in_extra() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default:\n  log_level: INFO\n  editor: nvim\n  custom:\n    nested: true\n",
    )
    .expect("write");

    let config = load(dir.path(), false).expect("load");
    let template = &config["default"];
    assert_eq!(template.log_level.as_deref(), Some("INFO"));
    assert_eq!(template.extra.len(), 2);
    assert!(template.extra.contains_key("editor"));
    assert!(template.extra.contains_key("custom"));
}

#[test]
fn empty_file_is_an_empty_document() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE_NAME), "   \n").expect("write");
    let config = load(dir.path(), false).expect("load");
    assert!(config.is_empty());
}

#[test]
fn comment_only_file_is_an_empty_document() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE_NAME), "# nothing here yet\n").expect("write");
    let config = load(dir.path(), false).expect("load");
    assert!(config.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = load(dir.path(), false).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got: {err}");
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default: [unclosed\n  broken: {",
    )
    .expect("write");
    let err = load(dir.path(), false).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn wrong_shape_is_a_schema_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "- a list\n- not a mapping\n",
    )
    .expect("write");
    let err = load(dir.path(), false).unwrap_err();
    assert!(matches!(err, ConfigError::Schema { .. }), "got: {err}");
}

#[test]
fn hook_lists_keep_their_order() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default:\n  hooks:\n    on_load:\n      - first\n      - second\n      - third\n",
    )
    .expect("write");

    let config = load(dir.path(), false).expect("load");
    let commands = config["default"].hook_commands(HookKind::OnLoad);
    assert_eq!(commands, ["first", "second", "third"]);
}
