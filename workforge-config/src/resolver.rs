//! Config file location, loading, scaffolding, and profile selection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::{self, Config};

pub const CONFIG_FILE_NAME: &str = ".wfconfig.yml";
pub const DEFAULT_PROFILE: &str = "default";

/// Scaffolded into freshly initialized projects.
pub const EXAMPLE_CONFIG: &str = r#"default:
  log_level: "DEBUG"
  hooks:
    on_load:
      - 'echo "Welcome in your project!"'
    on_shell_run_in:
      - 'echo "Starting shell session..."'
    on_shell_run_out:
      - 'echo "Shell session ended."'
  tmux:
    attach: false
    session_name: "test_prj"
    windows:
      - "nvim ."
      - "htop"
"#;

/// Where the config file lives for a project.
///
/// Branch leaves under a worktree root do not carry their own config; the
/// shared root one directory up does.
pub fn config_path(project_path: &Path, is_gwt: bool) -> PathBuf {
    if is_gwt {
        project_path.join("..").join(CONFIG_FILE_NAME)
    } else {
        project_path.join(CONFIG_FILE_NAME)
    }
}

/// Load and validate the config document for a project.
///
/// Loaded fresh on every operation, never cached.
pub fn load(project_path: &Path, is_gwt: bool) -> Result<Config, ConfigError> {
    let path = config_path(project_path, is_gwt);
    let raw = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    parse(&raw, &path)
}

/// Read → YAML parse → typed conversion → validation. Each stage keeps its
/// own failure class so callers can tell a broken file from a wrong one.
fn parse(raw: &str, path: &Path) -> Result<Config, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(Config::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if value.is_null() {
        return Ok(Config::new());
    }

    let config: Config = serde_yaml::from_value(value).map_err(|e| ConfigError::Schema {
        path: path.to_path_buf(),
        violations: vec![e.to_string()],
    })?;
    schema::validate(&config).map_err(|violations| ConfigError::Schema {
        path: path.to_path_buf(),
        violations,
    })?;
    Ok(config)
}

/// Write the example config into `dir`, overwriting any existing file.
pub fn write_example(dir: &Path) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, EXAMPLE_CONFIG).map_err(|e| ConfigError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// Pick the active profile.
///
/// In order: an explicitly requested name must exist verbatim; a document
/// with exactly one profile uses it regardless of its name; a profile
/// literally named `default` wins; anything else is ambiguous.
pub fn select_profile(config: &Config, requested: Option<&str>) -> Result<String, ConfigError> {
    if let Some(requested) = requested.filter(|name| !name.trim().is_empty()) {
        if !config.contains_key(requested) {
            return Err(ConfigError::ProfileNotFound {
                name: requested.to_string(),
            });
        }
        return Ok(requested.to_string());
    }

    match config.len() {
        0 => Err(ConfigError::NoProfiles),
        1 => Ok(config.keys().next().expect("len == 1").clone()),
        _ if config.contains_key(DEFAULT_PROFILE) => Ok(DEFAULT_PROFILE.to_string()),
        _ => Err(ConfigError::AmbiguousProfile),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::schema::Template;

    fn config_of(names: &[&str]) -> Config {
        names
            .iter()
            .map(|name| (name.to_string(), Template::default()))
            .collect()
    }

    #[test]
    fn gwt_config_lives_one_directory_up() {
        let path = config_path(Path::new("/code/api/main"), true);
        assert_eq!(path, Path::new("/code/api/main/../.wfconfig.yml"));
    }

    #[test]
    fn plain_config_lives_in_the_project() {
        let path = config_path(Path::new("/code/api"), false);
        assert_eq!(path, Path::new("/code/api/.wfconfig.yml"));
    }

    #[test]
    fn single_profile_wins_regardless_of_name() {
        let config = config_of(&["ci"]);
        assert_eq!(select_profile(&config, None).expect("select"), "ci");
    }

    #[test]
    fn default_profile_wins_among_many() {
        let config = config_of(&["a", "default"]);
        assert_eq!(select_profile(&config, None).expect("select"), "default");
    }

    #[test]
    fn many_profiles_without_default_are_ambiguous() {
        let config = config_of(&["a", "b"]);
        let err = select_profile(&config, None).unwrap_err();
        assert!(matches!(err, ConfigError::AmbiguousProfile));
    }

    #[test]
    fn empty_document_has_no_profiles() {
        let err = select_profile(&Config::new(), None).unwrap_err();
        assert!(matches!(err, ConfigError::NoProfiles));
    }

    #[rstest]
    #[case(&["a"])]
    #[case(&["a", "default"])]
    fn requested_absent_profile_is_not_found(#[case] names: &[&str]) {
        let config = config_of(names);
        let err = select_profile(&config, Some("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }

    #[test]
    fn requested_profile_is_used_verbatim() {
        let config = config_of(&["a", "b", "default"]);
        assert_eq!(select_profile(&config, Some("b")).expect("select"), "b");
    }

    #[test]
    fn blank_request_falls_back_to_selection_rules() {
        let config = config_of(&["only"]);
        assert_eq!(select_profile(&config, Some("  ")).expect("select"), "only");
    }

    #[test]
    fn requested_profile_must_match_verbatim() {
        let config = config_of(&["b"]);
        let err = select_profile(&config, Some(" b ")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }
}
