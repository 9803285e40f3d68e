//! Configuration system tests
//!
//! Tests for config paths and logger config loading.

use std::fs;

use edit_log::cli::{Command, Report};
use edit_log::config::LoggerConfig;
use edit_log::config_paths;
use edit_log::history::{ActionLogger, Change, EditAction, EditorId, Selection};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("edit-log"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let Some(logs) = config_paths::logs_dir() {
        assert!(logs.ends_with("edit-log/logs"));
    }
}

// ========================================================================
// Logger Config Tests
// ========================================================================

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "coalesce: false\n").unwrap();

    let config = LoggerConfig::load_from(&path).unwrap();
    assert!(!config.coalesce);
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LoggerConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_load_from_invalid_yaml_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "coalesce: [not, a, bool]\n").unwrap();

    let err = LoggerConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = LoggerConfig { coalesce: false };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let back: LoggerConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_logger_honors_config() {
    let keystroke = |pos: usize, text: &str| {
        EditAction::new(
            EditorId::new("foo"),
            Selection::collapsed(pos),
            Selection::collapsed(pos + 1),
            vec![Change::added(pos, text)],
        )
    };

    let mut coalescing = ActionLogger::with_config(&LoggerConfig::default());
    let mut verbatim = ActionLogger::with_config(&LoggerConfig { coalesce: false });
    for (pos, text) in ["a", "b", "c"].into_iter().enumerate() {
        coalescing.add(keystroke(pos, text)).unwrap();
        verbatim.add(keystroke(pos, text)).unwrap();
    }

    assert_eq!(coalescing.len(), 1);
    assert_eq!(verbatim.len(), 3);
}

// ========================================================================
// User Config Dir Tests
// ========================================================================

#[cfg(not(target_os = "windows"))]
#[test]
fn test_load_reads_user_config_and_drives_reconcile() {
    let config_home = tempfile::tempdir().unwrap();
    let app_dir = config_home.path().join("edit-log");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.yaml"), "coalesce: false\n").unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    assert_eq!(
        config_paths::config_file(),
        Some(app_dir.join("config.yaml"))
    );
    assert!(!LoggerConfig::load().coalesce);

    // Two keystrokes stay separate entries because the user turned coalescing off
    let work = tempfile::tempdir().unwrap();
    let keystrokes: Vec<_> = ["a", "b"]
        .into_iter()
        .enumerate()
        .map(|(pos, text)| {
            edit_log::LogItem::new(
                1,
                EditAction::new(
                    EditorId::new("foo"),
                    Selection::collapsed(pos),
                    Selection::collapsed(pos + 1),
                    vec![Change::added(pos, text)],
                ),
            )
        })
        .collect();
    let write = |name: &str, content: &str| {
        let path = work.path().join(name);
        fs::write(&path, content).unwrap();
        path
    };
    let command = Command::Reconcile {
        before: write("before.txt", ""),
        log: write("log.json", &serde_json::to_string(&keystrokes).unwrap()),
        after: write("after.txt", "ab"),
        editor: String::new(),
    };

    let Report::Reconciled { gap, log } = command.execute().unwrap() else {
        panic!("Expected a reconciled log");
    };
    assert!(gap.is_none());
    assert_eq!(log.len(), 2);

    std::env::remove_var("XDG_CONFIG_HOME");
}
