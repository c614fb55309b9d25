use super::*;

#[test]
fn defaults_without_any_keys() {
    let settings = Settings::from_toml_str("").expect("empty file is valid");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.export.root, PathBuf::from("."));
    assert_eq!(settings.export.index_file, DEFAULT_INDEX_FILE);
    assert_eq!(settings.logging.level, LogLevel::Warn);
    assert!(settings.outline.functions);
    assert!(!settings.outline.locations);
    assert_eq!(settings.outline.format, OutlineFormat::Text);
}

#[test]
fn parses_every_category() {
    let settings = Settings::from_toml_str(
        r#"
        [export]
        root = "build/xml"
        indexFile = "root.xml"

        [logging]
        level = "trace"

        [outline]
        functions = false
        locations = true
        format = "json"
        "#,
    )
    .expect("valid settings");

    assert_eq!(settings.export.root, PathBuf::from("build/xml"));
    assert_eq!(settings.export.index_file, "root.xml");
    assert_eq!(settings.export.index_path(), PathBuf::from("build/xml/root.xml"));
    assert_eq!(settings.logging.level, LogLevel::Trace);
    assert_eq!(settings.logging.level.filter_directive(), "doxygraph=trace");
    assert!(!settings.outline.functions);
    assert!(settings.outline.locations);
    assert_eq!(settings.outline.format, OutlineFormat::Json);
}

#[test]
fn unknown_keys_are_ignored() {
    let settings = Settings::from_toml_str(
        r#"
        theme = "dark"

        [export]
        root = "xml"
        followSymlinks = true

        [report]
        width = 80
        "#,
    )
    .expect("unknown keys do not fail");
    assert_eq!(settings.export.root, PathBuf::from("xml"));
}

#[test]
fn blank_index_file_falls_back_to_default() {
    let settings = Settings::from_toml_str("[export]\nindexFile = \"   \"\n").expect("valid settings");
    assert_eq!(settings.export.index_file, DEFAULT_INDEX_FILE);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(Settings::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
    assert!(Settings::from_toml_str("[outline]\nformat = \"yaml\"\n").is_err());
}

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "doxygraph-settings-{tag}-{}",
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).expect("clock drift").as_nanos()
    ))
}

#[test]
fn load_rebases_relative_root_on_the_file_directory() {
    let dir = temp_dir("rebase");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let file = dir.join(SETTINGS_FILENAME);
    std::fs::write(&file, "[export]\nroot = \"build/xml\"\n").expect("write settings");

    let settings = Settings::load(&file).expect("settings load");
    assert_eq!(settings.export.root, dir.join("build/xml"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn load_reports_broken_file() {
    let dir = temp_dir("broken");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let file = dir.join(SETTINGS_FILENAME);
    std::fs::write(&file, "[export\nroot = 1\n").expect("write settings");

    let err = Settings::load(&file).expect_err("file is not valid TOML");
    assert!(matches!(err, Error::Config { .. }), "unexpected error: {err}");
    assert!(matches!(Settings::load(&dir.join("absent.toml")), Err(Error::Config { .. })));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn settings_file_is_found_in_a_parent_directory() {
    let dir = temp_dir("discover");
    let nested = dir.join("a/b");
    std::fs::create_dir_all(&nested).expect("create nested dirs");
    std::fs::write(dir.join(SETTINGS_FILENAME), "").expect("write settings");

    assert_eq!(find_settings_file(&nested), Some(dir.join(SETTINGS_FILENAME)));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn hand_set_index_file_is_normalized_again() {
    let mut export = ExportSettings::new("xml");
    export.index_file = "  root.xml ".to_owned();
    export.normalize();
    assert_eq!(export.index_file, "root.xml");

    export.index_file = String::new();
    export.normalize();
    assert_eq!(export.index_file, DEFAULT_INDEX_FILE);
}
