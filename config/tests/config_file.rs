use config::config_file::*;
use std::io::Write;

fn write_config(dir: &tempdir::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(DEFAULT_FILE);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_config_file() {
    let dir = tempdir::TempDir::new("kubeless-config-test").unwrap();
    let path = write_config(&dir, "server: http://10.0.0.1:8001\nnamespace: myns\n");

    let config = ConfigFile::load_from(&path).unwrap();
    assert_eq!(
        config,
        ConfigFile {
            server: "http://10.0.0.1:8001".into(),
            namespace: "myns".into(),
        }
    );
}

#[test]
fn test_load_partial_config_file() {
    let dir = tempdir::TempDir::new("kubeless-config-test").unwrap();
    let path = write_config(&dir, "namespace: other\n");

    let config = ConfigFile::load_from(&path).unwrap();
    assert_eq!(config.server, "");
    assert_eq!(config.namespace, "other");
}

#[test]
fn test_load_missing_or_empty_config_file() {
    let dir = tempdir::TempDir::new("kubeless-config-test").unwrap();

    let config = ConfigFile::load_from(&dir.path().join("nope.yml")).unwrap();
    assert_eq!(config, ConfigFile::default());

    let path = write_config(&dir, "\n");
    let config = ConfigFile::load_from(&path).unwrap();
    assert_eq!(config, ConfigFile::default());
}

#[test]
fn test_load_malformed_config_file() {
    let dir = tempdir::TempDir::new("kubeless-config-test").unwrap();
    let path = write_config(&dir, "server: [unterminated\n");

    let res = ConfigFile::load_from(&path);
    assert!(res.is_err());
    assert!(format!("{}", res.unwrap_err()).contains("invalid config file"));
}

#[test]
fn test_config_location_env() {
    let dir = tempdir::TempDir::new("kubeless-config-test").unwrap();
    write_config(&dir, "namespace: from-env\n");
    std::env::set_var(CONFIG_LOCATION_ENV, dir.path());

    assert_eq!(config_file_path().unwrap(), dir.path().join(DEFAULT_FILE));
    assert_eq!(ConfigFile::load().unwrap().namespace, "from-env");

    std::env::remove_var(CONFIG_LOCATION_ENV);
    assert_eq!(config_dir().unwrap(), DEFAULT_DIR);
}
