//! Tests for configuration loading and element-map files

use std::path::{Path, PathBuf};

use ioc_domain::{DefinitionSource, Error};
use ioc_infrastructure::config::element_map::{ElementMapFormat, parse_element_map};
use ioc_infrastructure::config::{AppConfig, ConfigLoader, load_element_map};
use ioc_infrastructure::di::init_container;
use tempfile::TempDir;

const TOML_MAP: &str = r#"
Bar = "Bar"

[Greeting]
class = "Text"
args = ["Hello ", "$"]

[Greeting.submap]
Helper = "Array"
"#;

const JSON_MAP: &str = r#"{
    "Bar": "Bar",
    "Greeting": { "class": "Text", "args": ["Hello ", "$"], "submap": { "Helper": "Array" } }
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_toml_and_json_maps_have_same_shape() {
    let temp_dir = TempDir::new().unwrap();
    let from_toml = load_element_map(write_file(&temp_dir, "map.toml", TOML_MAP)).unwrap();
    let from_json = load_element_map(write_file(&temp_dir, "map.json", JSON_MAP)).unwrap();

    for map in [&from_toml, &from_json] {
        assert_eq!(map.len(), 2);
        assert!(matches!(map.get("Bar"), Some(DefinitionSource::ClassName(name)) if name == "Bar"));
        assert!(matches!(map.get("Greeting"), Some(DefinitionSource::Fields(_))));
    }
}

#[test]
fn test_unsupported_map_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "map.yaml", "Bar: Bar");

    match load_element_map(&path) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("map.yaml")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_missing_map_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let result = load_element_map(temp_dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_map_must_be_an_object() {
    let result = parse_element_map("[1, 2, 3]", ElementMapFormat::Json);

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_invalid_toml_map() {
    let result = parse_element_map("Bar = ", ElementMapFormat::Toml);

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        ElementMapFormat::from_path(Path::new("a/map.TOML")),
        Some(ElementMapFormat::Toml)
    );
    assert_eq!(
        ElementMapFormat::from_path(Path::new("map.json")),
        Some(ElementMapFormat::Json)
    );
    assert_eq!(ElementMapFormat::from_path(Path::new("map")), None);
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert!(config.container.detect_cycles);
    assert!(config.container.element_map.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_loader_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let map_path = write_file(&temp_dir, "map.toml", TOML_MAP);
    let config_path = write_file(
        &temp_dir,
        "ioc.toml",
        &format!(
            "[logging]\nlevel = \"debug\"\n\n[container]\ndetect_cycles = false\nelement_map = {:?}\n",
            map_path.display().to_string()
        ),
    );

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(!config.container.detect_cycles);
    assert_eq!(config.container.element_map.as_deref(), Some(map_path.as_path()));
}

#[test]
fn test_loader_rejects_invalid_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_file(&temp_dir, "ioc.toml", "[logging]\nlevel = \"chatty\"\n");

    let result = ConfigLoader::new().with_config_path(&config_path).load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_loader_rejects_missing_element_map() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_file(
        &temp_dir,
        "ioc.toml",
        "[container]\nelement_map = \"/nonexistent/ioc-map.toml\"\n",
    );

    match ConfigLoader::new().with_config_path(&config_path).load() {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("Element map file not found"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    let config = loader.load().unwrap();

    assert_eq!(loader.config_path(), Some(temp_dir.path().join("absent.toml").as_path()));
    assert!(config.container.detect_cycles);
}

#[test]
fn test_saved_config_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.logging.level = "warn".to_string();
    config.container.detect_cycles = false;

    let loader = ConfigLoader::new();
    loader.save_to_file(&config, &path).unwrap();
    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(loaded.logging.level, "warn");
    assert!(!loaded.container.detect_cycles);
}

#[test]
fn test_init_container_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.container.element_map = Some(write_file(&temp_dir, "map.json", JSON_MAP));

    let container = init_container(&config).unwrap();

    assert_eq!(container.factory().unwrap().aliases(), vec!["Bar", "Greeting"]);
    let greeting = container.get_shared_element("Greeting.world").unwrap();
    assert_eq!(greeting.as_str(), Some("Hello world"));
}
