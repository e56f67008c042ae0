use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use shelf_fs::{ConfigStore, Error, NormalizedPath};
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    layout: String,
    enabled: bool,
}

fn sample() -> Sample {
    Sample {
        layout: "grid".into(),
        enabled: true,
    }
}

#[test]
fn test_toml_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("settings.toml"));
    let store = ConfigStore::new();

    store.save(&path, &sample()).unwrap();
    let loaded: Sample = store.load(&path).unwrap();

    assert_eq!(loaded, sample());
    let raw = std::fs::read_to_string(path.to_native()).unwrap();
    assert!(raw.contains("layout = \"grid\""));
}

#[test]
fn test_json_and_yaml_are_detected_by_extension() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new();

    for name in ["settings.json", "settings.yml"] {
        let path = NormalizedPath::new(temp.path().join(name));
        store.save(&path, &sample()).unwrap();
        let loaded: Sample = store.load(&path).unwrap();
        assert_eq!(loaded, sample());
    }
}

#[test]
fn test_load_optional_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.toml"));

    let loaded: Option<Sample> = ConfigStore::new().load_optional(&path).unwrap();

    assert!(loaded.is_none());
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("settings.ini"));

    let result = ConfigStore::new().save(&path, &sample());

    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("broken.toml");
    std::fs::write(&file, "layout = ").unwrap();

    let result: Result<Sample, _> = ConfigStore::new().load(&NormalizedPath::new(&file));

    assert!(matches!(result, Err(Error::ConfigParse { format, .. }) if format == "TOML"));
}
