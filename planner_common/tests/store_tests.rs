//! Persistent defaults store tests.

use planner_common::store::{EmbeddedSettings, HexColor, StoreError, load_store, write_store};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn write_then_load_preserves_every_entry() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("vars").join("settings.toml");

    let written = EmbeddedSettings::with_timestamp("2020/06/09 12:00:00");
    write_store(&path, &written).expect("write store");
    let loaded = load_store(&path).expect("load store");

    assert_eq!(loaded, written);
    assert_eq!(loaded.software_name, "4265 Path Planner");
    assert_eq!(loaded.fig_size, [25, 25]);
    assert_eq!(loaded.disp_res, 10);
    assert_eq!(loaded.fonts.size_large, 14);
    assert_eq!(loaded.fonts.uniform, "Consolas");
    assert_eq!(loaded.colors.hotpink, HexColor::rgb(255, 0, 153));
}

#[test]
fn colors_stored_as_hex_strings() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    write_store(&path, &EmbeddedSettings::with_timestamp("2020/06/09 12:00:00")).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains(r##"hotpink = "#ff0099""##), "got:\n{text}");
    assert!(text.contains(r##"black = "#000000""##), "got:\n{text}");
    assert!(text.contains(r#"timestamp = "2020/06/09 12:00:00""#), "got:\n{text}");
}

#[test]
fn invalid_color_rejected_on_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    write_store(&path, &EmbeddedSettings::with_timestamp("t")).unwrap();
    let text = fs::read_to_string(&path)
        .unwrap()
        .replace(r##""#ff0099""##, r#""hotpink""#);
    fs::write(&path, text).unwrap();

    let err = load_store(&path).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)), "got: {err}");
    assert!(err.to_string().contains("#RRGGBB"), "got: {err}");
}

#[test]
fn missing_store_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_store(&tmp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn recognized_images_follow_stored_filters() {
    let settings = EmbeddedSettings::with_timestamp("t");
    assert!(settings.is_recognized_image(Path::new("field drawings/2020 field.jpg")));
    assert!(settings.is_recognized_image(Path::new("scan.TIF")));
    assert!(!settings.is_recognized_image(Path::new("notes.txt")));
    assert!(!settings.is_recognized_image(Path::new("no_extension")));
}
