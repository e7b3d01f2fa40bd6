//! Tests for loading palette textures from disk

use std::fs;
use std::io::Cursor;
use std::path::Path;

use imskin_theme::config::ConfigNode;
use imskin_theme::error::ThemeError;
use imskin_theme::palette::Palette;

fn write_png(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_declared_texture_replaces_color_texture() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("gfx")).unwrap();
    write_png(&dir.path().join("gfx/panel.png"), 4, 2, [9, 8, 7, 255]);

    let config = ConfigNode::from_toml(
        r#"
        TexturesPath = "gfx"

        [[Colors]]
        name = "panel"
        value = [0, 0, 0, 1]

        [[Textures]]
        name = "panel"
        file = "panel.png"
        "#,
    )
    .unwrap();

    let mut palette = Palette::new();
    palette.parse_config(&config, Some(dir.path())).unwrap();

    let texture = palette.resolve_texture("panel").unwrap();
    assert_eq!((texture.width(), texture.height()), (4, 2));
    assert_eq!(texture.pixel(3, 1), Some([9, 8, 7, 255]));
    assert_eq!(texture.fill_color(), None);
    assert_eq!(palette.resolve_color("panel").components, [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_absolute_textures_path_ignores_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("icon.png"), 1, 1, [1, 2, 3, 4]);

    let mut table = toml::Table::new();
    table.insert(
        "TexturesPath".to_string(),
        toml::Value::String(dir.path().display().to_string()),
    );
    let mut entry = toml::Table::new();
    entry.insert("name".to_string(), toml::Value::String("icon".to_string()));
    entry.insert("file".to_string(), toml::Value::String("icon.png".to_string()));
    table.insert(
        "Textures".to_string(),
        toml::Value::Array(vec![toml::Value::Table(entry)]),
    );

    let mut palette = Palette::new();
    palette
        .parse_config(&ConfigNode::from(table), Some(Path::new("/elsewhere")))
        .unwrap();

    assert_eq!(palette.textures_path(), dir.path());
    assert_eq!(palette.resolve_texture("icon").unwrap().pixel(0, 0), Some([1, 2, 3, 4]));
}

#[test]
fn test_missing_texture_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigNode::from_toml(
        r#"
        [[Textures]]
        name = "ghost"
        file = "ghost.png"
        "#,
    )
    .unwrap();

    let mut palette = Palette::new();
    let err = palette.parse_config(&config, Some(dir.path())).unwrap_err();
    assert!(matches!(err, ThemeError::TextureRead { ref path, .. } if path.ends_with("ghost.png")));
}

#[test]
fn test_undecodable_texture_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
    let config = ConfigNode::from_toml(
        r#"
        [[Colors]]
        name = "kept"
        value = [1, 0, 1, 1]

        [[Textures]]
        name = "broken"
        file = "broken.png"
        "#,
    )
    .unwrap();

    let mut palette = Palette::new();
    let err = palette.parse_config(&config, Some(dir.path())).unwrap_err();
    assert!(matches!(err, ThemeError::TextureDecode { .. }));
    // Colors parsed before the failure stay registered.
    assert!(palette.colors().contains_key("kept"));
}

#[test]
fn test_texture_entry_without_file_fails() {
    let config = ConfigNode::from_toml("[[Textures]]\nname = \"nofile\"").unwrap();
    let mut palette = Palette::new();
    assert!(matches!(
        palette.parse_config(&config, None),
        Err(ThemeError::MissingField { ref field, .. }) if field == "file"
    ));
}
