//! End-to-end tests for loading themes into a ThemeContext

use std::fs;
use std::io::Cursor;
use std::path::Path;

use imskin::prelude::*;
use imskin::theme::color::{BLACK, ERROR_COLOR};

fn write_png(path: &Path, pixel: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba(pixel));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_black_label_scenario() {
    let root = ConfigNode::from_toml(
        r#"
        [[Palette.Colors]]
        name = "bg"
        value = [0, 0, 0, 1]

        [[Skin.Styles]]
        name = "label"
        normal.textColor = "bg"
        "#,
    )
    .unwrap();

    let mut context = ThemeContext::new();
    context.load_tree(root).unwrap();

    assert_eq!(context.palette().resolve_color("bg"), BLACK);
    assert_eq!(context.skin().get("label").unwrap().normal.text_color, BLACK);
    assert_eq!(context.palette().resolve_color("missing"), ERROR_COLOR);
    assert!(context.layout_styles().label().is_some());
    assert!(context.layout_styles().button().is_none());
}

#[test]
fn test_inheritance_scenario() {
    let root = ConfigNode::from_toml(
        r#"
        Name = "hud."

        [[Skin.Styles]]
        name = "base"
        fontSize = 12

        [[Skin.Styles]]
        name = "big"
        parent = "base"
        fontSize = 20

        [[Skin.Styles]]
        name = "orphan"
        parent = "nonexistent"
        "#,
    )
    .unwrap();

    let mut context = ThemeContext::new();
    context.load_tree(root).unwrap();

    let skin = context.skin();
    assert_eq!(skin.get("base").unwrap().font_size, 12);
    assert_eq!(skin.get("big").unwrap().font_size, 20);
    assert_eq!(skin.get("orphan").unwrap().font_size, 0);
    assert_eq!(skin.get("big").unwrap().name, "hud.big");
}

#[test]
fn test_load_file_resolves_textures_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("textures")).unwrap();
    write_png(&dir.path().join("textures/panel.png"), [40, 50, 60, 255]);

    let path = dir.path().join("theme.toml");
    fs::write(
        &path,
        r##"
        [Theme]
        Name = "dark."

        [Theme.Palette]
        TexturesPath = "textures"

        [[Theme.Palette.Colors]]
        name = "fg"
        value = "#ffffff"

        [[Theme.Palette.Textures]]
        name = "panel"
        file = "panel.png"

        [[Theme.Skin.Styles]]
        name = "window"
        normal.background = "panel"
        normal.textColor = "fg"
        padding = [8, 8, 20, 8]
        "##,
    )
    .unwrap();

    let mut context = ThemeContext::new();
    context.load_file(&path).unwrap();

    let window = context.skin().get("window").unwrap();
    assert_eq!(window.name, "dark.window");
    let background = window.normal.background.as_ref().unwrap();
    assert_eq!((background.width(), background.height()), (2, 2));
    assert_eq!(background.pixel(1, 1), Some([40, 50, 60, 255]));
    assert_eq!(context.palette().textures_path(), dir.path().join("textures"));
    assert_eq!(context.source(), Some(&ThemeSource::File(path.clone())));
}

#[test]
fn test_reload_picks_up_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "[Theme]\nName = \"one.\"\n[[Theme.Skin.Styles]]\nname = \"label\"\n").unwrap();

    let mut context = ThemeContext::new();
    context.load_file(&path).unwrap();
    assert_eq!(context.skin().get("label").unwrap().name, "one.label");

    fs::write(&path, "[Theme]\nName = \"two.\"\n[[Theme.Skin.Styles]]\nname = \"button\"\n").unwrap();
    context.reload().unwrap();

    assert_eq!(context.name(), "two.");
    assert!(context.skin().get("label").is_none());
    assert_eq!(context.skin().get("button").unwrap().name, "two.button");
}

#[test]
fn test_file_without_theme_node_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "Name = \"flat\"\n").unwrap();

    let mut context = ThemeContext::new();
    let err = context.load_file(&path).unwrap_err();
    assert!(matches!(err, ThemeError::MissingNode { ref node } if node == "Theme"));
}

#[test]
fn test_missing_file_keeps_previous_theme() {
    let mut context = ThemeContext::new();
    context
        .load_tree(ConfigNode::from_toml("[[Skin.Styles]]\nname = \"label\"").unwrap())
        .unwrap();

    let err = context.load_file("/definitely/not/here/theme.toml").unwrap_err();
    assert!(matches!(err, ThemeError::ConfigRead { .. }));
    assert!(context.skin().contains("label"));
    assert!(context.layout_styles().label().is_some());
}

#[test]
fn test_failed_style_parse_aborts_load() {
    let root = ConfigNode::from_toml(
        r#"
        [[Palette.Colors]]
        name = "fg"
        value = [1, 1, 1, 1]

        [[Skin.Styles]]
        name = "label"

        [[Skin.Styles]]
        name = "button"
        fontStyle = "Heavy"
        "#,
    )
    .unwrap();

    let mut context = ThemeContext::new();
    let err = context.load_tree(root).unwrap_err();

    assert!(matches!(err, ThemeError::InvalidEnum { kind: "FontStyle", .. }));
    // No rollback: what was parsed before the failure stays.
    assert!(context.palette().colors().contains_key("fg"));
    assert!(context.skin().contains("label"));
    assert!(context.layout_styles().label().is_none());
    assert!(context.source().is_some());
}
