#![warn(missing_docs)]

//! # imskin Theming
//!
//! Configuration-driven styles for immediate-mode GUIs.
//!
//! ## Overview
//!
//! A theme is read from a TOML tree in two passes:
//!
//! - **[Palette](palette::Palette)**: Named colors and textures. Every color
//!   doubles as a 1×1 texture of the same name.
//! - **[StyleSheet](skin::StyleSheet)**: Named [StyleRecord](style::StyleRecord)s
//!   that reference palette entries and may inherit from a parent style.
//!
//! ## Quick Start
//!
//! ```rust
//! use imskin_theme::config::ConfigNode;
//! use imskin_theme::palette::Palette;
//! use imskin_theme::skin::StyleSheet;
//!
//! let palette_config = ConfigNode::from_toml(r#"
//! [[Colors]]
//! name = "fg"
//! value = [1.0, 1.0, 1.0, 1.0]
//! "#).unwrap();
//!
//! let skin_config = ConfigNode::from_toml(r#"
//! [[Styles]]
//! name = "label"
//! normal.textColor = "fg"
//! fontSize = 12
//! "#).unwrap();
//!
//! let mut palette = Palette::new();
//! palette.parse_config(&palette_config, None).unwrap();
//!
//! let mut sheet = StyleSheet::new();
//! sheet.parse_config(&skin_config, "dark.", &palette).unwrap();
//!
//! let label = sheet.get("label").unwrap();
//! assert_eq!(label.name, "dark.label");
//! assert_eq!(label.font_size, 12);
//! ```
//!
//! ## Error Policy
//!
//! Cosmetic values that are missing or malformed fall back to inherited or
//! default values. Unknown references, unknown enum tokens and unreadable
//! files are reported as [ThemeError](error::ThemeError).

/// Contains color parsing helpers and color constants.
pub mod color;
/// Contains the [config::ConfigNode] tree and [config::ThemeSource].
pub mod config;
/// Contains the [error::ThemeError] enum.
pub mod error;
/// Contains the [palette::Palette] registry.
pub mod palette;
/// Contains the [skin::StyleSheet] struct.
pub mod skin;
/// Contains the [style::StyleRecord] struct and its attribute types.
pub mod style;
/// Contains the [texture::Texture] struct.
pub mod texture;
