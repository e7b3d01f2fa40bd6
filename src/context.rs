//! # Theme Context
//!
//! [ThemeContext] owns one loaded theme: its [Palette], its [StyleSheet]
//! and the style handles the [Layout] facade draws with.
//!
//! ## Loading
//!
//! A theme is loaded from a [ThemeSource], either a TOML file whose `[Theme]`
//! table holds the theme, or an already-parsed root node:
//!
//! ```rust
//! use imskin::prelude::*;
//!
//! let root = ConfigNode::from_toml(r#"
//! Name = "dark."
//!
//! [[Palette.Colors]]
//! name = "bg"
//! value = [0.0, 0.0, 0.0, 1.0]
//!
//! [[Skin.Styles]]
//! name = "label"
//! normal.textColor = "bg"
//! "#).unwrap();
//!
//! let mut context = ThemeContext::new();
//! context.load_tree(root).unwrap();
//!
//! assert_eq!(context.name(), "dark.");
//! assert_eq!(context.skin().get("label").unwrap().name, "dark.label");
//! ```
//!
//! Loading always clears and rebuilds the palette and the sheet. A load
//! that fails part way leaves whatever was parsed up to the failure in
//! place.

use std::path::Path;

use imskin_theme::config::{ConfigNode, ThemeSource};
use imskin_theme::error::{ThemeError, ThemeResult};
use imskin_theme::palette::Palette;
use imskin_theme::skin::StyleSheet;
use imskin_theme::style::FontHandle;
use imskin_widgets::layout::{Layout, LayoutStyles};

/// Owner of one loaded theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    name: String,
    palette: Palette,
    skin: StyleSheet,
    layout_styles: LayoutStyles,
    source: Option<ThemeSource>,
}

impl ThemeContext {
    /// Create a context with no theme loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different font for the styles of every theme loaded from now on.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.skin = std::mem::take(&mut self.skin).with_font(font);
        self
    }

    /// Create a context and load the theme file named by
    /// [THEME_CONFIG_ENV](imskin_theme::config::THEME_CONFIG_ENV).
    ///
    /// When the variable is not set, the context is returned empty.
    pub fn from_env() -> ThemeResult<Self> {
        let mut context = Self::new();
        match ThemeSource::from_env() {
            Some(source) => context.load_config(source)?,
            None => log::debug!("No theme configured in the environment"),
        }
        Ok(context)
    }

    /// Load a theme, replacing the current one.
    ///
    /// The source is remembered for [ThemeContext::reload] even when the
    /// load fails.
    pub fn load_config(&mut self, source: impl Into<ThemeSource>) -> ThemeResult<()> {
        let source = source.into();
        self.source = Some(source.clone());
        self.apply(&source)
    }

    /// Load a theme file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> ThemeResult<()> {
        self.load_config(ThemeSource::File(path.as_ref().to_path_buf()))
    }

    /// Load a theme from its root node.
    pub fn load_tree(&mut self, root: ConfigNode) -> ThemeResult<()> {
        self.load_config(ThemeSource::Tree(root))
    }

    /// Load the last theme source again.
    pub fn reload(&mut self) -> ThemeResult<()> {
        let source = self.source.clone().ok_or(ThemeError::NothingToReload)?;
        self.apply(&source)
    }

    fn apply(&mut self, source: &ThemeSource) -> ThemeResult<()> {
        let root = source.root()?;

        // Handles into the old sheet must not outlive it.
        self.layout_styles = LayoutStyles::default();
        self.name = root.get_str("Name").unwrap_or_default().to_string();

        let palette = root.get_node("Palette").unwrap_or_default();
        self.palette.parse_config(&palette, source.base_dir())?;

        let skin = root.get_node("Skin").unwrap_or_default();
        self.skin.parse_config(&skin, &self.name, &self.palette)?;

        self.layout_styles = LayoutStyles::resolve(&self.skin);

        log::info!(
            "Loaded theme '{}': {} colors, {} textures, {} styles",
            self.name,
            self.palette.colors().len(),
            self.palette.textures().len(),
            self.skin.len()
        );
        Ok(())
    }

    /// Name of the loaded theme, used as the prefix of its style names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The loaded style sheet.
    pub fn skin(&self) -> &StyleSheet {
        &self.skin
    }

    /// The style handles the layout draws with.
    pub fn layout_styles(&self) -> &LayoutStyles {
        &self.layout_styles
    }

    /// The source of the last load, if any.
    pub fn source(&self) -> Option<&ThemeSource> {
        self.source.as_ref()
    }

    /// The draw-call facade over the loaded theme.
    pub fn layout(&self) -> Layout<'_> {
        Layout::new(&self.skin, &self.palette, &self.layout_styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_without_source_fails() {
        let mut context = ThemeContext::new();
        assert!(matches!(context.reload(), Err(ThemeError::NothingToReload)));
        assert!(context.source().is_none());
    }

    #[test]
    fn test_empty_tree_loads_empty_theme() {
        let mut context = ThemeContext::new();
        context.load_tree(ConfigNode::new()).unwrap();

        assert_eq!(context.name(), "");
        assert!(context.palette().is_empty());
        assert!(context.skin().is_empty());
        assert!(!context.layout_styles().is_complete());
    }

    #[test]
    fn test_custom_font_survives_loads() {
        let mut context = ThemeContext::new().with_font(FontHandle::new("Inter"));
        context
            .load_tree(ConfigNode::from_toml("[[Skin.Styles]]\nname = \"label\"").unwrap())
            .unwrap();
        assert_eq!(context.skin().get("label").unwrap().font.name(), "Inter");
    }
}
