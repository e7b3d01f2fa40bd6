//! # Palette
//!
//! The named color and texture registry of a theme.
//!
//! Every named color also gets a synthesized 1×1 texture under the same
//! name, so styles can use a color wherever a background texture is
//! expected. A texture declared with the same name as a color replaces the
//! synthesized one.
//!
//! ## Lookup Policies
//!
//! - [Palette::resolve_color] / [Palette::resolve_texture] never fail. An
//!   unknown color resolves to [ERROR_COLOR], an unknown texture to [None].
//! - [Palette::map_color] / [Palette::map_texture] resolve a reference
//!   written in a configuration node and fail on an unknown name.
//!
//! ## Configuration
//!
//! ```toml
//! TexturesPath = "textures"
//!
//! [[Colors]]
//! name = "bg"
//! value = [0.1, 0.1, 0.1, 1.0]
//!
//! [[Textures]]
//! name = "panel"
//! file = "panel.png"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use vello::peniko::Color;

use crate::color::{parse_color_value, ERROR_COLOR, ZERO_COLOR};
use crate::config::ConfigNode;
use crate::error::{ThemeError, ThemeResult};
use crate::texture::Texture;

/// Configuration value that stands for "no reference".
pub(crate) const NULL_REFERENCE: &str = "null";

/// Named colors and textures of a theme.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: IndexMap<String, Color>,
    textures: IndexMap<String, Texture>,
    textures_path: PathBuf,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the palette from a `Palette` configuration node.
    ///
    /// Relative `TexturesPath` values are joined onto `base_dir` when given.
    /// A texture that cannot be read or decoded aborts the parse and leaves
    /// the palette partially populated.
    pub fn parse_config(&mut self, config: &ConfigNode, base_dir: Option<&Path>) -> ThemeResult<()> {
        self.clear();

        let textures_path = PathBuf::from(config.get_str("TexturesPath").unwrap_or_default());
        self.textures_path = match base_dir {
            Some(base) if textures_path.is_relative() => base.join(textures_path),
            _ => textures_path,
        };

        self.parse_colors(config)?;
        self.parse_textures(config)?;

        log::debug!(
            "Parsed palette: {} colors, {} textures",
            self.colors.len(),
            self.textures.len()
        );
        Ok(())
    }

    fn parse_colors(&mut self, config: &ConfigNode) -> ThemeResult<()> {
        for node in config.nodes("Colors") {
            let name = node
                .get_str("name")
                .ok_or_else(|| ThemeError::missing_field("Colors", "name"))?
                .to_string();

            let color = match node.get_value("value").map(parse_color_value) {
                Some(Ok(color)) => color,
                Some(Err(err)) => {
                    log::debug!("Color '{}' has an unreadable value: {}", name, err);
                    ZERO_COLOR
                },
                None => ZERO_COLOR,
            };

            self.insert_color(name, color);
        }
        Ok(())
    }

    fn parse_textures(&mut self, config: &ConfigNode) -> ThemeResult<()> {
        for node in config.nodes("Textures") {
            let name = node
                .get_str("name")
                .ok_or_else(|| ThemeError::missing_field("Textures", "name"))?
                .to_string();
            let file = node
                .get_str("file")
                .ok_or_else(|| ThemeError::missing_field("Textures", "file"))?;

            let path = self.textures_path.join(file);
            log::debug!("Loading texture '{}' from {:?}", name, path);
            let texture = Texture::load(&path)?;
            self.textures.insert(name, texture);
        }
        Ok(())
    }

    /// Register a color and its 1×1 texture.
    pub fn insert_color(&mut self, name: impl Into<String>, color: Color) {
        let name = name.into();
        if self.colors.insert(name.clone(), color).is_some() {
            log::warn!("Color '{}' is declared more than once; the last one wins", name);
        }
        self.textures.insert(name, Texture::solid(color));
    }

    /// Register a texture, replacing any texture of the same name.
    pub fn insert_texture(&mut self, name: impl Into<String>, texture: Texture) {
        self.textures.insert(name.into(), texture);
    }

    /// Get a color by name, or [ERROR_COLOR] when unknown.
    pub fn resolve_color(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or(ERROR_COLOR)
    }

    /// Get a texture by name.
    pub fn resolve_texture(&self, name: &str) -> Option<&Texture> {
        self.textures.get(name)
    }

    /// Resolve the color referenced by `key` in `node`.
    ///
    /// Returns `fallback` when the key is absent (or holds `"null"`), and an
    /// error when the referenced name is not in the palette.
    pub fn map_color(&self, node: &ConfigNode, key: &str, fallback: Color) -> ThemeResult<Color> {
        match reference(node, key) {
            None => Ok(fallback),
            Some(name) => self
                .colors
                .get(name)
                .copied()
                .ok_or_else(|| ThemeError::unresolved_color(name, key)),
        }
    }

    /// Resolve the texture referenced by `key` in `node`.
    ///
    /// Same contract as [Palette::map_color].
    pub fn map_texture(
        &self,
        node: &ConfigNode,
        key: &str,
        fallback: Option<Texture>,
    ) -> ThemeResult<Option<Texture>> {
        match reference(node, key) {
            None => Ok(fallback),
            Some(name) => self
                .textures
                .get(name)
                .cloned()
                .map(Some)
                .ok_or_else(|| ThemeError::unresolved_texture(name, key)),
        }
    }

    /// All named colors.
    pub fn colors(&self) -> &IndexMap<String, Color> {
        &self.colors
    }

    /// All named textures, including those synthesized from colors.
    pub fn textures(&self) -> &IndexMap<String, Texture> {
        &self.textures
    }

    /// The directory textures were loaded from.
    pub fn textures_path(&self) -> &Path {
        &self.textures_path
    }

    /// Whether the palette holds no colors and no textures.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.textures.is_empty()
    }

    /// Remove every color and texture.
    pub fn clear(&mut self) {
        self.colors.clear();
        self.textures.clear();
        self.textures_path = PathBuf::new();
    }
}

fn reference<'a>(node: &'a ConfigNode, key: &str) -> Option<&'a str> {
    node.get_str(key).filter(|name| *name != NULL_REFERENCE)
}
