//! # Style Sheet
//!
//! The [StyleSheet] maps style names to resolved [StyleRecord]s.
//!
//! ## Inheritance
//!
//! A style may name a `parent`. The new record starts as a copy of the
//! parent and every key present in the style's own entry overrides the
//! copied value. Parents are looked up among the styles parsed so far, so a
//! parent must be declared before its children. A parent that is not found
//! is logged and the style starts from [StyleRecord::baseline] instead.
//!
//! ```toml
//! [[Styles]]
//! name = "base"
//! fontSize = 12
//! normal.textColor = "fg"
//!
//! [[Styles]]
//! name = "big"
//! parent = "base"
//! fontSize = 20
//! ```
//!
//! ## Attribute Keys
//!
//! | key | value |
//! |---|---|
//! | `<state>.background` | texture name |
//! | `<state>.textColor` | color name |
//! | `border`, `margin`, `padding`, `overflow` | `[left, right, top, bottom]` |
//! | `imagePosition`, `alignment`, `clipping`, `fontStyle` | variant name |
//! | `wordWrap`, `stretchWidth`, `stretchHeight`, `richText` | bool |
//! | `contentOffset` | `[x, y]` |
//! | `fixedWidth`, `fixedHeight` | float |
//! | `fontSize` | integer |
//!
//! `<state>` is one of `normal hover active onNormal onHover onActive
//! focused onFocused`.

use indexmap::IndexMap;
use nalgebra::Vector2;

use crate::config::ConfigNode;
use crate::error::{ThemeError, ThemeResult};
use crate::palette::Palette;
use crate::style::{
    ConfigEnum, FontHandle, FontStyle, ImagePosition, RectOffset, StateKind, StyleRecord,
    TextAnchor, TextClipping,
};

/// Handle to a style in a [StyleSheet].
///
/// Only valid until the sheet is parsed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(usize);

impl StyleId {
    /// Position of the style in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Named styles of a theme, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: IndexMap<String, StyleRecord>,
    font: FontHandle,
}

impl StyleSheet {
    /// Create an empty sheet using the built-in font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different font for every style parsed from now on.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = font;
        self
    }

    /// The font styles are created with.
    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    /// Rebuild the sheet from a `Skin` configuration node.
    ///
    /// Record names are `sheet_prefix` followed by the declared name; the
    /// sheet itself stays keyed by the declared name. An unknown enum token
    /// or palette reference aborts the parse and leaves the styles parsed so
    /// far in place.
    pub fn parse_config(
        &mut self,
        config: &ConfigNode,
        sheet_prefix: &str,
        palette: &Palette,
    ) -> ThemeResult<()> {
        self.styles.clear();

        for node in config.nodes("Styles") {
            let name = node
                .get_str("name")
                .ok_or_else(|| ThemeError::missing_field("Styles", "name"))?
                .to_string();

            let template = match node.get_str("parent") {
                Some(parent) => match self.styles.get(parent) {
                    Some(record) => record.clone(),
                    None => {
                        log::warn!(
                            "Style '{}' names unknown parent '{}'; using defaults",
                            name,
                            parent
                        );
                        StyleRecord::baseline()
                    },
                },
                None => StyleRecord::baseline(),
            };

            let mut record = parse_style(&node, template, palette)?;
            record.name = format!("{}{}", sheet_prefix, name);
            record.font = self.font.clone();

            if self.styles.insert(name.clone(), record).is_some() {
                log::warn!("Style '{}' is declared more than once; the last one wins", name);
            }
        }

        log::debug!("Parsed {} styles", self.styles.len());
        Ok(())
    }

    /// Get a style by its declared name.
    pub fn get(&self, name: &str) -> Option<&StyleRecord> {
        self.styles.get(name)
    }

    /// Get the handle of a style.
    pub fn id_of(&self, name: &str) -> Option<StyleId> {
        self.styles.get_index_of(name).map(StyleId)
    }

    /// Get a style by handle.
    pub fn by_id(&self, id: StyleId) -> Option<&StyleRecord> {
        self.styles.get_index(id.0).map(|(_, record)| record)
    }

    /// Whether a style is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the sheet holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Declared style names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Iterate `(declared name, record)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRecord)> {
        self.styles.iter().map(|(name, record)| (name.as_str(), record))
    }
}

fn parse_style(node: &ConfigNode, mut record: StyleRecord, palette: &Palette) -> ThemeResult<StyleRecord> {
    for kind in StateKind::ALL.iter().copied() {
        let prefix = kind.config_prefix();
        let state = record.state_mut(kind);
        state.background = palette.map_texture(
            node,
            &format!("{}.background", prefix),
            state.background.take(),
        )?;
        state.text_color =
            palette.map_color(node, &format!("{}.textColor", prefix), state.text_color)?;
    }

    record.border = read_offset(node, "border", record.border);
    record.margin = read_offset(node, "margin", record.margin);
    record.padding = read_offset(node, "padding", record.padding);
    record.overflow = read_offset(node, "overflow", record.overflow);

    record.image_position = read_enum::<ImagePosition>(node, "imagePosition", record.image_position)?;
    record.alignment = read_enum::<TextAnchor>(node, "alignment", record.alignment)?;
    record.clipping = read_enum::<TextClipping>(node, "clipping", record.clipping)?;
    record.font_style = read_enum::<FontStyle>(node, "fontStyle", record.font_style)?;

    record.word_wrap = node.read_or("wordWrap", record.word_wrap);
    record.stretch_width = node.read_or("stretchWidth", record.stretch_width);
    record.stretch_height = node.read_or("stretchHeight", record.stretch_height);
    record.rich_text = node.read_or("richText", record.rich_text);
    record.fixed_width = node.read_or("fixedWidth", record.fixed_width);
    record.fixed_height = node.read_or("fixedHeight", record.fixed_height);
    record.font_size = node.read_or("fontSize", record.font_size);

    if let Some([x, y]) = node.read::<[f32; 2]>("contentOffset") {
        record.content_offset = Vector2::new(x, y);
    }

    Ok(record)
}

fn read_offset(node: &ConfigNode, key: &str, inherited: RectOffset) -> RectOffset {
    node.read::<[f32; 4]>(key)
        .map(RectOffset::from_components)
        .unwrap_or(inherited)
}

fn read_enum<E: ConfigEnum>(node: &ConfigNode, key: &str, inherited: E) -> ThemeResult<E> {
    let Some(value) = node.get_value(key) else {
        return Ok(inherited);
    };

    let token = match value.as_str() {
        Some(token) => token,
        None => return Err(ThemeError::invalid_enum(E::KIND, key, value.to_string())),
    };

    E::from_token(token).ok_or_else(|| ThemeError::invalid_enum(E::KIND, key, token))
}
