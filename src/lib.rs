#![warn(missing_docs)]

//! Configuration-driven theming for immediate-mode GUIs.
//!
//! Load a theme into a [ThemeContext](context::ThemeContext), then draw
//! styled widgets on any [ImmediateGui](core::gui::ImmediateGui) host through
//! its [Layout](widgets::layout::Layout).

pub use nalgebra as math;
pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use imskin_core as core;
pub use imskin_theme as theme;
pub use imskin_widgets as widgets;

/// Contains the [context::ThemeContext] struct.
pub mod context;

/// A "prelude" for users of imskin.
///
/// Importing this module brings into scope the types needed to load a
/// theme and draw with it.
///
/// ```rust
/// use imskin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::ThemeContext;

    // Host
    pub use crate::core::gui::{ImmediateGui, ScrollViewStyles, ScrollbarVisibility, WindowId};
    pub use crate::core::layout::LayoutOption;

    // Theme
    pub use crate::theme::config::{ConfigNode, ThemeSource};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::palette::Palette;
    pub use crate::theme::skin::{StyleId, StyleSheet};
    pub use crate::theme::style::{FontHandle, StyleRecord, TextAnchor};
    pub use crate::theme::texture::Texture;

    // Widgets
    pub use crate::widgets::layout::{Layout, LayoutStyles};
    pub use crate::widgets::toggle::toggle_caption;

    // Math
    pub use nalgebra::Vector2;

    // Geometry & Color
    pub use vello::kurbo::Rect;
    pub use vello::peniko::Color;
}
