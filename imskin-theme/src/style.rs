//! # Style Records
//!
//! A [StyleRecord] is the fully resolved set of visual attributes for one
//! named widget style: a background texture and text color for each of the
//! eight interaction states, insets, text layout, sizing and font settings.
//!
//! ## Overview
//!
//! - **[StyleRecord]**: The resolved style
//! - **[StyleState]**: Background and text color of one interaction state
//! - **[StateKind]**: Which interaction state
//! - **[RectOffset]**: Four-sided integer insets
//! - **[ImagePosition]**, **[TextAnchor]**, **[TextClipping]**, **[FontStyle]**: Enum attributes
//! - **[FontHandle]**: Name of a host-provided font
//!
//! ## Per-Call Overrides
//!
//! Records are never mutated by drawing code. A draw call that needs a
//! different text color or alignment takes a snapshot with the builder
//! methods instead:
//!
//! ```rust
//! use imskin_theme::style::{StyleRecord, TextAnchor};
//! use imskin_theme::color::WHITE;
//!
//! let shared = StyleRecord::baseline();
//! let snapshot = shared
//!     .clone()
//!     .with_text_color(WHITE)
//!     .with_alignment(TextAnchor::MiddleCenter)
//!     .with_stretch_width(false);
//!
//! assert_eq!(shared.alignment, TextAnchor::UpperLeft);
//! assert_eq!(snapshot.alignment, TextAnchor::MiddleCenter);
//! ```

use std::fmt;

use nalgebra::Vector2;
use vello::peniko::Color;

use crate::color::BLACK;
use crate::texture::Texture;

/// An enum attribute that is written in configuration by its variant name.
pub trait ConfigEnum: Sized + Copy {
    /// Name of the enum type, used in error messages.
    const KIND: &'static str;

    /// Parse the exact variant name.
    fn from_token(token: &str) -> Option<Self>;

    /// The variant name.
    fn token(self) -> &'static str;
}

macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl ConfigEnum for $name {
            const KIND: &'static str = stringify!($name);

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn token(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

config_enum! {
    /// Where an image is placed relative to the text.
    ImagePosition {
        /// Image to the left of the text.
        ImageLeft,
        /// Image above the text.
        ImageAbove,
        /// Only the image is shown.
        ImageOnly,
        /// Only the text is shown.
        TextOnly,
    }
}

config_enum! {
    /// Anchor of text inside the widget rectangle.
    TextAnchor {
        /// Top left.
        UpperLeft,
        /// Top center.
        UpperCenter,
        /// Top right.
        UpperRight,
        /// Middle left.
        MiddleLeft,
        /// Center.
        MiddleCenter,
        /// Middle right.
        MiddleRight,
        /// Bottom left.
        LowerLeft,
        /// Bottom center.
        LowerCenter,
        /// Bottom right.
        LowerRight,
    }
}

config_enum! {
    /// What happens to text that does not fit.
    TextClipping {
        /// Text flows outside the widget.
        Overflow,
        /// Text is cut at the widget edge.
        Clip,
    }
}

config_enum! {
    /// Font style of the text.
    FontStyle {
        /// Regular.
        Normal,
        /// Bold.
        Bold,
        /// Italic.
        Italic,
        /// Bold and italic.
        BoldAndItalic,
    }
}

config_enum! {
    /// One of the eight interaction states a style describes.
    StateKind {
        /// Idle.
        Normal,
        /// Under the mouse.
        Hover,
        /// Being pressed.
        Active,
        /// Idle while switched on.
        OnNormal,
        /// Under the mouse while switched on.
        OnHover,
        /// Being pressed while switched on.
        OnActive,
        /// Has keyboard focus.
        Focused,
        /// Has keyboard focus while switched on.
        OnFocused,
    }
}

impl StateKind {
    /// The key prefix of this state in configuration (`normal`, `onHover`, ...).
    pub fn config_prefix(self) -> &'static str {
        match self {
            StateKind::Normal => "normal",
            StateKind::Hover => "hover",
            StateKind::Active => "active",
            StateKind::OnNormal => "onNormal",
            StateKind::OnHover => "onHover",
            StateKind::OnActive => "onActive",
            StateKind::Focused => "focused",
            StateKind::OnFocused => "onFocused",
        }
    }
}

/// Background and text color of one interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    /// Background texture, if any.
    pub background: Option<Texture>,
    /// Text color.
    pub text_color: Color,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            background: None,
            text_color: BLACK,
        }
    }
}

/// Four-sided integer insets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RectOffset {
    /// Left inset.
    pub left: i32,
    /// Right inset.
    pub right: i32,
    /// Top inset.
    pub top: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl RectOffset {
    /// Create new insets.
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Build insets from `[left, right, top, bottom]`, truncating toward zero.
    pub fn from_components(components: [f32; 4]) -> Self {
        let [left, right, top, bottom] = components.map(|c| c as i32);
        Self::new(left, right, top, bottom)
    }

    /// The insets as `[left, right, top, bottom]`.
    pub fn components(&self) -> [f32; 4] {
        [
            self.left as f32,
            self.right as f32,
            self.top as f32,
            self.bottom as f32,
        ]
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Name of a font the host knows how to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontHandle(String);

impl FontHandle {
    /// Name of the host's built-in font.
    pub const BUILTIN: &'static str = "Arial";

    /// Create a handle for a named font.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The host's built-in font.
    pub fn builtin() -> Self {
        Self::new(Self::BUILTIN)
    }

    /// The font name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for FontHandle {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The resolved visual attributes of one named style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    /// Style name, prefixed with the theme name.
    pub name: String,
    /// Idle state.
    pub normal: StyleState,
    /// Hovered state.
    pub hover: StyleState,
    /// Pressed state.
    pub active: StyleState,
    /// Idle state while on.
    pub on_normal: StyleState,
    /// Hovered state while on.
    pub on_hover: StyleState,
    /// Pressed state while on.
    pub on_active: StyleState,
    /// Focused state.
    pub focused: StyleState,
    /// Focused state while on.
    pub on_focused: StyleState,
    /// Border of the background image.
    pub border: RectOffset,
    /// Space around the widget.
    pub margin: RectOffset,
    /// Space between the edge and the content.
    pub padding: RectOffset,
    /// Extra space added to the background image.
    pub overflow: RectOffset,
    /// Placement of image and text.
    pub image_position: ImagePosition,
    /// Text anchor.
    pub alignment: TextAnchor,
    /// Whether long text wraps.
    pub word_wrap: bool,
    /// Text clipping mode.
    pub clipping: TextClipping,
    /// Offset applied to the content.
    pub content_offset: Vector2<f32>,
    /// Fixed width, `0` for automatic.
    pub fixed_width: f32,
    /// Fixed height, `0` for automatic.
    pub fixed_height: f32,
    /// Whether the widget stretches horizontally.
    pub stretch_width: bool,
    /// Whether the widget stretches vertically.
    pub stretch_height: bool,
    /// Font size, `0` for the font's default.
    pub font_size: i32,
    /// Font style.
    pub font_style: FontStyle,
    /// Whether markup in text is interpreted.
    pub rich_text: bool,
    /// Font the text is rendered with.
    pub font: FontHandle,
}

impl StyleRecord {
    /// The baseline every attribute defaults to when no parent provides it.
    pub fn baseline() -> Self {
        Self {
            name: String::new(),
            normal: StyleState::default(),
            hover: StyleState::default(),
            active: StyleState::default(),
            on_normal: StyleState::default(),
            on_hover: StyleState::default(),
            on_active: StyleState::default(),
            focused: StyleState::default(),
            on_focused: StyleState::default(),
            border: RectOffset::default(),
            margin: RectOffset::default(),
            padding: RectOffset::default(),
            overflow: RectOffset::default(),
            image_position: ImagePosition::ImageLeft,
            alignment: TextAnchor::UpperLeft,
            word_wrap: false,
            clipping: TextClipping::Overflow,
            content_offset: Vector2::zeros(),
            fixed_width: 0.0,
            fixed_height: 0.0,
            stretch_width: true,
            stretch_height: false,
            font_size: 0,
            font_style: FontStyle::Normal,
            rich_text: false,
            font: FontHandle::builtin(),
        }
    }

    /// Get one interaction state.
    pub fn state(&self, kind: StateKind) -> &StyleState {
        match kind {
            StateKind::Normal => &self.normal,
            StateKind::Hover => &self.hover,
            StateKind::Active => &self.active,
            StateKind::OnNormal => &self.on_normal,
            StateKind::OnHover => &self.on_hover,
            StateKind::OnActive => &self.on_active,
            StateKind::Focused => &self.focused,
            StateKind::OnFocused => &self.on_focused,
        }
    }

    /// Get one interaction state mutably.
    pub fn state_mut(&mut self, kind: StateKind) -> &mut StyleState {
        match kind {
            StateKind::Normal => &mut self.normal,
            StateKind::Hover => &mut self.hover,
            StateKind::Active => &mut self.active,
            StateKind::OnNormal => &mut self.on_normal,
            StateKind::OnHover => &mut self.on_hover,
            StateKind::OnActive => &mut self.on_active,
            StateKind::Focused => &mut self.focused,
            StateKind::OnFocused => &mut self.on_focused,
        }
    }

    /// Snapshot with a different idle text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.normal.text_color = color;
        self
    }

    /// Snapshot with a different text anchor.
    pub fn with_alignment(mut self, alignment: TextAnchor) -> Self {
        self.alignment = alignment;
        self
    }

    /// Snapshot with a different horizontal stretch flag.
    pub fn with_stretch_width(mut self, stretch: bool) -> Self {
        self.stretch_width = stretch;
        self
    }
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self::baseline()
    }
}
