// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [Layout] draw-call facade and the style handles it draws with.
//!
//! A [Layout] borrows a loaded [StyleSheet] and [Palette] for one frame.
//! Each draw call looks up its shared style through a [StyleId] resolved at
//! load time by [LayoutStyles::resolve], applies its own overrides to a
//! snapshot of that style and passes the snapshot to the host.

use std::borrow::Cow;

use vello::peniko::Color;

use imskin_theme::palette::Palette;
use imskin_theme::skin::{StyleId, StyleSheet};
use imskin_theme::style::StyleRecord;

/// The sheet styles a [Layout] draws with, resolved once per load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStyles {
    label: Option<StyleId>,
    button: Option<StyleId>,
    scroll_view: Option<StyleId>,
    vertical_scrollbar_thumb: Option<StyleId>,
    selection_grid: Option<StyleId>,
    toggle: Option<StyleId>,
    window: Option<StyleId>,
}

impl LayoutStyles {
    /// Style used by labels, margins and separators.
    pub const LABEL: &'static str = "label";
    /// Style used by buttons.
    pub const BUTTON: &'static str = "button";
    /// Background style of scroll views.
    pub const SCROLL_VIEW: &'static str = "scrollView";
    /// Style used by both scrollbars of scroll views.
    pub const VERTICAL_SCROLLBAR_THUMB: &'static str = "verticalScrollbarThumb";
    /// Style used by selection grids.
    pub const SELECTION_GRID: &'static str = "selectionGrid";
    /// Style used by toggles.
    pub const TOGGLE: &'static str = "toggle";
    /// Style used by windows.
    pub const WINDOW: &'static str = "window";

    /// Look up every layout style in `sheet`, logging the ones that are missing.
    pub fn resolve(sheet: &StyleSheet) -> Self {
        let lookup = |name: &str| {
            let id = sheet.id_of(name);
            if id.is_none() {
                log::warn!("Theme has no '{}' style; drawing it with defaults", name);
            }
            id
        };

        Self {
            label: lookup(Self::LABEL),
            button: lookup(Self::BUTTON),
            scroll_view: lookup(Self::SCROLL_VIEW),
            vertical_scrollbar_thumb: lookup(Self::VERTICAL_SCROLLBAR_THUMB),
            selection_grid: lookup(Self::SELECTION_GRID),
            toggle: lookup(Self::TOGGLE),
            window: lookup(Self::WINDOW),
        }
    }

    /// Whether every layout style was found.
    pub fn is_complete(&self) -> bool {
        [
            self.label,
            self.button,
            self.scroll_view,
            self.vertical_scrollbar_thumb,
            self.selection_grid,
            self.toggle,
            self.window,
        ]
        .iter()
        .all(Option::is_some)
    }

    /// Handle of the `label` style.
    pub fn label(&self) -> Option<StyleId> {
        self.label
    }

    /// Handle of the `button` style.
    pub fn button(&self) -> Option<StyleId> {
        self.button
    }

    /// Handle of the `scrollView` style.
    pub fn scroll_view(&self) -> Option<StyleId> {
        self.scroll_view
    }

    /// Handle of the `verticalScrollbarThumb` style.
    pub fn vertical_scrollbar_thumb(&self) -> Option<StyleId> {
        self.vertical_scrollbar_thumb
    }

    /// Handle of the `selectionGrid` style.
    pub fn selection_grid(&self) -> Option<StyleId> {
        self.selection_grid
    }

    /// Handle of the `toggle` style.
    pub fn toggle(&self) -> Option<StyleId> {
        self.toggle
    }

    /// Handle of the `window` style.
    pub fn window(&self) -> Option<StyleId> {
        self.window
    }
}

/// Styled draw calls over a loaded theme.
///
/// Draw calls never modify the sheet. See the widget modules for the
/// individual calls.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    sheet: &'a StyleSheet,
    palette: &'a Palette,
    styles: &'a LayoutStyles,
}

impl<'a> Layout<'a> {
    /// Create a facade over a loaded sheet and palette.
    pub fn new(sheet: &'a StyleSheet, palette: &'a Palette, styles: &'a LayoutStyles) -> Self {
        Self {
            sheet,
            palette,
            styles,
        }
    }

    /// The sheet styles are drawn from.
    pub fn skin(&self) -> &'a StyleSheet {
        self.sheet
    }

    /// The palette of the loaded theme.
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// The resolved style handles.
    pub fn styles(&self) -> &'a LayoutStyles {
        self.styles
    }

    /// Look up a palette color, see [Palette::resolve_color].
    pub fn color(&self, name: &str) -> Color {
        self.palette.resolve_color(name)
    }

    /// The shared style behind `id`, or the baseline when unresolved.
    pub(crate) fn style(&self, id: Option<StyleId>) -> Cow<'a, StyleRecord> {
        match id.and_then(|id| self.sheet.by_id(id)) {
            Some(record) => Cow::Borrowed(record),
            None => Cow::Owned(StyleRecord::baseline()),
        }
    }
}
