// SPDX-License-Identifier: MIT OR Apache-2.0

use imskin_core::gui::{ImmediateGui, ScrollViewStyles, ScrollbarVisibility};
use imskin_core::layout::LayoutOption;
use nalgebra::Vector2;

use crate::layout::Layout;

impl<'a> Layout<'a> {
    /// Start a themed scroll view. Returns the new scroll position.
    ///
    /// The vertical scrollbar is always shown; the horizontal one never is.
    /// Both bars use the `verticalScrollbarThumb` style.
    pub fn begin_scroll_view<G: ImmediateGui>(
        &self,
        gui: &mut G,
        position: Vector2<f32>,
        options: &[LayoutOption],
    ) -> Vector2<f32> {
        let thumb = self.style(self.styles().vertical_scrollbar_thumb());
        let background = self.style(self.styles().scroll_view());
        let styles = ScrollViewStyles {
            horizontal: ScrollbarVisibility::Hidden,
            vertical: ScrollbarVisibility::Always,
            horizontal_scrollbar: &thumb,
            vertical_scrollbar: &thumb,
            background: &background,
        };
        gui.begin_scroll_view(position, styles, options)
    }

    /// End the scroll view started by [Layout::begin_scroll_view].
    pub fn end_scroll_view<G: ImmediateGui>(&self, gui: &mut G) {
        gui.end_scroll_view();
    }
}
