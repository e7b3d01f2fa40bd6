// SPDX-License-Identifier: MIT OR Apache-2.0

use imskin_core::gui::{ImmediateGui, WindowId};
use imskin_core::layout::LayoutOption;
use vello::kurbo::{Rect, Size};

use crate::layout::Layout;

impl<'a> Layout<'a> {
    /// Draw a themed window and its contents. Returns the window's new rectangle.
    ///
    /// The requested width and height are floored to whole pixels so text
    /// inside the window stays sharp. The origin is kept as given.
    pub fn window<G: ImmediateGui>(
        &self,
        gui: &mut G,
        id: WindowId,
        rect: Rect,
        title: &str,
        options: &[LayoutOption],
        contents: &mut dyn FnMut(&mut G, WindowId),
    ) -> Rect {
        let size = Size::new(rect.width().floor(), rect.height().floor());
        let style = self.style(self.styles().window());
        gui.window(id, rect.origin(), size, title, &style, options, contents)
    }
}
