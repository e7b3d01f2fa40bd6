// SPDX-License-Identifier: MIT OR Apache-2.0

//! A headless [ImmediateGui] host that records every draw call.
//!
//! [RecordingGui] is used to test styled drawing code without a rendering
//! engine. Interaction results (clicks, toggles, grid selections, scroll
//! positions) are scripted ahead of time with the `queue_*` methods; when
//! nothing is queued the host reports "no interaction".
//!
//! ```rust
//! use imskin_core::gui::ImmediateGui;
//! use imskin_core::recording::{DrawCall, RecordingGui};
//! use imskin_theme::style::StyleRecord;
//!
//! let mut gui = RecordingGui::new();
//! gui.queue_button(true);
//!
//! assert!(gui.button("OK", &StyleRecord::baseline(), &[]));
//! assert!(!gui.button("OK", &StyleRecord::baseline(), &[]));
//! assert_eq!(gui.calls().len(), 2);
//! assert!(matches!(&gui.calls()[0], DrawCall::Button { text, .. } if text == "OK"));
//! ```

use std::collections::VecDeque;

use nalgebra::Vector2;
use vello::kurbo::{Point, Rect, Size};

use imskin_theme::style::StyleRecord;

use crate::gui::{ImmediateGui, ScrollViewStyles, ScrollbarVisibility, WindowId};
use crate::layout::LayoutOption;

/// One recorded draw call, holding a copy of the style it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A label.
    Label {
        /// Label text.
        text: String,
        /// Style drawn with.
        style: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// A button.
    Button {
        /// Button caption.
        text: String,
        /// Style drawn with.
        style: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// A toggle.
    Toggle {
        /// Value before interaction.
        value: bool,
        /// Toggle caption.
        text: String,
        /// Style drawn with.
        style: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// Start of a horizontal group.
    BeginHorizontal,
    /// End of a horizontal group.
    EndHorizontal,
    /// Start of a scroll view.
    BeginScrollView {
        /// Scroll position before interaction.
        position: Vector2<f32>,
        /// Horizontal scrollbar policy.
        horizontal: ScrollbarVisibility,
        /// Vertical scrollbar policy.
        vertical: ScrollbarVisibility,
        /// Horizontal scrollbar style.
        horizontal_scrollbar: StyleRecord,
        /// Vertical scrollbar style.
        vertical_scrollbar: StyleRecord,
        /// Background style.
        background: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// End of a scroll view.
    EndScrollView,
    /// A selection grid.
    SelectionGrid {
        /// Selected index before interaction, if any.
        selected: Option<usize>,
        /// Cell captions.
        captions: Vec<String>,
        /// Number of columns.
        columns: usize,
        /// Style drawn with.
        style: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// Start of a window; its contents follow until the matching [DrawCall::EndWindow].
    Window {
        /// Window id.
        id: WindowId,
        /// Requested origin.
        origin: Point,
        /// Requested size.
        size: Size,
        /// Window title.
        title: String,
        /// Style drawn with.
        style: StyleRecord,
        /// Layout options.
        options: Vec<LayoutOption>,
    },
    /// End of a window's contents.
    EndWindow {
        /// Window id.
        id: WindowId,
    },
}

/// Headless host recording draw calls and replaying scripted interaction.
#[derive(Debug, Default)]
pub struct RecordingGui {
    calls: Vec<DrawCall>,
    button_clicks: VecDeque<bool>,
    toggle_values: VecDeque<bool>,
    grid_selections: VecDeque<Option<usize>>,
    scroll_positions: VecDeque<Vector2<f32>>,
    window_rects: VecDeque<Rect>,
}

impl RecordingGui {
    /// Create a host with no recorded calls and nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Script the result of the next button.
    pub fn queue_button(&mut self, clicked: bool) {
        self.button_clicks.push_back(clicked);
    }

    /// Script the value the next toggle returns.
    pub fn queue_toggle(&mut self, value: bool) {
        self.toggle_values.push_back(value);
    }

    /// Script the selection the next selection grid returns.
    pub fn queue_selection(&mut self, index: Option<usize>) {
        self.grid_selections.push_back(index);
    }

    /// Script the position the next scroll view returns.
    pub fn queue_scroll(&mut self, position: Vector2<f32>) {
        self.scroll_positions.push_back(position);
    }

    /// Script the rectangle the next window returns.
    pub fn queue_window_rect(&mut self, rect: Rect) {
        self.window_rects.push_back(rect);
    }
}

impl ImmediateGui for RecordingGui {
    fn label(&mut self, text: &str, style: &StyleRecord, options: &[LayoutOption]) {
        self.calls.push(DrawCall::Label {
            text: text.to_string(),
            style: style.clone(),
            options: options.to_vec(),
        });
    }

    fn button(&mut self, text: &str, style: &StyleRecord, options: &[LayoutOption]) -> bool {
        self.calls.push(DrawCall::Button {
            text: text.to_string(),
            style: style.clone(),
            options: options.to_vec(),
        });
        self.button_clicks.pop_front().unwrap_or(false)
    }

    fn toggle(
        &mut self,
        value: bool,
        text: &str,
        style: &StyleRecord,
        options: &[LayoutOption],
    ) -> bool {
        self.calls.push(DrawCall::Toggle {
            value,
            text: text.to_string(),
            style: style.clone(),
            options: options.to_vec(),
        });
        self.toggle_values.pop_front().unwrap_or(value)
    }

    fn begin_horizontal(&mut self) {
        self.calls.push(DrawCall::BeginHorizontal);
    }

    fn end_horizontal(&mut self) {
        self.calls.push(DrawCall::EndHorizontal);
    }

    fn begin_scroll_view(
        &mut self,
        position: Vector2<f32>,
        styles: ScrollViewStyles<'_>,
        options: &[LayoutOption],
    ) -> Vector2<f32> {
        self.calls.push(DrawCall::BeginScrollView {
            position,
            horizontal: styles.horizontal,
            vertical: styles.vertical,
            horizontal_scrollbar: styles.horizontal_scrollbar.clone(),
            vertical_scrollbar: styles.vertical_scrollbar.clone(),
            background: styles.background.clone(),
            options: options.to_vec(),
        });
        self.scroll_positions.pop_front().unwrap_or(position)
    }

    fn end_scroll_view(&mut self) {
        self.calls.push(DrawCall::EndScrollView);
    }

    fn selection_grid(
        &mut self,
        selected: Option<usize>,
        captions: &[&str],
        columns: usize,
        style: &StyleRecord,
        options: &[LayoutOption],
    ) -> Option<usize> {
        self.calls.push(DrawCall::SelectionGrid {
            selected,
            captions: captions.iter().map(|caption| caption.to_string()).collect(),
            columns,
            style: style.clone(),
            options: options.to_vec(),
        });
        self.grid_selections.pop_front().unwrap_or(selected)
    }

    fn window(
        &mut self,
        id: WindowId,
        origin: Point,
        size: Size,
        title: &str,
        style: &StyleRecord,
        options: &[LayoutOption],
        contents: &mut dyn FnMut(&mut Self, WindowId),
    ) -> Rect {
        self.calls.push(DrawCall::Window {
            id,
            origin,
            size,
            title: title.to_string(),
            style: style.clone(),
            options: options.to_vec(),
        });
        contents(self, id);
        self.calls.push(DrawCall::EndWindow { id });
        self.window_rects
            .pop_front()
            .unwrap_or_else(|| Rect::from_origin_size(origin, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscripted_interaction_is_idle() {
        let style = StyleRecord::baseline();
        let mut gui = RecordingGui::new();

        assert!(!gui.button("a", &style, &[]));
        assert!(gui.toggle(true, "b", &style, &[]));
        assert_eq!(gui.selection_grid(Some(2), &["x", "y", "z"], 3, &style, &[]), Some(2));
        assert_eq!(gui.selection_grid(None, &["x"], 1, &style, &[]), None);

        let position = Vector2::new(0.0, 15.0);
        let styles = ScrollViewStyles {
            horizontal: ScrollbarVisibility::Hidden,
            vertical: ScrollbarVisibility::Always,
            horizontal_scrollbar: &style,
            vertical_scrollbar: &style,
            background: &style,
        };
        assert_eq!(gui.begin_scroll_view(position, styles, &[]), position);
        gui.end_scroll_view();

        assert_eq!(gui.calls().len(), 6);
    }

    #[test]
    fn test_scripted_interaction_is_replayed_in_order() {
        let style = StyleRecord::baseline();
        let mut gui = RecordingGui::new();
        gui.queue_toggle(false);
        gui.queue_selection(Some(1));
        gui.queue_scroll(Vector2::new(3.0, 4.0));

        assert!(!gui.toggle(true, "t", &style, &[]));
        assert!(gui.toggle(true, "t", &style, &[]));
        assert_eq!(gui.selection_grid(None, &["a", "b"], 2, &style, &[]), Some(1));

        let styles = ScrollViewStyles {
            horizontal: ScrollbarVisibility::Auto,
            vertical: ScrollbarVisibility::Auto,
            horizontal_scrollbar: &style,
            vertical_scrollbar: &style,
            background: &style,
        };
        assert_eq!(
            gui.begin_scroll_view(Vector2::zeros(), styles, &[]),
            Vector2::new(3.0, 4.0)
        );
    }

    #[test]
    fn test_window_contents_are_nested() {
        let style = StyleRecord::baseline();
        let mut gui = RecordingGui::new();
        let origin = Point::new(0.0, 0.0);
        let size = Size::new(100.0, 50.0);

        let returned = gui.window(7, origin, size, "Title", &style, &[], &mut |gui, id| {
            gui.label(&format!("inside {}", id), &StyleRecord::baseline(), &[]);
        });

        assert_eq!(returned, Rect::new(0.0, 0.0, 100.0, 50.0));
        let calls = gui.take_calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(&calls[0], DrawCall::Window { id: 7, title, .. } if title == "Title"));
        assert!(matches!(&calls[1], DrawCall::Label { text, .. } if text == "inside 7"));
        assert_eq!(calls[2], DrawCall::EndWindow { id: 7 });
        assert!(gui.calls().is_empty());
    }
}
