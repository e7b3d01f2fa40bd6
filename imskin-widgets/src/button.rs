// SPDX-License-Identifier: MIT OR Apache-2.0

//! Push buttons drawn with the `button` style. Buttons always stretch
//! horizontally and are drawn in white unless a color is given.

use imskin_core::gui::ImmediateGui;
use imskin_core::layout::LayoutOption;
use imskin_theme::color::WHITE;
use imskin_theme::style::TextAnchor;
use vello::peniko::Color;

use crate::layout::Layout;

impl<'a> Layout<'a> {
    /// Draw a centered white button. Returns `true` when clicked.
    pub fn button<G: ImmediateGui>(&self, gui: &mut G, text: &str, options: &[LayoutOption]) -> bool {
        self.button_colored(gui, text, WHITE, options)
    }

    /// Draw a centered button in `color`. Returns `true` when clicked.
    pub fn button_colored<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        options: &[LayoutOption],
    ) -> bool {
        self.draw_button(gui, text, color, TextAnchor::MiddleCenter, options)
    }

    /// Draw a left aligned white button. Returns `true` when clicked.
    pub fn button_left<G: ImmediateGui>(&self, gui: &mut G, text: &str, options: &[LayoutOption]) -> bool {
        self.button_left_colored(gui, text, WHITE, options)
    }

    /// Draw a left aligned button in `color`. Returns `true` when clicked.
    pub fn button_left_colored<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        options: &[LayoutOption],
    ) -> bool {
        self.draw_button(gui, text, color, TextAnchor::MiddleLeft, options)
    }

    fn draw_button<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        alignment: TextAnchor,
        options: &[LayoutOption],
    ) -> bool {
        let style = self
            .style(self.styles().button())
            .into_owned()
            .with_text_color(color)
            .with_alignment(alignment)
            .with_stretch_width(true);
        gui.button(text, &style, options)
    }
}

#[cfg(test)]
mod tests {
    use imskin_core::recording::{DrawCall, RecordingGui};

    use super::*;
    use crate::layout::tests::theme;

    #[test]
    fn test_button_reports_click() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();
        gui.queue_button(true);

        assert!(layout.button(&mut gui, "Launch", &[]));
        assert!(!layout.button_left(&mut gui, "Abort", &[]));
    }

    #[test]
    fn test_button_overrides() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();
        let accent = layout.color("accent");

        layout.button(&mut gui, "a", &[]);
        layout.button_left_colored(&mut gui, "b", accent, &[]);

        let styles: Vec<_> = gui
            .calls()
            .iter()
            .map(|call| match call {
                DrawCall::Button { style, .. } => style.clone(),
                other => panic!("expected a button, got {:?}", other),
            })
            .collect();

        assert_eq!(styles[0].alignment, TextAnchor::MiddleCenter);
        assert_eq!(styles[0].normal.text_color, WHITE);
        assert_eq!(styles[1].alignment, TextAnchor::MiddleLeft);
        assert_eq!(styles[1].normal.text_color, accent);
        for style in &styles {
            assert!(style.stretch_width);
            assert!(style.normal.background.is_some());
            assert_eq!(style.name, "test.button");
        }
        assert!(!sheet.get("button").unwrap().stretch_width);
    }
}
