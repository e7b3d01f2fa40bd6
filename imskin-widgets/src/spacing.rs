// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empty labels used as spacing.

use imskin_core::gui::ImmediateGui;
use imskin_core::layout::LayoutOption;

use crate::layout::Layout;

/// Height of [Layout::hr_default].
pub const DEFAULT_HR_HEIGHT: f32 = 20.0;

impl<'a> Layout<'a> {
    /// Draw an empty label `width` wide.
    pub fn margin<G: ImmediateGui>(&self, gui: &mut G, width: f32) {
        let style = self.style(self.styles().label());
        gui.label("", &style, &[LayoutOption::Width(width)]);
    }

    /// Draw an empty label `height` high.
    pub fn hr<G: ImmediateGui>(&self, gui: &mut G, height: f32) {
        let style = self.style(self.styles().label());
        gui.label("", &style, &[LayoutOption::Height(height)]);
    }

    /// Draw an empty label [DEFAULT_HR_HEIGHT] high.
    pub fn hr_default<G: ImmediateGui>(&self, gui: &mut G) {
        self.hr(gui, DEFAULT_HR_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use imskin_core::recording::{DrawCall, RecordingGui};

    use super::*;
    use crate::layout::tests::theme;

    #[test]
    fn test_spacing_uses_shared_label_style() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();

        layout.margin(&mut gui, 12.0);
        layout.hr(&mut gui, 5.0);
        layout.hr_default(&mut gui);

        let label = sheet.get("label").unwrap();
        let expected = [
            LayoutOption::Width(12.0),
            LayoutOption::Height(5.0),
            LayoutOption::Height(DEFAULT_HR_HEIGHT),
        ];
        for (call, option) in gui.calls().iter().zip(expected) {
            match call {
                DrawCall::Label { text, style, options } => {
                    assert!(text.is_empty());
                    assert_eq!(style, label);
                    assert_eq!(options, &vec![option]);
                },
                other => panic!("expected a label, got {:?}", other),
            }
        }
    }
}
