// SPDX-License-Identifier: MIT OR Apache-2.0

use imskin_core::gui::ImmediateGui;
use imskin_core::layout::LayoutOption;

use crate::layout::Layout;

/// Marker shown before the caption of a toggle that is on.
pub const TOGGLE_ON_MARKER: &str = "● ";
/// Marker shown before the caption of a toggle that is off.
pub const TOGGLE_OFF_MARKER: &str = "○ ";

/// The caption a toggle is drawn with.
pub fn toggle_caption(value: bool, text: &str) -> String {
    let marker = if value {
        TOGGLE_ON_MARKER
    } else {
        TOGGLE_OFF_MARKER
    };
    format!("{}{}", marker, text)
}

impl<'a> Layout<'a> {
    /// Draw a toggle whose caption shows its state. Returns the new value.
    pub fn toggle<G: ImmediateGui>(
        &self,
        gui: &mut G,
        value: bool,
        text: &str,
        options: &[LayoutOption],
    ) -> bool {
        let style = self.style(self.styles().toggle());
        gui.toggle(value, &toggle_caption(value, text), &style, options)
    }
}

#[cfg(test)]
mod tests {
    use imskin_core::recording::{DrawCall, RecordingGui};

    use super::*;
    use crate::layout::tests::theme;

    #[test]
    fn test_caption_markers() {
        assert_eq!(toggle_caption(true, "Sound"), "● Sound");
        assert_eq!(toggle_caption(false, "Sound"), "○ Sound");
        assert_eq!(toggle_caption(false, ""), "○ ");
    }

    #[test]
    fn test_toggle_draws_prefixed_caption() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();
        gui.queue_toggle(true);

        assert!(layout.toggle(&mut gui, false, "Music", &[]));
        assert!(layout.toggle(&mut gui, true, "", &[]));

        let calls = gui.calls();
        assert!(matches!(&calls[0], DrawCall::Toggle { value: false, text, style, .. }
            if text == "○ Music" && style.font_size == 13));
        assert!(matches!(&calls[1], DrawCall::Toggle { value: true, text, .. } if text == "● "));
    }
}
