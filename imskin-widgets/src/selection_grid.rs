// SPDX-License-Identifier: MIT OR Apache-2.0

use imskin_core::gui::ImmediateGui;
use imskin_core::layout::LayoutOption;

use crate::layout::Layout;

impl<'a> Layout<'a> {
    /// Draw a grid of exclusive choices with `columns` cells per row.
    ///
    /// Returns the selected index after interaction, [None] while nothing
    /// is selected.
    pub fn selection_grid<G: ImmediateGui>(
        &self,
        gui: &mut G,
        selected: Option<usize>,
        captions: &[&str],
        columns: usize,
        options: &[LayoutOption],
    ) -> Option<usize> {
        let style = self.style(self.styles().selection_grid());
        gui.selection_grid(selected, captions, columns, &style, options)
    }
}

#[cfg(test)]
mod tests {
    use imskin_core::recording::{DrawCall, RecordingGui};

    use super::*;
    use crate::layout::tests::theme;

    #[test]
    fn test_selection_grid_passes_choices_through() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();
        gui.queue_selection(Some(2));

        let selected = layout.selection_grid(&mut gui, None, &["Low", "Mid", "High"], 3, &[]);

        assert_eq!(selected, Some(2));
        match &gui.calls()[0] {
            DrawCall::SelectionGrid { selected, captions, columns, style, .. } => {
                assert_eq!(*selected, None);
                assert_eq!(captions, &vec!["Low", "Mid", "High"]);
                assert_eq!(*columns, 3);
                assert_eq!(style, sheet.get("selectionGrid").unwrap());
            },
            other => panic!("expected a selection grid, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_survives_idle_frame() {
        let (sheet, palette, styles) = theme();
        let layout = Layout::new(&sheet, &palette, &styles);
        let mut gui = RecordingGui::new();

        assert_eq!(layout.selection_grid(&mut gui, Some(1), &["On", "Off"], 2, &[]), Some(1));
        assert_eq!(layout.selection_grid(&mut gui, None, &["On", "Off"], 2, &[]), None);
    }
}
