// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text labels drawn with the `label` style.
//!
//! Labels are drawn in white unless a color is given, and the alignment
//! and horizontal stretch depend on the call:
//!
//! | call | alignment | stretches |
//! |---|---|---|
//! | [Layout::label] | middle left | no |
//! | [Layout::label_centered] | middle center | yes |
//! | [Layout::label_right] | middle right | no |

use imskin_core::gui::ImmediateGui;
use imskin_core::layout::LayoutOption;
use imskin_theme::color::WHITE;
use imskin_theme::style::TextAnchor;
use vello::peniko::Color;

use crate::layout::Layout;

impl<'a> Layout<'a> {
    /// Draw a left aligned white label.
    pub fn label<G: ImmediateGui>(&self, gui: &mut G, text: &str, options: &[LayoutOption]) {
        self.label_colored(gui, text, WHITE, options);
    }

    /// Draw a left aligned label in `color`.
    pub fn label_colored<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        options: &[LayoutOption],
    ) {
        self.draw_label(gui, text, color, TextAnchor::MiddleLeft, false, options);
    }

    /// Draw a centered white label.
    pub fn label_centered<G: ImmediateGui>(&self, gui: &mut G, text: &str, options: &[LayoutOption]) {
        self.label_centered_colored(gui, text, WHITE, options);
    }

    /// Draw a centered label in `color`.
    pub fn label_centered_colored<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        options: &[LayoutOption],
    ) {
        self.draw_label(gui, text, color, TextAnchor::MiddleCenter, true, options);
    }

    /// Draw a right aligned white label.
    pub fn label_right<G: ImmediateGui>(&self, gui: &mut G, text: &str, options: &[LayoutOption]) {
        self.label_right_colored(gui, text, WHITE, options);
    }

    /// Draw a right aligned label in `color`.
    pub fn label_right_colored<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        options: &[LayoutOption],
    ) {
        self.draw_label(gui, text, color, TextAnchor::MiddleRight, false, options);
    }

    /// Draw `"label: "` and `text` side by side in their own colors.
    pub fn label_and_text<G: ImmediateGui>(
        &self,
        gui: &mut G,
        label: &str,
        text: &str,
        label_color: Color,
        text_color: Color,
    ) {
        gui.begin_horizontal();
        self.label_colored(gui, &format!("{}: ", label), label_color, &[]);
        self.label_colored(gui, text, text_color, &[]);
        gui.end_horizontal();
    }

    fn draw_label<G: ImmediateGui>(
        &self,
        gui: &mut G,
        text: &str,
        color: Color,
        alignment: TextAnchor,
        stretch_width: bool,
        options: &[LayoutOption],
    ) {
        let style = self
            .style(self.styles().label())
            .into_owned()
            .with_text_color(color)
            .with_alignment(alignment)
            .with_stretch_width(stretch_width);
        gui.label(text, &style, options);
    }
}
