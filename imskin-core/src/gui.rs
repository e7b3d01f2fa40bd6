// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability interface of the host immediate-mode GUI.
//!
//! This module decouples styled drawing helpers from the engine that
//! actually lays out widgets, draws pixels and handles input. A host
//! implements [ImmediateGui] once; every call receives a fully resolved
//! [StyleRecord] to draw with.

use nalgebra::Vector2;
use vello::kurbo::{Point, Rect, Size};

use imskin_theme::style::StyleRecord;

use crate::layout::LayoutOption;

/// Identifier of a host window.
pub type WindowId = i32;

/// When a scroll view shows one of its scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarVisibility {
    /// Shown when the content overflows.
    #[default]
    Auto,
    /// Always shown.
    Always,
    /// Never shown.
    Hidden,
}

/// The styles and scrollbar policy of a scroll view.
#[derive(Debug, Clone, Copy)]
pub struct ScrollViewStyles<'a> {
    /// Horizontal scrollbar policy.
    pub horizontal: ScrollbarVisibility,
    /// Vertical scrollbar policy.
    pub vertical: ScrollbarVisibility,
    /// Style of the horizontal scrollbar.
    pub horizontal_scrollbar: &'a StyleRecord,
    /// Style of the vertical scrollbar.
    pub vertical_scrollbar: &'a StyleRecord,
    /// Style of the scroll view background.
    pub background: &'a StyleRecord,
}

/// A host that can draw immediate-mode widgets.
///
/// Every method is called once per frame for every widget shown. Methods
/// returning a value report the user's interaction during this frame.
pub trait ImmediateGui {
    /// Draw a text label.
    fn label(&mut self, text: &str, style: &StyleRecord, options: &[LayoutOption]);

    /// Draw a push button. Returns `true` on the frame it is clicked.
    fn button(&mut self, text: &str, style: &StyleRecord, options: &[LayoutOption]) -> bool;

    /// Draw a toggle. Returns the new value.
    fn toggle(
        &mut self,
        value: bool,
        text: &str,
        style: &StyleRecord,
        options: &[LayoutOption],
    ) -> bool;

    /// Start laying out widgets side by side.
    fn begin_horizontal(&mut self);

    /// Stop laying out widgets side by side.
    fn end_horizontal(&mut self);

    /// Start a scroll view. Returns the new scroll position.
    fn begin_scroll_view(
        &mut self,
        position: Vector2<f32>,
        styles: ScrollViewStyles<'_>,
        options: &[LayoutOption],
    ) -> Vector2<f32>;

    /// End the innermost scroll view.
    fn end_scroll_view(&mut self);

    /// Draw a grid of exclusive choices. Returns the selected index, or
    /// [None] while nothing is selected.
    fn selection_grid(
        &mut self,
        selected: Option<usize>,
        captions: &[&str],
        columns: usize,
        style: &StyleRecord,
        options: &[LayoutOption],
    ) -> Option<usize>;

    /// Draw a window and its contents. Returns the window's new rectangle.
    ///
    /// The requested bounds are passed as an origin and a size so the host
    /// receives the size exactly as given.
    ///
    /// `contents` is called with the host and the window id while the
    /// window's area is active.
    fn window(
        &mut self,
        id: WindowId,
        origin: Point,
        size: Size,
        title: &str,
        style: &StyleRecord,
        options: &[LayoutOption],
        contents: &mut dyn FnMut(&mut Self, WindowId),
    ) -> Rect;
}
