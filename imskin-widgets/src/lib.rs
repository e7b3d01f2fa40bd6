#![warn(missing_docs)]

//! Styled draw calls for imskin => See `imskin` crate.
//!
//! Contains the [Layout](layout::Layout) facade. Each module below adds the
//! draw calls of one widget kind to it.

/// Contains the [layout::Layout] facade and [layout::LayoutStyles].
pub mod layout;

/// Contains the label draw calls.
pub mod label;

/// Contains the button draw calls.
pub mod button;

/// Contains the margin and separator draw calls.
pub mod spacing;

/// Contains the scroll view draw calls.
pub mod scroll_container;

/// Contains the selection grid draw call.
pub mod selection_grid;

/// Contains the toggle draw call and [toggle::toggle_caption].
pub mod toggle;

/// Contains the window draw call.
pub mod window;
