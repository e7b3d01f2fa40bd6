#![warn(missing_docs)]

//! Core library for imskin => See `imskin` crate.
//!
//! Contains the interface a host immediate-mode GUI implements and a
//! headless host for tests.

/// Contains the [gui::ImmediateGui] trait.
pub mod gui;

/// Contains the [layout::LayoutOption] enum.
pub mod layout;

/// Contains the [recording::RecordingGui] host.
pub mod recording;
