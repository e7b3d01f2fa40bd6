// SPDX-License-Identifier: MIT OR Apache-2.0

/// A sizing hint passed along with a draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutOption {
    /// Fixed width.
    Width(f32),
    /// Fixed height.
    Height(f32),
    /// Minimum width.
    MinWidth(f32),
    /// Maximum width.
    MaxWidth(f32),
    /// Minimum height.
    MinHeight(f32),
    /// Maximum height.
    MaxHeight(f32),
    /// Whether the widget may grow horizontally.
    ExpandWidth(bool),
    /// Whether the widget may grow vertically.
    ExpandHeight(bool),
}

impl LayoutOption {
    /// The fixed width among `options`, if any. The last one wins.
    pub fn width(options: &[LayoutOption]) -> Option<f32> {
        options.iter().rev().find_map(|option| match option {
            LayoutOption::Width(width) => Some(*width),
            _ => None,
        })
    }

    /// The fixed height among `options`, if any. The last one wins.
    pub fn height(options: &[LayoutOption]) -> Option<f32> {
        options.iter().rev().find_map(|option| match option {
            LayoutOption::Height(height) => Some(*height),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_size_option_wins() {
        let options = [
            LayoutOption::Width(10.0),
            LayoutOption::ExpandWidth(false),
            LayoutOption::Width(30.0),
        ];
        assert_eq!(LayoutOption::width(&options), Some(30.0));
        assert_eq!(LayoutOption::height(&options), None);
    }
}
