//! Colors used by the plot.

use glam::Vec4;

/// Series palette, cycled by series index.
pub const SERIES_PALETTE: [Vec4; 9] = [
    Vec4::new(0.6784, 0.8471, 0.902, 1.0),  // light blue
    Vec4::new(0.0, 1.0, 1.0, 1.0),          // aqua
    Vec4::new(1.0, 1.0, 0.0, 1.0),          // yellow
    Vec4::new(1.0, 0.6471, 0.0, 1.0),       // orange
    Vec4::new(1.0, 0.549, 0.0, 1.0),        // dark orange
    Vec4::new(1.0, 1.0, 1.0, 1.0),          // white
    Vec4::new(0.5804, 0.0, 0.8275, 1.0),    // dark violet
    Vec4::new(0.502, 0.502, 0.502, 1.0),    // gray
    Vec4::new(0.6627, 0.6627, 0.6627, 1.0), // dark gray
];

/// Axis widget colors for X, Y and Z.
pub const AXIS_COLORS: [Vec4; 3] = [
    Vec4::new(1.0, 0.0, 0.0, 1.0),
    Vec4::new(0.0, 0.502, 0.0, 1.0),
    Vec4::new(0.0, 0.0, 1.0, 1.0),
];

/// Color of the marker drawn at the center of every orbit.
pub const ORBIT_CENTER_COLOR: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);

/// Returns the palette color for a series index.
#[must_use]
pub fn series_color(index: usize) -> Vec4 {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Returns the color of an anchor vector, or the last axis color past Z.
#[must_use]
pub fn axis_color(component: usize) -> Vec4 {
    AXIS_COLORS[component.min(AXIS_COLORS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(series_color(0), series_color(9));
        assert_eq!(series_color(4), series_color(13));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_axis_colors_are_rgb() {
        assert_eq!(axis_color(0), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(axis_color(1).y > 0.0 && axis_color(1).x == 0.0);
        assert_eq!(axis_color(2), Vec4::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_palette_is_opaque() {
        assert!(SERIES_PALETTE.iter().all(|c| c.w == 1.0));
    }
}
