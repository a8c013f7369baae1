//! Chart Palettes
//! Fixed color sets for the report's charts.

use plotters::style::RGBColor;

/// Sequential palette for the category-count bars.
pub const VIRIDIS: [RGBColor; 10] = [
    RGBColor(68, 1, 84),
    RGBColor(72, 40, 120),
    RGBColor(62, 73, 137),
    RGBColor(49, 104, 142),
    RGBColor(38, 130, 142),
    RGBColor(31, 158, 137),
    RGBColor(53, 183, 121),
    RGBColor(110, 206, 88),
    RGBColor(181, 222, 43),
    RGBColor(253, 231, 37),
];

/// Sequential palette for the mean-rating bars.
pub const MAKO: [RGBColor; 10] = [
    RGBColor(11, 4, 5),
    RGBColor(35, 21, 38),
    RGBColor(59, 47, 94),
    RGBColor(65, 64, 129),
    RGBColor(55, 101, 158),
    RGBColor(52, 145, 168),
    RGBColor(64, 183, 173),
    RGBColor(114, 214, 174),
    RGBColor(172, 228, 170),
    RGBColor(222, 245, 229),
];

/// Categorical palette for scatter groups.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(231, 76, 60),  // Red
    RGBColor(46, 204, 113), // Green
    RGBColor(155, 89, 182), // Purple
    RGBColor(243, 156, 18), // Orange
    RGBColor(26, 188, 156), // Teal
    RGBColor(233, 30, 99),  // Pink
    RGBColor(0, 188, 212),  // Cyan
    RGBColor(255, 87, 34),  // Deep Orange
    RGBColor(121, 85, 72),  // Brown
    RGBColor(96, 125, 139), // Blue Grey
];

/// Single-color bars for the least-reviewed ranking.
pub const SALMON: RGBColor = RGBColor(250, 128, 114);

/// Single-color bars for the lowest-rated ranking.
pub const TOMATO: RGBColor = RGBColor(255, 99, 71);
