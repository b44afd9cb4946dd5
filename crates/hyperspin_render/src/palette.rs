//! Axis labels and colors

/// Names for the first twelve axes
const AXIS_LABELS: [&str; 12] = ["x", "y", "z", "w", "v", "u", "t", "s", "r", "q", "p", "o"];

/// One color per axis, cycled past the end of the table
const AXIS_COLORS: [[f32; 4]; 12] = [
    [0.90, 0.20, 0.20, 1.0],
    [0.20, 0.70, 0.25, 1.0],
    [0.20, 0.40, 0.90, 1.0],
    [0.95, 0.65, 0.10, 1.0],
    [0.65, 0.25, 0.85, 1.0],
    [0.10, 0.75, 0.80, 1.0],
    [0.90, 0.35, 0.60, 1.0],
    [0.55, 0.55, 0.15, 1.0],
    [0.40, 0.40, 0.40, 1.0],
    [0.85, 0.45, 0.25, 1.0],
    [0.25, 0.55, 0.55, 1.0],
    [0.45, 0.30, 0.70, 1.0],
];

/// Label for axis `index`; falls back to `d<n>` beyond the table
pub fn axis_label(index: usize) -> String {
    AXIS_LABELS
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("d{}", index + 1))
}

/// Opaque color for axis `index`
pub fn axis_color(index: usize) -> [f32; 4] {
    AXIS_COLORS[index % AXIS_COLORS.len()]
}
