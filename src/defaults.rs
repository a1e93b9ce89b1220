//! Default sizes and thresholds (pixels unless noted)

/// Segments shorter than this are never chosen as a visible label anchor
pub const MIN_VISIBLE_SEGMENT: f64 = 5.0;
/// A boundary segment turning back on its predecessor by less than this (radians) is skipped
pub const FOLD_BACK_ANGLE: f64 = 0.1;
/// Minimum horizontal separation enforced between consecutive boundary vertices
pub const BOUNDARY_NUDGE: f64 = 1.0;

/// Line factor for text sitting just above its anchor line
pub const ABOVE_LINE: f64 = -0.7;
/// Line factor for text sitting just below its anchor line
pub const BELOW_LINE: f64 = 0.7;
/// Line spacing compression for the 3D CPOF client
pub const CPOF3D_LINE_SPACING: f64 = 0.9;

/// Anchor segments are extended to this multiple of the text width
pub const LABEL_WIDTH_SLACK: f64 = 1.5;
/// A single-segment line repeats its end label only when this many label widths long
pub const SECOND_LABEL_SPAN: f64 = 3.5;
/// Gap between the line end and a `ToEnd` label, as a fraction of the line height
pub const END_GAP: f64 = 0.5;
/// Padding used for inside-start / inside-end placement and text backgrounds
pub const TEXT_PADDING: f64 = 2.0;

/// Arrow glyph length on route graphics at the reference DPI
pub const ARROW_BASE: f64 = 20.0;
/// DPI the arrow base length is expressed in
pub const REFERENCE_DPI: f64 = 96.0;

/// Radar search name sits this far out relative to the maximum range
pub const RADAR_LABEL_RANGE: f64 = 1.1;

/// Upper bound on the auto-scale expansion factor
pub const MAX_EXPAND_FACTOR: f64 = 2.0;
/// Damping applied to the auto-scale expansion factor
pub const EXPAND_DAMPING: f64 = 4.0;
/// Auto-scale expands only when the stack uses less than this share of the available height
pub const EXPAND_THRESHOLD: f64 = 0.5;

/// Marker appended when auto-scale drops trailing lines
pub const ELLIPSIS: &str = "\u{25CF}\u{25CF}\u{25CF}";

/// Fill alpha at or above which labels get a background
pub const FILL_ALPHA_OBSCURES_TEXT: u8 = 50;

pub const FONT_SIZE: f64 = 12.0;
pub const DEVICE_DPI: u32 = 96;
