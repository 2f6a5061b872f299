//! Display and layout configuration constants.
//!
//! Every position used by the face is computed here at compile time so the
//! render path only copies constants. Layout invariants are checked with
//! `const` assertions: a misconfigured ring or inset fails the build.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (rectangular 144x168 watch panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Angle Configuration
// =============================================================================

/// One full turn in trig angle units. Segment values live in `[0, MAX_ANGLE)`.
pub const MAX_ANGLE: u32 = 0x1_0000;

/// Ticks per full turn for seconds and minutes.
pub const MINUTE_PERIOD: u32 = 60;

/// Ticks per full turn for hours (12-hour dial).
pub const HOUR_PERIOD: u32 = 12;

// =============================================================================
// Ring Geometry
// =============================================================================

/// Inset from the screen edge to the ring's bounding box.
pub const RING_INSET: u32 = 10;

/// Radial thickness of the colored ring, measured inward from its outer edge.
pub const RING_THICKNESS: u32 = 33;

/// Diameter of the ring's outer edge (circle fitted to the inset bounds).
pub const RING_DIAMETER: u32 = min(SCREEN_WIDTH, SCREEN_HEIGHT) - 2 * RING_INSET;

/// Inset from the screen edge to the circle carrying the marker dots.
pub const MARKER_INSET: u32 = 18;

/// Diameter of the circle carrying the marker dots.
pub const MARKER_DIAMETER: u32 = min(SCREEN_WIDTH, SCREEN_HEIGHT) - 2 * MARKER_INSET;

/// Radius of each marker dot.
pub const MARKER_DOT_RADIUS: u32 = 2;

/// Number of marker dots (12, 3, 6 and 9 o'clock).
pub const MARKER_COUNT: usize = 4;

const _: () = assert!(2 * RING_THICKNESS < RING_DIAMETER);
const _: () = assert!(RING_INSET < MARKER_INSET);
const _: () = assert!(2 * MARKER_INSET < SCREEN_WIDTH);

// =============================================================================
// Text Layout
// =============================================================================

/// Top edge of the digital time readout.
pub const TIME_TEXT_TOP: i32 = 65;

/// Top edge of the month and day labels.
pub const DATE_TEXT_TOP: i32 = 111;

/// Right edge of the month label (just left of center).
pub const MONTH_TEXT_RIGHT: i32 = CENTER_X - 2;

/// Left edge of the day-of-month label (just right of center).
pub const DAY_TEXT_LEFT: i32 = CENTER_X + 4;

const _: () = assert!(TIME_TEXT_TOP < DATE_TEXT_TOP);
const _: () = assert!(DATE_TEXT_TOP < SCREEN_HEIGHT as i32);

const fn min(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}
