//! Time segments: the angular extent of seconds, minutes and hours.
//!
//! A segment maps one wall-clock field onto the dial with a fixed linear
//! scale, rounding to the nearest angle unit:
//!
//! ```text
//! value = round(field * MAX_ANGLE / period)
//! ```
//!
//! Seconds and minutes use a period of 60, hours a period of 12 (so 15:00
//! and 03:00 land on the same angle). The three segments are rebuilt every
//! tick into a fixed-size array.

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::{HOUR_PERIOD, MAX_ANGLE, MINUTE_PERIOD};
use crate::palette::Palette;

/// Number of segments on the dial.
pub const SEGMENT_COUNT: usize = 3;

/// Wall-clock unit a segment represents.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Number of field steps in one full turn of the dial.
    #[inline]
    pub const fn period(self) -> u32 {
        match self {
            Self::Second | Self::Minute => MINUTE_PERIOD,
            Self::Hour => HOUR_PERIOD,
        }
    }

    /// Single-character unit tag.
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            Self::Second => 's',
            Self::Minute => 'm',
            Self::Hour => 'h',
        }
    }

    /// Segment color for this unit.
    pub const fn color(self, palette: &Palette) -> Rgb565 {
        match self {
            Self::Second => palette.blue,
            Self::Minute => palette.red,
            Self::Hour => palette.yellow,
        }
    }

    /// Angle for a wall-clock field, in `[0, MAX_ANGLE)`.
    ///
    /// The field is reduced modulo the period first, so a 24-hour hour value
    /// maps onto the 12-hour dial.
    #[inline]
    pub const fn angle(self, field: u32) -> u32 {
        let period = self.period();
        let field = field % period;
        (field * MAX_ANGLE + period / 2) / period
    }
}

/// One colored angular region of the dial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeSegment {
    pub color: Rgb565,
    /// Angle in `[0, MAX_ANGLE)`.
    pub value: u32,
    pub unit: TimeUnit,
}

impl TimeSegment {
    /// Build the segment for `unit` at wall-clock `field`.
    pub const fn new(
        unit: TimeUnit,
        field: u32,
        palette: &Palette,
    ) -> Self {
        Self {
            color: unit.color(palette),
            value: unit.angle(field),
            unit,
        }
    }
}

/// Build the three segments in unit order: seconds, minutes, hours.
pub const fn build_segments(
    hour: u32,
    minute: u32,
    second: u32,
    palette: &Palette,
) -> [TimeSegment; SEGMENT_COUNT] {
    [
        TimeSegment::new(TimeUnit::Second, second, palette),
        TimeSegment::new(TimeUnit::Minute, minute, palette),
        TimeSegment::new(TimeUnit::Hour, hour, palette),
    ]
}

/// Sort segments ascending by angle.
///
/// Insertion sort: stable, and plenty for three elements. Equal angles keep
/// their input order.
pub fn sort_segments(segments: &mut [TimeSegment; SEGMENT_COUNT]) {
    for i in 1..segments.len() {
        let mut j = i;
        while j > 0 && segments[j - 1].value > segments[j].value {
            segments.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Return a sorted copy, leaving the input untouched.
#[inline]
pub fn sorted_segments(segments: &[TimeSegment; SEGMENT_COUNT]) -> [TimeSegment; SEGMENT_COUNT] {
    let mut sorted = *segments;
    sort_segments(&mut sorted);
    sorted
}

// =============================================================================
// Tests
// =============================================================================
