//! The color ring: four arc slices over a fixed annulus, plus marker dots.
//!
//! Given the segments sorted ascending by angle (`s0 <= s1 <= s2`), the ring is
//! painted as:
//!
//! | Slice | Range      | Color             |
//! |-------|------------|-------------------|
//! | 1     | `0..s0`    | all               |
//! | 2     | `s0..s1`   | mix(s1, s2)       |
//! | 3     | `s1..s2`   | s2                |
//! | 4     | `s2..0`    | none              |
//!
//! An end angle of 0 on the closing slice means "all the way round", so the
//! slices always cover the full turn. Interior slices with an end of 0 also
//! start at 0 and are empty.
//!
//! Angles run clockwise from 12 o'clock. `embedded-graphics` measures from
//! 3 o'clock, so every arc start is shifted back by a quarter turn.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

use crate::colors::WHITE;
use crate::config::{
    CENTER_X,
    CENTER_Y,
    MARKER_COUNT,
    MARKER_DIAMETER,
    MARKER_DOT_RADIUS,
    MAX_ANGLE,
    RING_DIAMETER,
    RING_THICKNESS,
};
use crate::palette::Palette;
use crate::segment::{SEGMENT_COUNT, TimeSegment};

/// Number of slices painted per frame.
pub const SLICE_COUNT: usize = 4;

/// Center shared by the ring and the marker circle.
pub const RING_CENTER: Point = Point::new(CENTER_X, CENTER_Y);

/// Marker dot fill (white, const-evaluated).
const MARKER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Quarter turn in degrees, the offset between 12 o'clock and 3 o'clock.
const QUARTER_TURN_DEG: f32 = 90.0;

/// One angular slice of the ring, `[start, end)` in trig angle units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcSlice {
    pub color: Rgb565,
    pub start: u32,
    pub end: u32,
}

impl ArcSlice {
    /// Slice with an exact end angle.
    pub const fn new(
        color: Rgb565,
        start: u32,
        end: u32,
    ) -> Self {
        Self { color, start, end }
    }

    /// Slice whose end angle 0 means the full turn.
    pub const fn wrapping(
        color: Rgb565,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            color,
            start,
            end: resolve_end(end),
        }
    }

    /// Angular width of the slice.
    #[inline]
    pub const fn sweep(&self) -> u32 { self.end.saturating_sub(self.start) }

    /// True for zero-width slices, which are not drawn.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.sweep() == 0 }

    /// Arc primitive for this slice on a circle of `diameter` around `center`.
    pub fn to_arc(
        &self,
        center: Point,
        diameter: u32,
    ) -> Arc {
        let start = Angle::from_degrees(angle_to_degrees(self.start) - QUARTER_TURN_DEG);
        let sweep = Angle::from_degrees(angle_to_degrees(self.sweep()));
        Arc::with_center(center, diameter, start, sweep)
    }
}

/// Map the end-angle sentinel 0 to a full turn.
#[inline]
pub const fn resolve_end(end: u32) -> u32 {
    if end == 0 { MAX_ANGLE } else { end }
}

/// Convert trig angle units to degrees.
#[inline]
pub fn angle_to_degrees(angle: u32) -> f32 { angle as f32 * 360.0 / MAX_ANGLE as f32 }

/// Compute the four ring slices from segments sorted ascending by angle.
pub fn ring_slices(
    sorted: &[TimeSegment; SEGMENT_COUNT],
    palette: &Palette,
) -> [ArcSlice; SLICE_COUNT] {
    let [first, second, third] = *sorted;
    [
        ArcSlice::new(palette.all, 0, first.value),
        ArcSlice::new(palette.mix(second.color, third.color), first.value, second.value),
        ArcSlice::new(third.color, second.value, third.value),
        ArcSlice::wrapping(palette.none, third.value, 0),
    ]
}

/// Draw the ring slices onto the display. Empty slices are skipped.
pub fn draw_ring<D>(
    display: &mut D,
    slices: &[ArcSlice; SLICE_COUNT],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for slice in slices.iter().filter(|slice| !slice.is_empty()) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(slice.color)
            .stroke_width(RING_THICKNESS)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        slice
            .to_arc(RING_CENTER, RING_DIAMETER)
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Point on a circle at `angle` (clockwise from 12 o'clock).
pub fn point_on_circle(
    center: Point,
    radius: i32,
    angle: u32,
) -> Point {
    let theta = angle as f32 * core::f32::consts::TAU / MAX_ANGLE as f32;
    let sin = micromath::F32(theta).sin().0;
    let cos = micromath::F32(theta).cos().0;
    Point::new(
        center.x + round_to_i32(sin * radius as f32),
        center.y - round_to_i32(cos * radius as f32),
    )
}

/// Marker dot centers at 12, 3, 6 and 9 o'clock.
pub fn marker_positions() -> [Point; MARKER_COUNT] {
    let radius = (MARKER_DIAMETER / 2) as i32;
    core::array::from_fn(|i| point_on_circle(RING_CENTER, radius, i as u32 * MAX_ANGLE / MARKER_COUNT as u32))
}

/// Draw the four white marker dots.
pub fn draw_markers<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for position in marker_positions() {
        Circle::with_center(position, 2 * MARKER_DOT_RADIUS + 1)
            .into_styled(MARKER_STYLE)
            .draw(display)?;
    }
    Ok(())
}

#[inline]
fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, GRAY};
    use crate::palette::ColorDepth;
    use crate::segment::{TimeUnit, build_segments, sorted_segments};
    use crate::test_support::Canvas;

    fn slices_at(hour: u32, minute: u32, second: u32) -> [ArcSlice; SLICE_COUNT] {
        let palette = Palette::resolve(ColorDepth::Color);
        let sorted = sorted_segments(&build_segments(hour, minute, second, &palette));
        ring_slices(&sorted, &palette)
    }

    /// Pixel inside the ring band at `angle`, for any stroke alignment.
    fn band_point(angle: u32) -> Point { point_on_circle(RING_CENTER, 55, angle) }

    #[test]
    fn test_slices_partition_full_turn() {
        // Every second of the 12-hour dial
        for h in 0..12 {
            for m in 0..60 {
                for s in 0..60 {
                    let slices = slices_at(h, m, s);
                    assert_eq!(slices[0].start, 0, "ring starts at 12 o'clock for {h}:{m}:{s}");
                    for pair in slices.windows(2) {
                        assert_eq!(pair[0].end, pair[1].start, "gap or overlap at {h}:{m}:{s}");
                    }
                    assert_eq!(slices[SLICE_COUNT - 1].end, MAX_ANGLE, "ring closes at a full turn for {h}:{m}:{s}");

                    let covered: u32 = slices.iter().map(ArcSlice::sweep).sum();
                    assert_eq!(covered, MAX_ANGLE, "slices should cover exactly one turn at {h}:{m}:{s}");
                }
            }
        }
    }

    #[test]
    fn test_slice_colors_follow_sorted_segments() {
        let palette = Palette::resolve(ColorDepth::Color);
        // 01:20:40 -> hour 5461 (yellow), minute 21845 (red), second 43691 (blue)
        let slices = slices_at(1, 20, 40);

        assert_eq!(slices[0].color, palette.all);
        assert_eq!(slices[1].color, palette.mix(palette.red, palette.blue));
        assert_eq!(slices[1].color, palette.purple);
        assert_eq!(slices[2].color, palette.blue);
        assert_eq!(slices[3].color, palette.none);

        assert_eq!(slices[0].end, TimeUnit::Hour.angle(1));
        assert_eq!(slices[1].end, TimeUnit::Minute.angle(20));
        assert_eq!(slices[2].end, TimeUnit::Second.angle(40));
    }

    #[test]
    fn test_wrap_sentinel_at_top_of_dial() {
        // Every segment at 0: the closing slice spans the whole dial
        let slices = slices_at(0, 0, 0);
        assert_eq!(slices[3].start, 0);
        assert_eq!(slices[3].end, MAX_ANGLE);
        assert_eq!(slices[3].sweep(), MAX_ANGLE);
        assert!(slices[..3].iter().all(ArcSlice::is_empty), "interior slices should be empty");
    }

    #[test]
    fn test_resolve_end() {
        assert_eq!(resolve_end(0), MAX_ANGLE);
        assert_eq!(resolve_end(1), 1);
        assert_eq!(resolve_end(MAX_ANGLE / 2), MAX_ANGLE / 2);
    }

    #[test]
    fn test_wrapping_only_resolves_zero() {
        let slice = ArcSlice::wrapping(BLACK, 100, 200);
        assert_eq!(slice.end, 200);
        let slice = ArcSlice::wrapping(BLACK, 100, 0);
        assert_eq!(slice.end, MAX_ANGLE);
    }

    #[test]
    fn test_angle_to_degrees() {
        assert!((angle_to_degrees(0) - 0.0).abs() < f32::EPSILON);
        assert!((angle_to_degrees(MAX_ANGLE / 4) - 90.0).abs() < 0.001);
        assert!((angle_to_degrees(MAX_ANGLE / 2) - 180.0).abs() < 0.001);
        assert!((angle_to_degrees(MAX_ANGLE) - 360.0).abs() < 0.001);
    }

    #[test]
    fn test_point_on_circle_cardinals() {
        let center = Point::new(50, 60);
        assert_eq!(point_on_circle(center, 10, 0), Point::new(50, 50), "12 o'clock is up");
        assert_eq!(point_on_circle(center, 10, MAX_ANGLE / 4), Point::new(60, 60), "3 o'clock is right");
        assert_eq!(point_on_circle(center, 10, MAX_ANGLE / 2), Point::new(50, 70), "6 o'clock is down");
        assert_eq!(point_on_circle(center, 10, MAX_ANGLE * 3 / 4), Point::new(40, 60), "9 o'clock is left");
    }

    #[test]
    fn test_marker_positions_on_inset_circle() {
        let r = (MARKER_DIAMETER / 2) as i32;
        let positions = marker_positions();
        assert_eq!(positions[0], Point::new(CENTER_X, CENTER_Y - r));
        assert_eq!(positions[1], Point::new(CENTER_X + r, CENTER_Y));
        assert_eq!(positions[2], Point::new(CENTER_X, CENTER_Y + r));
        assert_eq!(positions[3], Point::new(CENTER_X - r, CENTER_Y));
    }

    #[test]
    fn test_draw_markers_paints_white_dots() {
        let mut canvas = Canvas::new();
        draw_markers(&mut canvas).ok();
        for position in marker_positions() {
            assert_eq!(canvas.pixel(position), Some(WHITE), "dot center at {position:?}");
        }
        assert_eq!(canvas.pixel(RING_CENTER), None, "center stays untouched");
    }

    #[test]
    fn test_draw_ring_paints_slice_colors() {
        let palette = Palette::resolve(ColorDepth::Color);
        // 00:00:40 -> seconds cover 0..240 degrees, the rest is unfilled
        let slices = slices_at(0, 0, 40);
        let mut canvas = Canvas::new();
        draw_ring(&mut canvas, &slices).ok();

        assert_eq!(canvas.pixel(band_point(MAX_ANGLE / 4)), Some(palette.blue), "3 o'clock inside seconds arc");
        assert_eq!(canvas.pixel(band_point(MAX_ANGLE * 3 / 4)), Some(palette.none), "9 o'clock is unfilled");
        assert_eq!(canvas.pixel(RING_CENTER), None, "ring leaves the center open");
    }

    #[test]
    fn test_draw_ring_full_turn_sentinel() {
        let palette = Palette::resolve(ColorDepth::Color);
        let slices = slices_at(0, 0, 0);
        let mut canvas = Canvas::new();
        draw_ring(&mut canvas, &slices).ok();

        assert_eq!(canvas.pixel(band_point(MAX_ANGLE / 4)), Some(palette.none));
        assert_eq!(canvas.pixel(band_point(MAX_ANGLE * 3 / 4)), Some(palette.none));
    }

    #[test]
    fn test_draw_ring_black_white_palette() {
        let palette = Palette::resolve(ColorDepth::BlackWhite);
        // 01:20:40 -> hour 0..5461, red+blue mix to 21845, blue to 43691, then unfilled
        let sorted = sorted_segments(&build_segments(1, 20, 40, &palette));
        let slices = ring_slices(&sorted, &palette);
        let mut canvas = Canvas::new();
        draw_ring(&mut canvas, &slices).ok();

        assert_eq!(canvas.pixel(band_point(13_000)), Some(WHITE), "purple mix falls back to white");
        assert_eq!(canvas.pixel(band_point(30_000)), Some(GRAY), "blue seconds fall back to gray");
        assert_eq!(canvas.pixel(band_point(50_000)), Some(BLACK), "unfilled tail stays black");
        assert_eq!(canvas.pixel(band_point(2_000)), Some(BLACK), "all-units slice is black");
    }
}
