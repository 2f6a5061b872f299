//! Clock controller: turns wall-clock ticks into face state and pixels.
//!
//! [`ClockFace`] owns everything the face shows: the palette resolved at
//! load, the three time segments, the text buffers and per-layer dirty
//! flags. The host feeds it once-per-second ticks (see [`SecondTicker`]) and
//! asks it to render; rendering only happens when a layer is dirty.
//!
//! # Layers (z-order)
//!
//! 1. Background (black)
//! 2. Color ring
//! 3. Marker dots
//! 4. Date (month abbreviation and day of month)
//! 5. Digital time readout

use core::fmt::Write;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BLACK;
use crate::config::{CENTER_X, DATE_TEXT_TOP, DAY_TEXT_LEFT, MONTH_TEXT_RIGHT, TIME_TEXT_TOP};
use crate::log_buffer::LogBuffer;
use crate::palette::{ColorDepth, Palette};
use crate::ring::{draw_markers, draw_ring, ring_slices};
use crate::segment::{SEGMENT_COUNT, TimeSegment, build_segments, sorted_segments};
use crate::styles::{DAY_STYLE, MONTH_STYLE, TIME_STYLE, TOP_CENTERED, TOP_LEFT, TOP_RIGHT};
use crate::{log_debug, log_info, log_warn};

/// English month abbreviations, January first.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `HH:MM`
pub type TimeText = String<5>;
/// `Jan`..`Dec`
pub type MonthText = String<3>;
/// `01`..`31`
pub type DayText = String<2>;

// =============================================================================
// Hour Format
// =============================================================================

/// Host preference for the digital readout.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum HourFormat {
    /// `01`..`12`
    TwelveHour,
    /// `00`..`23`
    #[default]
    TwentyFourHour,
}

impl HourFormat {
    /// Switch to the other format.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }

    /// Short label for status text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwelveHour => "12H",
            Self::TwentyFourHour => "24H",
        }
    }

    /// Hour as shown on the readout. Midnight and noon read 12 in 12-hour form.
    pub const fn display_hour(self, hour: u32) -> u32 {
        match self {
            Self::TwentyFourHour => hour,
            Self::TwelveHour => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

// =============================================================================
// Dirty Flags
// =============================================================================

/// Which layers need repainting.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
struct DirtyLayers {
    ring: bool,
    date: bool,
    time: bool,
}

impl DirtyLayers {
    const ALL: Self = Self {
        ring: true,
        date: true,
        time: true,
    };

    #[inline]
    const fn any(self) -> bool { self.ring || self.date || self.time }
}

// =============================================================================
// Clock Face
// =============================================================================

/// Face state for one load of the watch face.
pub struct ClockFace {
    depth: ColorDepth,
    palette: Palette,
    segments: [TimeSegment; SEGMENT_COUNT],
    hour_format: HourFormat,
    now: NaiveDateTime,
    time_text: TimeText,
    month_text: MonthText,
    day_text: DayText,
    dirty: DirtyLayers,
}

impl ClockFace {
    /// Load the face: resolve the palette for `depth` and take the initial time.
    pub fn new(
        depth: ColorDepth,
        now: NaiveDateTime,
        hour_format: HourFormat,
        log: &mut LogBuffer,
    ) -> Self {
        let palette = Palette::resolve(depth);
        let mut face = Self {
            depth,
            palette,
            segments: build_segments(now.hour(), now.minute(), now.second(), &palette),
            hour_format,
            now,
            time_text: TimeText::new(),
            month_text: MonthText::new(),
            day_text: DayText::new(),
            dirty: DirtyLayers::ALL,
        };
        face.update_time_text();
        log_info!(log, day_stamp(&now), "Face loaded ({})", depth.label());
        face
    }

    /// Handle a one-second tick: rebuild segments and the readout, mark layers dirty.
    pub fn on_tick(
        &mut self,
        now: NaiveDateTime,
        hour_format: HourFormat,
        log: &mut LogBuffer,
    ) {
        let stamp = day_stamp(&now);
        if hour_format != self.hour_format {
            log_info!(log, stamp, "Hour format {}", hour_format.label());
            self.hour_format = hour_format;
        }
        if now < self.now {
            let behind = self.now.signed_duration_since(now).num_seconds();
            log_warn!(log, stamp, "Clock went back {}s", behind);
        }

        self.now = now;
        self.segments = build_segments(now.hour(), now.minute(), now.second(), &self.palette);
        self.update_time_text();
        self.dirty = DirtyLayers::ALL;

        log_debug!(log, stamp, "Tick {}:{:02}", self.time_text, now.second());
    }

    /// Mark every layer dirty, e.g. after another page covered the display.
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = DirtyLayers::ALL; }

    /// True when the next `render` will draw.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.dirty.any() }

    /// Redraw all layers in z-order if any is dirty. Returns whether it drew.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.dirty.any() {
            return Ok(false);
        }
        if self.dirty.date {
            self.update_date_text();
        }

        display.clear(BLACK)?;

        let slices = ring_slices(&sorted_segments(&self.segments), &self.palette);
        draw_ring(display, &slices)?;
        draw_markers(display)?;

        Text::with_text_style(
            &self.month_text,
            Point::new(MONTH_TEXT_RIGHT, DATE_TEXT_TOP),
            MONTH_STYLE,
            TOP_RIGHT,
        )
        .draw(display)?;
        Text::with_text_style(&self.day_text, Point::new(DAY_TEXT_LEFT, DATE_TEXT_TOP), DAY_STYLE, TOP_LEFT)
            .draw(display)?;

        Text::with_text_style(&self.time_text, Point::new(CENTER_X, TIME_TEXT_TOP), TIME_STYLE, TOP_CENTERED)
            .draw(display)?;

        self.dirty = DirtyLayers::default();
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub const fn depth(&self) -> ColorDepth { self.depth }

    pub const fn palette(&self) -> &Palette { &self.palette }

    pub const fn hour_format(&self) -> HourFormat { self.hour_format }

    /// Wall-clock time of the last tick.
    pub const fn now(&self) -> NaiveDateTime { self.now }

    /// Segments in unit order: seconds, minutes, hours.
    pub const fn segments(&self) -> &[TimeSegment; SEGMENT_COUNT] { &self.segments }

    pub fn time_text(&self) -> &str { &self.time_text }

    /// Month label as of the last date-layer redraw.
    pub fn month_text(&self) -> &str { &self.month_text }

    /// Day label as of the last date-layer redraw.
    pub fn day_text(&self) -> &str { &self.day_text }

    // -------------------------------------------------------------------------
    // Text formatting
    // -------------------------------------------------------------------------

    fn update_time_text(&mut self) {
        self.time_text.clear();
        let _ = write!(
            self.time_text,
            "{:02}:{:02}",
            self.hour_format.display_hour(self.now.hour()),
            self.now.minute()
        );
    }

    fn update_date_text(&mut self) {
        self.month_text.clear();
        let _ = self.month_text.push_str(month_abbreviation(self.now.date()));
        self.day_text.clear();
        let _ = write!(self.day_text, "{:02}", self.now.day());
    }
}

/// Three-letter English month name.
pub fn month_abbreviation(date: NaiveDate) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize % MONTH_ABBREVIATIONS.len()]
}

/// Wall-clock second of day, used as the log stamp.
#[inline]
pub fn day_stamp(now: &NaiveDateTime) -> u32 { now.num_seconds_from_midnight() }

// =============================================================================
// Second Ticker
// =============================================================================

/// Turns a continuously polled wall clock into once-per-second ticks.
#[derive(Clone, Copy, Default, Debug)]
pub struct SecondTicker {
    last: Option<(NaiveDate, u32)>,
}

impl SecondTicker {
    pub const fn new() -> Self { Self { last: None } }

    /// True on the first poll and whenever the wall-clock second changed.
    pub fn poll(
        &mut self,
        now: &NaiveDateTime,
    ) -> bool {
        let key = (now.date(), day_stamp(now));
        if self.last == Some(key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
