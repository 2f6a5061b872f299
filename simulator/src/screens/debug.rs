//! Debug/profiling page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use watchface_common::clock::ClockFace;
use watchface_common::colors::{BLACK, GRAY, GREEN, WHITE, YELLOW};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::log_buffer::LogBuffer;
use watchface_common::styles::LABEL_FONT;

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 10;
const HEADER_DIVIDER_Y: i32 = 14;
const STATS_Y: i32 = 24;
const STAT_LINE_HEIGHT: i32 = 10;
const LOG_DIVIDER_Y: i32 = 96;
const LOG_Y: i32 = 106;
const LOG_LINE_HEIGHT: i32 = 10;
const LOG_VISIBLE_LINES: usize = 6;
const COL1_X: i32 = 2;
const UPTIME_X: i32 = 86;
const CHAR_WIDTH: i32 = 6;
const PREFIX_WIDTH: i32 = CHAR_WIDTH + 2;
const STAMP_X: i32 = COL1_X + PREFIX_WIDTH;
const STAMP_WIDTH: i32 = 8 * CHAR_WIDTH + 4;
const MESSAGE_X: i32 = STAMP_X + STAMP_WIDTH;
/// Message characters that fit right of the stamp.
const LOG_MESSAGE_COLUMNS: usize = ((SCREEN_WIDTH as i32 - MESSAGE_X) / CHAR_WIDTH) as usize;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const DIVIDER_COLOR: Rgb565 = GRAY;
const STAMP_COLOR: Rgb565 = GRAY;
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &LogBuffer,
    face: &ClockFace,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_stats(display, metrics, face);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    Text::new(&uptime, Point::new(UPTIME_X, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_stats(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    face: &ClockFace,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let x = COL1_X;
    let mut y = STATS_Y;

    let mut s: String<24> = String::new();
    let _ = write!(
        s,
        "Frame {:.1} Rndr {:.1}",
        metrics.frame_time_us as f32 / 1000.0,
        metrics.render_time_us as f32 / 1000.0
    );
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Sleep {:.1}ms", metrics.sleep_time_us as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(
        s,
        "Min {:.1} Max {:.1}",
        metrics.frame_time_min_us() as f32 / 1000.0,
        metrics.frame_time_max_us as f32 / 1000.0
    );
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Avg {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0);
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "Ticks {} Draws {}", metrics.ticks, metrics.face_redraws);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let s = counters_line(metrics);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let [second, minute, hour] = *face.segments();
    let mut s: String<24> = String::new();
    let _ = write!(s, "{} {} {}", second.value, minute.value, hour.value);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(
        s,
        "{} {} @{}",
        face.hour_format().label(),
        face.depth().label(),
        face.now().format("%H:%M:%S")
    );
    Text::new(&s, Point::new(x, y), highlight_style).draw(display).ok();
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &LogBuffer,
) {
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let stamp_style = MonoTextStyle::new(LABEL_FONT, STAMP_COLOR);
    let mut y = LOG_Y;

    // Newest entries at the bottom
    for entry in log.iter().skip(log.len().saturating_sub(LOG_VISIBLE_LINES)) {
        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());

        let mut prefix: String<1> = String::new();
        let _ = prefix.push(entry.level.prefix());
        Text::new(&prefix, Point::new(COL1_X, y), style).draw(display).ok();
        Text::new(&entry.stamp_text(), Point::new(STAMP_X, y), stamp_style)
            .draw(display)
            .ok();
        Text::new(entry.visible_message(LOG_MESSAGE_COLUMNS), Point::new(MESSAGE_X, y), style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

/// Face load and frame counters. Sized for a full `u64` frame count.
fn counters_line(metrics: &ProfilingMetrics) -> String<40> {
    let mut s = String::new();
    let _ = write!(s, "Loads {} Frames {}", metrics.face_loads, metrics.total_frames);
    s
}
