//! Arc Watchface Simulator for desktop.
//!
//! Hosts the clock face in an `embedded-graphics-simulator` window: delivers
//! once-per-second ticks from the local clock, carries the 12h/24h
//! preference and display color depth, and tears the face down on quit.
//!
//! # Keys
//!
//! - `H`: toggle 12h / 24h readout (applied on the next tick)
//! - `C`: toggle color / black & white display (reloads the face)
//! - `Y`: switch between the watch face and the debug page

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod popup;
mod profiling;
mod screens;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::clock::day_stamp;
use watchface_common::colors::BLACK;
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::widgets::draw_toast;
use watchface_common::{
    ClockFace, ColorDepth, HourFormat, LogBuffer, Page, SecondTicker, log_error, log_info, log_warn,
};

use crate::popup::Popup;
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::{FRAME_TIME, STALL_TIME};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Arc Watchface Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // Host preferences
    let mut hour_format = HourFormat::default();
    let mut depth = ColorDepth::default();

    // Face state
    let mut log = LogBuffer::new();
    let mut face = ClockFace::new(depth, local_now(), hour_format, &mut log);
    let mut ticker = SecondTicker::new();

    // UI state
    let mut current_page = Page::default();
    let mut active_popup: Option<Popup> = None;

    // Profiling
    let mut metrics = ProfilingMetrics::new();

    loop {
        let frame_start = Instant::now();
        let now = local_now();
        let stamp = day_stamp(&now);

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::H => {
                            hour_format = hour_format.toggle();
                            active_popup = Some(Popup::HourFormat(Instant::now()));
                            face.invalidate();
                            log_info!(log, stamp, "Key H: {}", hour_format.label());
                        }
                        Keycode::C => {
                            depth = depth.toggle();
                            log_warn!(log, stamp, "Reloading face ({})", depth.label());
                            face = ClockFace::new(depth, now, hour_format, &mut log);
                            metrics.inc_face_loads();
                            active_popup = Some(Popup::ColorDepth(Instant::now()));
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            active_popup = None;
                            if current_page == Page::Watchface {
                                face.invalidate();
                            }
                            log_info!(log, stamp, "Page: {}", current_page.label());
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            face.invalidate();
        }

        if ticker.poll(&now) {
            face.on_tick(now, hour_format, &mut log);
            metrics.inc_ticks();
        }

        // Render based on current page
        match current_page {
            Page::Watchface => {
                if let Ok(true) = face.render(&mut display) {
                    metrics.inc_face_redraws();
                    if let Some(ref popup) = active_popup {
                        draw_toast(&mut display, popup.label(hour_format, depth)).ok();
                    }
                }
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &log, &face);
            }
        }

        let render_time = frame_start.elapsed();

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        let frame_time = frame_start.elapsed();
        if frame_time >= STALL_TIME {
            log_error!(log, stamp, "Frame stalled {}ms", frame_time.as_millis());
        }

        metrics.record_frame(frame_time, render_time, sleep_time);
    }
}

/// Local wall-clock time.
fn local_now() -> NaiveDateTime { Local::now().naive_local() }
