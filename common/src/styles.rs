//! Pre-computed static text styles.
//!
//! Styles are `const` so the render path never rebuilds them. Every face text
//! anchor is the top edge of its label, hence the `Baseline::Top` variants.
//! Styles that need a runtime color (log lines colored per level) build a
//! `MonoTextStyle` from `LABEL_FONT` instead.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X15, FONT_9X15_BOLD},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally, anchored at the top edge. Digital time readout.
pub const TOP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, anchored at the top edge. Month label.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, anchored at the top edge. Day label.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10). Used with runtime colors on the debug page.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Digital time readout (`ProFont` 18pt, white).
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Month abbreviation (9x15 regular, white).
pub const MONTH_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WHITE);

/// Day of month (9x15 bold, white).
pub const DAY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15_BOLD, WHITE);

/// Small white text for toast labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);
