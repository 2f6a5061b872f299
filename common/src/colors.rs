//! Color constants for the watch face.
//!
//! Watch panels expose a 64-color palette (2 bits per channel). The named
//! colors below are those palette entries converted to Rgb565 so they need no
//! conversion when written to the display buffer:
//! - 2-bit level 1 (`0x55`) maps to 10 (5-bit) / 21 (6-bit)
//! - 2-bit level 2 (`0xAA`) maps to 21 (5-bit) / 42 (6-bit)
//! - 2-bit level 3 (`0xFF`) maps to 31 (5-bit) / 63 (6-bit)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Window background and the neutral ring colors.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text, marker dots, and bright fallbacks on black & white panels.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Info-level log lines.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure red. Error-level log lines.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow. Warning-level log lines.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Watch Palette Colors
// =============================================================================

/// Light gray (`0xAAAAAA`). Fallback for the segment colors on black & white panels.
pub const GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray (`0x555555`). Trace-level log lines and the toast background.
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 21, 10);

/// Dark candy-apple red (`0xAA0000`). Minute segment.
pub const DARK_CANDY_APPLE_RED: Rgb565 = Rgb565::new(21, 0, 0);

/// Chrome yellow (`0xFFAA00`). Hour segment.
pub const CHROME_YELLOW: Rgb565 = Rgb565::new(31, 42, 0);

/// Duke blue (`0x0000AA`). Second segment.
pub const DUKE_BLUE: Rgb565 = Rgb565::new(0, 0, 21);

/// Orange (`0xFF5500`). Minute/hour overlap.
pub const ORANGE: Rgb565 = Rgb565::new(31, 21, 0);

/// Dark green (`0x005500`). Overlap color for green and blue.
pub const DARK_GREEN: Rgb565 = Rgb565::new(0, 21, 0);

/// Imperial purple (`0x550055`). Minute/second overlap.
pub const IMPERIAL_PURPLE: Rgb565 = Rgb565::new(10, 0, 10);
