//! Theme-aware palette and the overlap color mixer.
//!
//! The palette is resolved once when the face loads, from the display's color
//! capability, and stays fixed until the face is dropped.
//!
//! # Mixing Rules
//!
//! | Pair (either order) | Overlap color |
//! |---------------------|---------------|
//! | red + blue          | purple        |
//! | red + yellow        | orange        |
//! | green + blue        | green         |
//! | anything else       | all           |
//!
//! Colors are matched by value, so on a black & white panel (where red, yellow
//! and blue all resolve to gray) the first rule wins.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::colors::{
    BLACK,
    CHROME_YELLOW,
    DARK_CANDY_APPLE_RED,
    DARK_GREEN,
    DUKE_BLUE,
    GRAY,
    IMPERIAL_PURPLE,
    ORANGE,
    WHITE,
};

/// Color capability of the display the face is drawn on.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ColorDepth {
    /// 64-color panel.
    #[default]
    Color,
    /// Monochrome panel; colors fall back to gray and white.
    BlackWhite,
}

impl ColorDepth {
    /// Switch to the other capability.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Color => Self::BlackWhite,
            Self::BlackWhite => Self::Color,
        }
    }

    /// Short label for status text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Color => "COLOR",
            Self::BlackWhite => "B&W",
        }
    }

    /// Pick between a color value and its monochrome fallback.
    #[inline]
    const fn fallback(self, color: Rgb565, mono: Rgb565) -> Rgb565 {
        match self {
            Self::Color => color,
            Self::BlackWhite => mono,
        }
    }
}

/// The eight named colors used by the ring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub red: Rgb565,
    pub yellow: Rgb565,
    pub blue: Rgb565,
    pub orange: Rgb565,
    pub green: Rgb565,
    pub purple: Rgb565,
    /// Neutral color, also the "no defined mix" result.
    pub all: Rgb565,
    /// Color of the unfilled part of the ring.
    pub none: Rgb565,
}

impl Palette {
    /// Resolve the palette for a display capability.
    pub const fn resolve(depth: ColorDepth) -> Self {
        Self {
            red: depth.fallback(DARK_CANDY_APPLE_RED, GRAY),
            yellow: depth.fallback(CHROME_YELLOW, GRAY),
            blue: depth.fallback(DUKE_BLUE, GRAY),
            orange: depth.fallback(ORANGE, WHITE),
            green: depth.fallback(DARK_GREEN, WHITE),
            purple: depth.fallback(IMPERIAL_PURPLE, WHITE),
            all: depth.fallback(BLACK, BLACK),
            none: depth.fallback(BLACK, BLACK),
        }
    }

    /// Color of the region where two segments overlap.
    ///
    /// Symmetric: `mix(a, b) == mix(b, a)` for any pair.
    pub fn mix(
        &self,
        a: Rgb565,
        b: Rgb565,
    ) -> Rgb565 {
        if self.is_pair(a, b, self.red, self.blue) {
            self.purple
        } else if self.is_pair(a, b, self.red, self.yellow) {
            self.orange
        } else if self.is_pair(a, b, self.green, self.blue) {
            self.green
        } else {
            self.all
        }
    }

    /// True when `{a, b}` equals `{x, y}` as an unordered pair.
    #[inline]
    fn is_pair(
        &self,
        a: Rgb565,
        b: Rgb565,
        x: Rgb565,
        y: Rgb565,
    ) -> bool {
        (same_color(a, x) && same_color(b, y)) || (same_color(a, y) && same_color(b, x))
    }
}

impl Default for Palette {
    fn default() -> Self { Self::resolve(ColorDepth::default()) }
}

/// Channel-wise color equality: red to red, green to green, blue to blue.
///
/// Rgb565 has no alpha channel; every palette color is opaque.
#[inline]
pub fn same_color(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn named(palette: &Palette) -> [(&'static str, Rgb565); 8] {
        [
            ("red", palette.red),
            ("yellow", palette.yellow),
            ("blue", palette.blue),
            ("orange", palette.orange),
            ("green", palette.green),
            ("purple", palette.purple),
            ("all", palette.all),
            ("none", palette.none),
        ]
    }

    #[test]
    fn test_mix_defined_pairs() {
        let p = Palette::resolve(ColorDepth::Color);
        assert_eq!(p.mix(p.red, p.blue), p.purple, "red + blue should be purple");
        assert_eq!(p.mix(p.red, p.yellow), p.orange, "red + yellow should be orange");
        assert_eq!(p.mix(p.green, p.blue), p.green, "green + blue should be green");
    }

    #[test]
    fn test_mix_is_symmetric() {
        for depth in [ColorDepth::Color, ColorDepth::BlackWhite] {
            let p = Palette::resolve(depth);
            for (name_a, a) in named(&p) {
                for (name_b, b) in named(&p) {
                    assert_eq!(p.mix(a, b), p.mix(b, a), "mix({name_a}, {name_b}) should be symmetric");
                }
            }
        }
    }

    #[test]
    fn test_mix_fallback_for_every_other_pair() {
        let p = Palette::resolve(ColorDepth::Color);
        let defined = [("red", "blue"), ("red", "yellow"), ("green", "blue")];

        for (name_a, a) in named(&p) {
            for (name_b, b) in named(&p) {
                let is_defined = defined
                    .iter()
                    .any(|&(x, y)| (x == name_a && y == name_b) || (x == name_b && y == name_a));
                if !is_defined {
                    assert_eq!(p.mix(a, b), p.all, "mix({name_a}, {name_b}) should fall back to all");
                }
            }
        }
    }

    #[test]
    fn test_mix_identical_pairs_fall_back() {
        let p = Palette::resolve(ColorDepth::Color);
        assert_eq!(p.mix(p.red, p.red), p.all);
        assert_eq!(p.mix(p.blue, p.blue), p.all);
        assert_eq!(p.mix(p.yellow, p.yellow), p.all);
    }

    #[test]
    fn test_same_color_compares_green_against_other_color() {
        // Differs only in the green channel
        let a = Rgb565::new(21, 0, 0);
        let b = Rgb565::new(21, 40, 0);
        assert!(!same_color(a, b), "colors differing only in green must not match");
        assert!(same_color(a, Rgb565::new(21, 0, 0)));
    }

    #[test]
    fn test_green_only_difference_does_not_mix() {
        let p = Palette::resolve(ColorDepth::Color);
        // Red with a non-zero green channel is not the palette red
        let not_red = Rgb565::new(p.red.r(), 30, p.red.b());
        assert_eq!(p.mix(not_red, p.blue), p.all);
    }

    #[test]
    fn test_resolve_color() {
        let p = Palette::resolve(ColorDepth::Color);
        assert_eq!(p.red, DARK_CANDY_APPLE_RED);
        assert_eq!(p.yellow, CHROME_YELLOW);
        assert_eq!(p.blue, DUKE_BLUE);
        assert_eq!(p.orange, ORANGE);
        assert_eq!(p.green, DARK_GREEN);
        assert_eq!(p.purple, IMPERIAL_PURPLE);
        assert_eq!(p.all, BLACK);
        assert_eq!(p.none, BLACK);
    }

    #[test]
    fn test_resolve_black_white_fallbacks() {
        let p = Palette::resolve(ColorDepth::BlackWhite);
        assert_eq!(p.red, GRAY);
        assert_eq!(p.yellow, GRAY);
        assert_eq!(p.blue, GRAY);
        assert_eq!(p.orange, WHITE);
        assert_eq!(p.green, WHITE);
        assert_eq!(p.purple, WHITE);
        assert_eq!(p.all, BLACK);
        assert_eq!(p.none, BLACK);
    }

    #[test]
    fn test_black_white_mix_matches_first_rule() {
        let p = Palette::resolve(ColorDepth::BlackWhite);
        // red, yellow and blue are all gray, so the red+blue rule applies first
        assert_eq!(p.mix(p.red, p.yellow), p.purple);
        assert_eq!(p.mix(p.blue, p.yellow), p.purple);
    }

    #[test]
    fn test_default_palette_is_color() {
        assert_eq!(Palette::default(), Palette::resolve(ColorDepth::Color));
        assert_eq!(ColorDepth::default(), ColorDepth::Color);
    }

    #[test]
    fn test_color_depth_toggle() {
        assert_eq!(ColorDepth::Color.toggle(), ColorDepth::BlackWhite);
        assert_eq!(ColorDepth::BlackWhite.toggle(), ColorDepth::Color);
    }
}
