//! Test-only framebuffer for pixel assertions.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen-sized framebuffer recording the last color written to each pixel.
/// Pixels never drawn read back as `None`; out-of-bounds writes are dropped.
pub struct Canvas {
    pixels: Vec<Option<Rgb565>>,
    pub writes: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            writes: 0,
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> { self.index(point).and_then(|i| self.pixels[i]) }

    pub fn count(&self, color: Rgb565) -> usize { self.pixels.iter().filter(|&&p| p == Some(color)).count() }

    fn index(&self, point: Point) -> Option<usize> {
        let in_bounds =
            point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT;
        in_bounds.then(|| point.y as usize * SCREEN_WIDTH as usize + point.x as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
                self.writes += 1;
            }
        }
        Ok(())
    }
}
