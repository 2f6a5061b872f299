//! Non-modal toast overlays for preference changes.
//!
//! A toast is a small bordered box centered on the ring's hollow, wide enough
//! for one short label such as `24H` or `B&W`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{DARK_GRAY, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{LABEL_STYLE_WHITE, TOP_CENTERED};

const TOAST_WIDTH: u32 = 56;
const TOAST_HEIGHT: u32 = 20;
const TOAST_X: i32 = (SCREEN_WIDTH - TOAST_WIDTH) as i32 / 2;
const TOAST_Y: i32 = (SCREEN_HEIGHT - TOAST_HEIGHT) as i32 / 2;

const TOAST_BORDER_POS: Point = Point::new(TOAST_X - 2, TOAST_Y - 2);
const TOAST_BORDER_SIZE: Size = Size::new(TOAST_WIDTH + 4, TOAST_HEIGHT + 4);
const TOAST_BG_POS: Point = Point::new(TOAST_X, TOAST_Y);
const TOAST_BG_SIZE: Size = Size::new(TOAST_WIDTH, TOAST_HEIGHT);

/// Label top edge, vertically centering the 10px label font.
const TOAST_TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y - 5);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const DARK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_GRAY);

/// Draw a toast carrying `label` over the center of the face.
pub fn draw_toast<D>(
    display: &mut D,
    label: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(TOAST_BORDER_POS, TOAST_BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)?;

    Rectangle::new(TOAST_BG_POS, TOAST_BG_SIZE)
        .into_styled(DARK_FILL)
        .draw(display)?;

    Text::with_text_style(label, TOAST_TEXT_POS, LABEL_STYLE_WHITE, TOP_CENTERED).draw(display)?;
    Ok(())
}
