//! Overlay widgets drawn on top of the face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod popups;

pub use popups::draw_toast;
