//! Screen modules besides the watch face itself.

mod debug;

pub use debug::draw_debug_page;
