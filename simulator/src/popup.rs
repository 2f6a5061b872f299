//! Toast state with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use watchface_common::{ColorDepth, HourFormat};

use crate::timing::POPUP_DURATION;

/// Active toast with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "12H" / "24H" after pressing `H`.
    HourFormat(Instant),
    /// "COLOR" / "B&W" after pressing `C`.
    ColorDepth(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::HourFormat(t) | Self::ColorDepth(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Toast label for the current preferences.
    pub const fn label(
        &self,
        hour_format: HourFormat,
        depth: ColorDepth,
    ) -> &'static str {
        match self {
            Self::HourFormat(_) => hour_format.label(),
            Self::ColorDepth(_) => depth.label(),
        }
    }
}
