//! Which screen the simulator window shows.
//!
//! The clock face is shown at start; `Y` flips to the debug view and back.

/// Screen currently drawn by the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Ring, dots, time and date.
    #[default]
    Watchface,

    /// Timings, counters, preferences and recent log lines.
    Debug,
}

impl Page {
    /// The page `Y` switches to.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Watchface => Self::Debug,
            Self::Debug => Self::Watchface,
        }
    }

    /// Short page name for log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watchface => "face",
            Self::Debug => "debug",
        }
    }
}
