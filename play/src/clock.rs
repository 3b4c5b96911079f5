//! Per-side game clock with an increment added after each move.

use std::time::Duration;

use rchess::Color;

use crate::config::TimeControl;

#[derive(Debug, Clone)]
pub struct Clock {
    white: Duration,
    black: Duration,
    increment: Duration,
}

impl Clock {
    pub fn new(tc: TimeControl) -> Self {
        Self {
            white: tc.initial,
            black: tc.initial,
            increment: tc.increment,
        }
    }

    pub fn remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn slot(&mut self, color: Color) -> &mut Duration {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Charge `elapsed` thinking time to `color`. Returns false once that
    /// side's time has run out.
    pub fn charge(&mut self, color: Color, elapsed: Duration) -> bool {
        let slot = self.slot(color);
        *slot = slot.saturating_sub(elapsed);
        !slot.is_zero()
    }

    /// Credit the increment to the side that just moved.
    pub fn add_increment(&mut self, color: Color) {
        let increment = self.increment;
        *self.slot(color) += increment;
    }

    pub fn flagged(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&c| self.remaining(c).is_zero())
    }

    pub fn display(&self) -> String {
        format!(
            "white {}  black {}",
            format_time(self.white),
            format_time(self.black)
        )
    }
}

/// `mm:ss`, rounded down.
pub fn format_time(d: Duration) -> String {
    let total = d.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
