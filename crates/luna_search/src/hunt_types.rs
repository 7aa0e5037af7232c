//! Types for quarter-phase hunting.

use std::fmt;

use crate::lunation::{lunation_number, true_phase};

/// One of the four principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    /// New moon, phase 0.
    New = 0,
    /// First quarter, phase 0.25.
    FirstQuarter = 1,
    /// Full moon, phase 0.5.
    Full = 2,
    /// Last quarter, phase 0.75.
    LastQuarter = 3,
}

impl Quarter {
    /// All quarters in lunation order.
    pub const ALL: [Quarter; 4] = [
        Quarter::New,
        Quarter::FirstQuarter,
        Quarter::Full,
        Quarter::LastQuarter,
    ];

    /// Position within the lunation: 0, 0.25, 0.5, 0.75.
    pub fn fraction(self) -> f64 {
        match self {
            Quarter::New => 0.0,
            Quarter::FirstQuarter => 0.25,
            Quarter::Full => 0.5,
            Quarter::LastQuarter => 0.75,
        }
    }

    /// 0 = new, 1 = first quarter, 2 = full, 3 = last quarter.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Quarter for an index, or `None` above 3.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The quarter that follows this one.
    pub fn next(self) -> Self {
        Self::ALL[(usize::from(self.index()) + 1) % 4]
    }

    /// The quarter that precedes this one.
    pub fn prev(self) -> Self {
        Self::ALL[(usize::from(self.index()) + 3) % 4]
    }

    /// Display name: "New Moon", "First Quarter", "Full Moon", "Last Quarter".
    pub fn name(self) -> &'static str {
        match self {
            Quarter::New => "New Moon",
            Quarter::FirstQuarter => "First Quarter",
            Quarter::Full => "Full Moon",
            Quarter::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A principal-phase instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEvent {
    /// Astronomical Julian Date of the event.
    pub jd: f64,
    /// Which quarter this event is.
    pub quarter: Quarter,
    /// Lunation count since the new moon of 1900 January.
    pub lunation_index: i64,
}

impl PhaseEvent {
    /// Event for lunation `k` and quarter `q`.
    pub fn compute(lunation_index: i64, quarter: Quarter) -> Self {
        Self {
            jd: true_phase(lunation_index, quarter),
            quarter,
            lunation_index,
        }
    }

    /// The next principal phase after this one.
    pub fn successor(&self) -> Self {
        let k = match self.quarter {
            Quarter::LastQuarter => self.lunation_index + 1,
            _ => self.lunation_index,
        };
        Self::compute(k, self.quarter.next())
    }

    /// The principal phase before this one.
    pub fn predecessor(&self) -> Self {
        let k = match self.quarter {
            Quarter::New => self.lunation_index - 1,
            _ => self.lunation_index,
        };
        Self::compute(k, self.quarter.prev())
    }
}

/// Quarter instants bracketing a query date: `prev.jd ≤ jd < next.jd`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseHunt {
    /// Latest quarter event at or before the query.
    pub prev: PhaseEvent,
    /// Earliest quarter event after the query.
    pub next: PhaseEvent,
    /// Julian Date of the new moon that opened the current lunation.
    pub new_moon_jd: f64,
}

impl PhaseHunt {
    /// Days between the two bracketing events.
    pub fn interval_days(&self) -> f64 {
        self.next.jd - self.prev.jd
    }

    /// Brown lunation number of the current lunation.
    pub fn lunation_number(&self) -> i64 {
        lunation_number(self.new_moon_jd)
    }
}

/// Configuration for the phase hunt scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuntConfig {
    /// Days subtracted from the query to seed the lunation estimate.
    pub seed_offset_days: f64,
    /// Maximum mean-lunation steps before giving up.
    pub max_scan_steps: u32,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            seed_offset_days: 45.0,
            max_scan_steps: 64,
        }
    }
}

impl HuntConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.seed_offset_days.is_finite() || self.seed_offset_days <= 0.0 {
            return Err("seed_offset_days must be positive");
        }
        if self.max_scan_steps == 0 {
            return Err("max_scan_steps must be > 0");
        }
        Ok(())
    }
}
