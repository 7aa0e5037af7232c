//! Eight-way phase names and emoji.

use std::fmt;

use luna_core::{HALF_SYNODIC_MONTH_DAYS, MoonPhase};

/// Below this illuminated fraction the Moon is called new.
const NEW_BELOW: f64 = 0.04;
/// Above this illuminated fraction the Moon is called full.
const FULL_ABOVE: f64 = 0.96;
/// Open interval of illuminated fraction called a quarter.
const QUARTER_LOW: f64 = 0.46;
const QUARTER_HIGH: f64 = 0.54;

/// Which way up the Moon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

/// Named phase, classified from illuminated fraction and age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseName {
    New = 0,
    WaxingCrescent = 1,
    FirstQuarter = 2,
    WaxingGibbous = 3,
    Full = 4,
    WaningGibbous = 5,
    LastQuarter = 6,
    WaningCrescent = 7,
}

const NORTHERN_EMOJI: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
const SOUTHERN_EMOJI: [&str; 8] = ["🌑", "🌘", "🌗", "🌖", "🌕", "🌔", "🌓", "🌒"];

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::New,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::Full,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Classify from illuminated fraction and age in days.
    ///
    /// Exactly 0.54 falls through to crescent, as does exactly 0.04.
    pub fn classify(illuminated: f64, age_days: f64) -> Self {
        let waning = age_days > HALF_SYNODIC_MONTH_DAYS;
        if illuminated < NEW_BELOW {
            PhaseName::New
        } else if illuminated > FULL_ABOVE {
            PhaseName::Full
        } else if illuminated > QUARTER_LOW && illuminated < QUARTER_HIGH {
            if waning {
                PhaseName::LastQuarter
            } else {
                PhaseName::FirstQuarter
            }
        } else if illuminated > QUARTER_HIGH {
            if waning {
                PhaseName::WaningGibbous
            } else {
                PhaseName::WaxingGibbous
            }
        } else if waning {
            PhaseName::WaningCrescent
        } else {
            PhaseName::WaxingCrescent
        }
    }

    pub fn of(phase: &MoonPhase) -> Self {
        Self::classify(phase.illuminated_fraction, phase.age_days)
    }

    /// 0..=7 in lunation order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseName::New => "New",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::Full => "Full",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    /// Emoji as seen from the given hemisphere.
    pub fn emoji(self, hemisphere: Hemisphere) -> &'static str {
        match hemisphere {
            Hemisphere::Northern => NORTHERN_EMOJI[self.index()],
            Hemisphere::Southern => SOUTHERN_EMOJI[self.index()],
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
