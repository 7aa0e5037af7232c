use luna_core::{MoonPhase, MoonState, moon_state, phase};
use luna_render::{PhaseName, format_phase, render_moon_at};
use luna_search::{
    PhaseHunt, Quarter, QuarterEvent, next_quarter, phase_hunt, prev_quarter, search_quarters,
};
use luna_time::CivilTime;

use crate::error::LunaError;

/// Phase of the Moon at a UTC time.
pub fn phase_at(date: &CivilTime) -> Result<MoonPhase, LunaError> {
    Ok(phase(date.to_jd())?)
}

/// Eight-way phase name at a UTC time.
pub fn phase_name_at(date: &CivilTime) -> Result<PhaseName, LunaError> {
    Ok(PhaseName::of(&phase_at(date)?))
}

/// Quarter instants bracketing a UTC time.
pub fn hunt_at(date: &CivilTime) -> Result<PhaseHunt, LunaError> {
    Ok(phase_hunt(date.to_jd())?)
}

/// Distances, angular sizes and ecliptic position at a UTC time.
pub fn state_at(date: &CivilTime) -> Result<MoonState, LunaError> {
    Ok(moon_state(date.to_jd())?)
}

/// Brown lunation number of the lunation containing a UTC time.
pub fn lunation_at(date: &CivilTime) -> Result<i64, LunaError> {
    Ok(hunt_at(date)?.lunation_number())
}

/// Next `quarter` strictly after a UTC time.
pub fn next_quarter_at(date: &CivilTime, quarter: Quarter) -> Result<QuarterEvent, LunaError> {
    Ok(next_quarter(date.to_jd(), quarter)?)
}

/// Most recent `quarter` at or before a UTC time.
pub fn prev_quarter_at(date: &CivilTime, quarter: Quarter) -> Result<QuarterEvent, LunaError> {
    Ok(prev_quarter(date.to_jd(), quarter)?)
}

/// All quarter events in `[start, end)`.
pub fn quarters_between(
    start: &CivilTime,
    end: &CivilTime,
) -> Result<Vec<QuarterEvent>, LunaError> {
    Ok(search_quarters(start.to_jd(), end.to_jd())?)
}

/// One-line report using `%` directives.
///
/// Shorthand for `format_phase(fmt, jd, &phase(jd)?)`.
pub fn report_at(date: &CivilTime, fmt: &str) -> Result<String, LunaError> {
    let jd = date.to_jd();
    Ok(format_phase(fmt, jd, &phase(jd)?)?)
}

/// ASCII-art moon at a UTC time.
pub fn art_at(date: &CivilTime, lines: usize) -> Result<String, LunaError> {
    Ok(render_moon_at(lines, date.to_jd())?)
}
