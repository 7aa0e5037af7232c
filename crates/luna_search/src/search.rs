//! Range and nearest-event search over quarter phases.

use luna_time::CivilTime;

use crate::error::SearchError;
use crate::hunt::phase_hunt;
use crate::hunt_types::{PhaseEvent, Quarter};
use crate::lunation::lunation_number;

/// A quarter-phase event with its UTC calendar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterEvent {
    /// Event time as astronomical Julian Date.
    pub jd: f64,
    /// Which quarter this event is.
    pub quarter: Quarter,
    /// Event time rounded to the nearest second.
    pub utc: CivilTime,
    /// Brown lunation number of the lunation containing the event.
    pub lunation: i64,
}

impl From<PhaseEvent> for QuarterEvent {
    fn from(e: PhaseEvent) -> Self {
        let new_moon = match e.quarter {
            Quarter::New => e.jd,
            _ => PhaseEvent::compute(e.lunation_index, Quarter::New).jd,
        };
        Self {
            jd: e.jd,
            quarter: e.quarter,
            utc: CivilTime::from_jd(e.jd),
            lunation: lunation_number(new_moon),
        }
    }
}

/// All quarter events in `[start_jd, end_jd)`, chronologically ordered.
pub fn search_quarters(start_jd: f64, end_jd: f64) -> Result<Vec<QuarterEvent>, SearchError> {
    for jd in [start_jd, end_jd] {
        if !jd.is_finite() {
            return Err(SearchError::NonFiniteJd(jd));
        }
    }
    if end_jd < start_jd {
        return Err(SearchError::InvalidRange { start_jd, end_jd });
    }
    let hunt = phase_hunt(start_jd)?;
    let mut event = if hunt.prev.jd >= start_jd {
        hunt.prev
    } else {
        hunt.next
    };
    let mut out = Vec::new();
    while event.jd < end_jd {
        out.push(QuarterEvent::from(event));
        event = event.successor();
    }
    Ok(out)
}

/// First `quarter` event strictly after `jd`.
pub fn next_quarter(jd: f64, quarter: Quarter) -> Result<QuarterEvent, SearchError> {
    let mut event = phase_hunt(jd)?.next;
    while event.quarter != quarter {
        event = event.successor();
    }
    Ok(event.into())
}

/// Last `quarter` event at or before `jd`.
pub fn prev_quarter(jd: f64, quarter: Quarter) -> Result<QuarterEvent, SearchError> {
    let mut event = phase_hunt(jd)?.prev;
    while event.quarter != quarter {
        event = event.predecessor();
    }
    Ok(event.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_range() {
        assert!(matches!(
            search_quarters(2_451_560.0, 2_451_550.0),
            Err(SearchError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            search_quarters(2_451_553.5, f64::INFINITY),
            Err(SearchError::NonFiniteJd(_))
        ));
        assert!(matches!(
            search_quarters(f64::NEG_INFINITY, 2_451_553.5),
            Err(SearchError::NonFiniteJd(_))
        ));
        assert!(matches!(
            search_quarters(f64::NAN, 2_451_553.5),
            Err(SearchError::NonFiniteJd(_))
        ));
    }

    #[test]
    fn empty_range_is_empty() {
        assert!(search_quarters(2_451_553.5, 2_451_553.5).unwrap().is_empty());
    }

    #[test]
    fn one_lunation_has_four_quarters() {
        let events = search_quarters(2_451_553.5, 2_451_553.5 + 29.0).unwrap();
        assert!((3..=4).contains(&events.len()));
        for w in events.windows(2) {
            assert_eq!(w[1].quarter, w[0].quarter.next());
            assert!(w[1].jd > w[0].jd);
        }
    }

    #[test]
    fn next_and_prev_full() {
        let jd = 2_451_553.5;
        let next = next_quarter(jd, Quarter::Full).unwrap();
        assert!(next.jd > jd);
        assert_eq!((next.utc.year, next.utc.month, next.utc.day), (2000, 1, 21));
        let prev = prev_quarter(jd, Quarter::Full).unwrap();
        assert!(prev.jd <= jd);
        assert_eq!((prev.utc.year, prev.utc.month, prev.utc.day), (1999, 12, 22));
    }

    #[test]
    fn event_carries_lunation() {
        let e = next_quarter(2_451_553.5, Quarter::LastQuarter).unwrap();
        assert_eq!(e.lunation, 953);
    }
}
