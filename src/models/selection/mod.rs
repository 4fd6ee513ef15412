//! Range selection model.
//!
//! `SelectionState` holds an optional anchor (`start`) and an optional `end`.
//! The only way to move between states is [`SelectionState::after_click`],
//! which keeps the invariant that `end` is only ever set together with a
//! `start` that is not after it.

use serde::Serialize;

use crate::models::calendar_date::CalendarDate;

/// Where a selection is in the two-click protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected
    Empty,
    /// Anchor chosen, waiting for the end
    HasStart,
    /// Both ends chosen
    HasRange,
}

/// The current range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionState {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl SelectionState {
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::HasStart,
            (Some(_), Some(_)) => SelectionPhase::HasRange,
        }
    }

    pub fn is_start(&self, date: CalendarDate) -> bool {
        self.start == Some(date)
    }

    pub fn is_end(&self, date: CalendarDate) -> bool {
        self.end == Some(date)
    }

    /// Whether `date` lies inside a complete range, both ends inclusive.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// The state that results from clicking `clicked`.
    ///
    /// - nothing selected: `clicked` becomes the anchor
    /// - before the anchor: re-anchor there and drop any end
    /// - after the anchor: `clicked` becomes (or replaces) the end
    /// - on the anchor: clear everything
    pub fn after_click(&self, clicked: CalendarDate) -> Self {
        let Some(start) = self.start else {
            return Self {
                start: Some(clicked),
                end: None,
            };
        };

        if clicked < start {
            Self {
                start: Some(clicked),
                end: None,
            }
        } else if clicked > start {
            Self {
                start: Some(start),
                end: Some(clicked),
            }
        } else {
            Self::empty()
        }
    }
}
