//! Trading signals and position-change detection.

use chrono::NaiveDate;

/// Directional stance derived from price vs. indicator. Maps to the
/// +1 / -1 / 0 convention: Long buys, Short liquidates, Flat holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Long,
    Short,
    Flat,
}

impl Signal {
    /// Compare a value against its reference: above is Long, below is
    /// Short, exactly equal is Flat.
    pub fn from_comparison(value: f64, reference: f64) -> Self {
        if value > reference {
            Signal::Long
        } else if value < reference {
            Signal::Short
        } else {
            Signal::Flat
        }
    }
}

/// Signal at one date. `signal` is `None` where the indicator is still
/// warming up; those dates carry no stance but must stay in the series so
/// the simulator can advance equity on untouched cash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub signal: Option<Signal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalSeries {
    pub points: Vec<SignalPoint>,
}

impl SignalSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Transition between two signal runs. Only the first date of a new run
/// emits an event, and only events can trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionChangeEvent {
    pub date: NaiveDate,
    pub from: Signal,
    pub to: Signal,
    pub price: f64,
}

/// Detect signal transitions in date order.
///
/// The carried signal starts at an explicit Flat and is updated only on
/// defined dates, so the warm-up region (and any interior undefined gap)
/// is skipped without resetting the state machine. A series whose signal
/// never changes after warm-up yields no events; that is valid output.
pub fn position_changes(signals: &SignalSeries) -> Vec<PositionChangeEvent> {
    let mut events = Vec::new();
    let mut carried = Signal::Flat;

    for point in &signals.points {
        let Some(signal) = point.signal else {
            continue;
        };
        if signal != carried {
            events.push(PositionChangeEvent {
                date: point.date,
                from: carried,
                to: signal,
                price: point.price,
            });
            carried = signal;
        }
    }

    events
}
