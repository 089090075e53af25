//! Clock - Injectable source of "now" and "today"
//!
//! Daily rollover compares calendar days, so the day boundary is part of
//! the port: tests swap in a fixed clock to simulate day transitions.

use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock {
    /// Current instant, used for `createdAt` / `lastCompleted` stamps
    fn now(&self) -> DateTime<Utc>;

    /// The player's current calendar day
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
