use crate::core::Clock;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, seen from a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    utc: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(utc: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { utc, offset }
    }

    /// Pin the clock to a local wall time with a zero offset.
    pub fn local(wall: NaiveDateTime) -> Self {
        Self {
            utc: wall.and_utc(),
            offset: Utc.fix(),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.utc
    }

    fn now_local(&self) -> NaiveDateTime {
        self.utc.with_timezone(&self.offset).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_applies_offset() {
        let utc = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap()
            .and_utc();
        let clock = FixedClock::new(utc, FixedOffset::west_opt(3 * 3600).unwrap());

        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(clock.now_utc(), utc);
    }
}
