//! School office opening hours

use chrono::{Datelike, Timelike, Weekday};
use std::time::{Duration, Instant};

/// Fixed public holidays as `MM-DD`, same every year
pub const PUBLIC_HOLIDAYS: [&str; 11] = [
    "01-01", // New Year's Day
    "01-12", // Zanzibar Revolution Day
    "04-07", // Karume Day
    "04-26", // Union Day
    "05-01", // Labour Day
    "07-07", // Saba Saba
    "08-08", // Nane Nane
    "10-14", // Nyerere Day
    "12-09", // Independence Day
    "12-25", // Christmas Day
    "12-26", // Boxing Day
];

/// Opening time, minutes after midnight (07:30)
const OPENS_AT: u32 = 7 * 60 + 30;
/// Closing time, minutes after midnight (15:30, inclusive)
const CLOSES_AT: u32 = 15 * 60 + 30;

/// Office status at a point in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeStatus {
    ClosedWeekend,
    ClosedHoliday,
    Open,
    ClosedOutsideHours,
}

impl OfficeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClosedWeekend => "Closed (Weekend)",
            Self::ClosedHoliday => "Closed (Public Holiday)",
            Self::Open => "Open Now",
            Self::ClosedOutsideHours => "Closed (Outside Hours)",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Whether `date` falls on one of the fixed public holidays
pub fn is_public_holiday<D: Datelike>(date: &D) -> bool {
    let key = format!("{:02}-{:02}", date.month(), date.day());
    PUBLIC_HOLIDAYS.contains(&key.as_str())
}

/// Office status for a local date-time. Weekends take precedence over holidays.
pub fn compute_status<T: Datelike + Timelike>(now: &T) -> OfficeStatus {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return OfficeStatus::ClosedWeekend;
    }
    if is_public_holiday(now) {
        return OfficeStatus::ClosedHoliday;
    }
    let minutes = now.hour() * 60 + now.minute();
    if (OPENS_AT..=CLOSES_AT).contains(&minutes) {
        OfficeStatus::Open
    } else {
        OfficeStatus::ClosedOutsideHours
    }
}

/// Decides when the indicator should be recomputed
#[derive(Debug, Clone)]
pub struct OfficeHoursMonitor {
    first_check_at: Instant,
    last_check: Option<Instant>,
    refresh_requested: bool,
    status: Option<OfficeStatus>,
}

impl OfficeHoursMonitor {
    /// Delay before the first check after startup
    pub const STARTUP_DELAY: Duration = Duration::from_secs(2);
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(started: Instant) -> Self {
        Self {
            first_check_at: started + Self::STARTUP_DELAY,
            last_check: None,
            refresh_requested: false,
            status: None,
        }
    }

    /// Last computed status; `None` until the first check
    pub fn status(&self) -> Option<OfficeStatus> {
        self.status
    }

    /// The page came back into view; recheck on the next tick
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Whether a recompute is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        if self.refresh_requested {
            return true;
        }
        match self.last_check {
            None => now >= self.first_check_at,
            Some(last) => now.saturating_duration_since(last) >= Self::REFRESH_INTERVAL,
        }
    }

    /// Recompute if due. Returns the new status when a check ran.
    pub fn tick<T: Datelike + Timelike>(&mut self, now: Instant, local: &T) -> Option<OfficeStatus> {
        if !self.is_due(now) {
            return None;
        }
        // Focus refreshes don't reset the minute cadence once it has started
        if self.last_check.is_none() || !self.refresh_requested {
            self.last_check = Some(now);
        }
        self.refresh_requested = false;
        let status = compute_status(local);
        if self.status != Some(status) {
            tracing::info!(status = status.label(), "office status changed");
        }
        self.status = Some(status);
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    mod compute_status {
        use super::*;

        // 2025-03-12 is a Wednesday
        #[test]
        fn test_wednesday_morning_is_open() {
            assert_eq!(compute_status(&at(2025, 3, 12, 8, 0)), OfficeStatus::Open);
        }

        #[test]
        fn test_wednesday_afternoon_is_outside_hours() {
            assert_eq!(
                compute_status(&at(2025, 3, 12, 16, 0)),
                OfficeStatus::ClosedOutsideHours
            );
        }

        #[test]
        fn test_saturday_is_weekend() {
            assert_eq!(
                compute_status(&at(2025, 3, 15, 10, 0)),
                OfficeStatus::ClosedWeekend
            );
            assert_eq!(
                compute_status(&at(2025, 3, 16, 10, 0)),
                OfficeStatus::ClosedWeekend
            );
        }

        #[test]
        fn test_boundaries_are_inclusive() {
            assert_eq!(compute_status(&at(2025, 3, 12, 7, 29)), OfficeStatus::ClosedOutsideHours);
            assert_eq!(compute_status(&at(2025, 3, 12, 7, 30)), OfficeStatus::Open);
            assert_eq!(compute_status(&at(2025, 3, 12, 15, 30)), OfficeStatus::Open);
            assert_eq!(compute_status(&at(2025, 3, 12, 15, 31)), OfficeStatus::ClosedOutsideHours);
        }

        #[test]
        fn test_last_second_of_closing_minute_is_open() {
            let t = NaiveDate::from_ymd_opt(2025, 3, 12)
                .unwrap()
                .and_hms_opt(15, 30, 59)
                .unwrap();
            assert_eq!(compute_status(&t), OfficeStatus::Open);
        }

        #[test]
        fn test_weekday_holiday() {
            // 2025-12-09 is a Tuesday
            assert_eq!(
                compute_status(&at(2025, 12, 9, 9, 0)),
                OfficeStatus::ClosedHoliday
            );
        }

        #[test]
        fn test_weekend_beats_holiday() {
            // 2025-07-07 is a Monday, 2024-12-25 a Wednesday, 2027-12-25 a Saturday
            assert_eq!(compute_status(&at(2025, 7, 7, 9, 0)), OfficeStatus::ClosedHoliday);
            assert_eq!(compute_status(&at(2024, 12, 25, 9, 0)), OfficeStatus::ClosedHoliday);
            assert_eq!(compute_status(&at(2027, 12, 25, 9, 0)), OfficeStatus::ClosedWeekend);
        }
    }

    mod holidays {
        use super::*;

        #[test]
        fn test_eleven_fixed_dates() {
            assert_eq!(PUBLIC_HOLIDAYS.len(), 11);
        }

        #[test]
        fn test_year_independent() {
            for year in [1999, 2025, 2040] {
                assert!(is_public_holiday(&NaiveDate::from_ymd_opt(year, 4, 26).unwrap()));
                assert!(!is_public_holiday(&NaiveDate::from_ymd_opt(year, 4, 27).unwrap()));
            }
        }
    }

    mod monitor {
        use super::*;

        fn secs(v: u64) -> Duration {
            Duration::from_secs(v)
        }

        #[test]
        fn test_no_status_before_startup_delay() {
            let start = Instant::now();
            let mut monitor = OfficeHoursMonitor::new(start);
            assert!(monitor.tick(start + Duration::from_millis(1_999), &at(2025, 3, 12, 8, 0)).is_none());
            assert!(monitor.status().is_none());
        }

        #[test]
        fn test_first_check_after_delay() {
            let start = Instant::now();
            let mut monitor = OfficeHoursMonitor::new(start);
            let status = monitor.tick(start + secs(2), &at(2025, 3, 12, 8, 0));
            assert_eq!(status, Some(OfficeStatus::Open));
            assert_eq!(monitor.status(), Some(OfficeStatus::Open));
        }

        #[test]
        fn test_rechecks_every_minute() {
            let start = Instant::now();
            let mut monitor = OfficeHoursMonitor::new(start);
            monitor.tick(start + secs(2), &at(2025, 3, 12, 15, 30));
            assert!(monitor.tick(start + secs(30), &at(2025, 3, 12, 15, 30)).is_none());

            let status = monitor.tick(start + secs(62), &at(2025, 3, 12, 15, 31));
            assert_eq!(status, Some(OfficeStatus::ClosedOutsideHours));
        }

        #[test]
        fn test_focus_refresh_runs_immediately() {
            let start = Instant::now();
            let mut monitor = OfficeHoursMonitor::new(start);
            monitor.tick(start + secs(2), &at(2025, 3, 12, 8, 0));

            monitor.request_refresh();
            assert!(monitor.is_due(start + secs(3)));
            assert_eq!(
                monitor.tick(start + secs(3), &at(2025, 3, 15, 8, 0)),
                Some(OfficeStatus::ClosedWeekend)
            );
            assert!(!monitor.is_due(start + secs(4)));
            // Minute cadence still anchored at the first check
            assert!(monitor.is_due(start + secs(62)));
        }

        #[test]
        fn test_focus_refresh_before_first_check() {
            let start = Instant::now();
            let mut monitor = OfficeHoursMonitor::new(start);
            monitor.request_refresh();
            assert!(monitor.tick(start, &at(2025, 3, 12, 8, 0)).is_some());
            assert!(!monitor.is_due(start + secs(1)));
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OfficeStatus::Open.label(), "Open Now");
        assert!(OfficeStatus::Open.is_open());
        assert!(!OfficeStatus::ClosedHoliday.is_open());
    }
}
