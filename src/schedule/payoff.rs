use chrono::{DateTime, Duration, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

/// when a schedule reaches its payoff period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    pub period: u32,
    pub date: NaiveDate,
}

impl Payoff {
    /// project `period` onto the calendar as `start + days_per_period * period`
    ///
    /// This is a fixed-length approximation, not month arithmetic: 12 periods
    /// land 360 days out, so the label drifts from the true calendar month on
    /// long schedules. Returns `None` when the date falls outside the range
    /// chrono can represent.
    pub fn project(start: DateTime<Utc>, period: u32, days_per_period: u32) -> Option<Self> {
        let offset = Duration::try_days(i64::from(period) * i64::from(days_per_period))?;
        let date = start.checked_add_signed(offset)?.date_naive();
        Some(Self { period, date })
    }

    /// same projection starting from the provider's current time
    pub fn project_now(
        time_provider: &SafeTimeProvider,
        period: u32,
        days_per_period: u32,
    ) -> Option<Self> {
        Self::project(time_provider.now(), period, days_per_period)
    }

    /// `YYYY-MM` label
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;

    #[test]
    fn test_thirty_day_projection() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let payoff = Payoff::project(start, 36, 30).unwrap();
        assert_eq!(payoff.period, 36);
        // 1080 days after 2024-01-15
        assert_eq!(payoff.date, NaiveDate::from_ymd_opt(2026, 12, 30).unwrap());
        assert_eq!(payoff.year_month(), "2026-12");
    }

    #[test]
    fn test_projection_drifts_from_calendar_months() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        // twelve 30-day periods fall short of a calendar year
        let payoff = Payoff::project(start, 12, 30).unwrap();
        assert_eq!(payoff.year_month(), "2025-01");
        assert_eq!(payoff.date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
    }

    #[test]
    fn test_projection_out_of_calendar_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(Payoff::project(start, u32::MAX, 31).is_none());
        assert!(Payoff::project(start, 1, u32::MAX).is_none());
        assert!(Payoff::project(start, 1, 31).is_some());
    }

    #[test]
    fn test_project_now_uses_time_provider() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        ));
        let payoff = Payoff::project_now(&time, 1, 30).unwrap();
        assert_eq!(payoff.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(payoff.year_month(), "2024-03");
    }
}
