use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum DefaultInterval {
    All,
    _1Y = 365,
    _6M = 182,
    _3M = 91,
    _1M = 30,
    _1W = 6,
}

#[must_use]
pub fn init_interval(
    dates: &[NaiveDate],
    default_interval: DefaultInterval,
    today: NaiveDate,
) -> Interval {
    let mut first = dates.iter().copied().min().unwrap_or(today);
    let last = dates.iter().copied().max().unwrap_or(today);

    if default_interval != DefaultInterval::All
        && last >= today - Duration::days(default_interval as i64)
    {
        first = today - Duration::days(default_interval as i64);
    }

    Interval { first, last: today }
}

fn completed_dates(sessions: &[Session]) -> impl Iterator<Item = NaiveDate> {
    sessions
        .iter()
        .filter(|s| !s.is_draft())
        .map(|s| s.started_at.date_naive())
}

/// Number of completed sessions for each day of the interval.
#[must_use]
pub fn daily_activity(sessions: &[Session], interval: &Interval) -> Vec<(NaiveDate, u32)> {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for date in completed_dates(sessions) {
        *counts.entry(date).or_default() += 1;
    }
    interval
        .first
        .iter_days()
        .take_while(|d| *d <= interval.last)
        .map(|d| (d, counts.get(&d).copied().unwrap_or(0)))
        .collect()
}

/// Number of completed sessions per week (starting on Monday) overlapping the interval.
#[must_use]
pub fn weekly_activity(sessions: &[Session], interval: &Interval) -> Vec<(NaiveDate, u32)> {
    let mut weeks: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for (date, count) in daily_activity(sessions, interval) {
        *weeks.entry(week_start(date)).or_default() += count;
    }
    weeks.into_iter().collect()
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Number of consecutive days with a completed session, ending today or yesterday.
#[must_use]
pub fn current_streak(sessions: &[Session], today: NaiveDate) -> u32 {
    let dates = completed_dates(sessions).collect::<BTreeSet<_>>();
    let mut day = if dates.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if dates.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };
    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn session(day: u32) -> Session {
        let mut session = Session::quick(
            None,
            vec![],
            Utc.with_ymd_and_hms(2024, 3, day, 18, 0, 0).unwrap(),
        );
        session.finish(None, Utc.with_ymd_and_hms(2024, 3, day, 19, 0, 0).unwrap());
        session
    }

    fn draft(day: u32) -> Session {
        Session::quick(
            None,
            vec![],
            Utc.with_ymd_and_hms(2024, 3, day, 18, 0, 0).unwrap(),
        )
    }

    #[rstest]
    #[case(&[], DefaultInterval::All, (date(20), date(20)))]
    #[case(&[date(1), date(10)], DefaultInterval::All, (date(1), date(20)))]
    #[case(&[date(1), date(15)], DefaultInterval::_1W, (date(14), date(20)))]
    #[case(&[date(1), date(3)], DefaultInterval::_1W, (date(1), date(20)))]
    fn test_init_interval(
        #[case] dates: &[NaiveDate],
        #[case] default_interval: DefaultInterval,
        #[case] expected: (NaiveDate, NaiveDate),
    ) {
        assert_eq!(
            init_interval(dates, default_interval, date(20)),
            Interval::from(expected.0..=expected.1)
        );
    }

    #[test]
    fn test_daily_activity() {
        let sessions = vec![session(4), session(2), session(4), draft(3), session(9)];
        assert_eq!(
            daily_activity(&sessions, &Interval::from(date(2)..=date(5))),
            vec![(date(2), 1), (date(3), 0), (date(4), 2), (date(5), 0)]
        );
    }

    #[test]
    fn test_weekly_activity() {
        // 2024-03-04 and 2024-03-11 are Mondays
        let sessions = vec![session(1), session(4), session(5), session(10), session(12)];
        assert_eq!(
            weekly_activity(&sessions, &Interval::from(date(1)..=date(12))),
            vec![
                (NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(), 1),
                (date(4), 3),
                (date(11), 1),
            ]
        );
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![session(20)], 1)]
    #[case(vec![session(18), session(19), session(20)], 3)]
    #[case(vec![session(18), session(19)], 2)]
    #[case(vec![session(17), session(18)], 0)]
    #[case(vec![session(16), session(18), session(19), session(19), session(20)], 3)]
    #[case(vec![draft(19), session(20)], 1)]
    fn test_current_streak(#[case] sessions: Vec<Session>, #[case] expected: u32) {
        assert_eq!(current_streak(&sessions, date(20)), expected);
    }
}
