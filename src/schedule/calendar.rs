use chrono::{DateTime, Datelike, Months, Utc};

const MS_PER_DAY: i64 = 86_400_000;

/// Absolute number of days between two instants, rounded up.
///
/// Never negative and never fractional: a delta of 1.5 days counts as 2.
///
/// # Examples
///
/// ```
/// use credit_engine::schedule::calendar::days_between;
/// use chrono::{TimeZone, Utc};
///
/// let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let b = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
/// assert_eq!(days_between(a, b), 3);
/// assert_eq!(days_between(b, a), 3);
/// ```
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> u32 {
    let ms = (b - a).num_milliseconds().abs();
    ((ms + MS_PER_DAY - 1) / MS_PER_DAY) as u32
}

/// Days a payment landed after its due date, floored at zero.
///
/// Early payments are never negative lateness.
pub fn days_late(due: DateTime<Utc>, paid: DateTime<Utc>) -> u32 {
    if paid <= due {
        0
    } else {
        days_between(due, paid)
    }
}

/// Calendar-month difference between two instants, clamped at zero.
///
/// Computed as `(end.year - start.year) * 12 + (end.month - start.month)`;
/// a future or negative delta collapses to 0, never negative tenure.
pub fn months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(0) as u32
}

/// Generate the expected monthly due-date schedule for a loan.
///
/// The schedule is 1-indexed: the first due date is one month after
/// disbursement, not the disbursement itself. Each due date is the
/// disbursement plus `i` whole months, so every date falls on the same
/// day of month as the disbursement. When a target month is shorter,
/// the day clamps to the last day of that month (Jan 31 → Feb 29 →
/// Mar 31), per `chrono::Months` addition.
pub fn generate_due_dates(
    disbursement: DateTime<Utc>,
    duration_months: u32,
) -> Vec<DateTime<Utc>> {
    (1..=duration_months)
        .filter_map(|i| disbursement.checked_add_months(Months::new(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_between_whole_days() {
        assert_eq!(days_between(ts(2024, 1, 1), ts(2024, 1, 4)), 3);
    }

    #[test]
    fn test_days_between_rounds_up() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(days_between(a, b), 2);
    }

    #[test]
    fn test_days_between_is_symmetric() {
        assert_eq!(days_between(ts(2024, 3, 10), ts(2024, 3, 1)), 9);
        assert_eq!(days_between(ts(2024, 3, 1), ts(2024, 3, 10)), 9);
    }

    #[test]
    fn test_days_between_same_instant() {
        assert_eq!(days_between(ts(2024, 1, 1), ts(2024, 1, 1)), 0);
    }

    #[test]
    fn test_days_late_early_payment_is_zero() {
        assert_eq!(days_late(ts(2024, 2, 15), ts(2024, 2, 10)), 0);
        assert_eq!(days_late(ts(2024, 2, 15), ts(2024, 2, 15)), 0);
    }

    #[test]
    fn test_days_late_counts_days_after_due() {
        assert_eq!(days_late(ts(2024, 2, 15), ts(2024, 2, 17)), 2);
        assert_eq!(days_late(ts(2024, 2, 15), ts(2024, 2, 18)), 3);
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(ts(2023, 1, 15), ts(2025, 1, 15)), 24);
        assert_eq!(months_between(ts(2023, 1, 31), ts(2023, 2, 1)), 1);
        assert_eq!(months_between(ts(2023, 5, 1), ts(2023, 5, 30)), 0);
    }

    #[test]
    fn test_months_between_never_negative() {
        assert_eq!(months_between(ts(2025, 1, 1), ts(2023, 1, 1)), 0);
    }

    #[test]
    fn test_due_dates_monthly_schedule() {
        let dates = generate_due_dates(ts(2024, 1, 15), 3);
        assert_eq!(
            dates,
            vec![ts(2024, 2, 15), ts(2024, 3, 15), ts(2024, 4, 15)]
        );
    }

    #[test]
    fn test_due_dates_first_is_one_month_out() {
        let dates = generate_due_dates(ts(2024, 1, 15), 1);
        assert_eq!(dates, vec![ts(2024, 2, 15)]);
    }

    #[test]
    fn test_due_dates_clamp_to_short_months() {
        // Disbursed on the 31st: February clamps to the 29th (leap year),
        // March recovers the 31st, April clamps to the 30th.
        let dates = generate_due_dates(ts(2024, 1, 31), 3);
        assert_eq!(
            dates,
            vec![ts(2024, 2, 29), ts(2024, 3, 31), ts(2024, 4, 30)]
        );
    }

    #[test]
    fn test_due_dates_zero_duration_is_empty() {
        assert!(generate_due_dates(ts(2024, 1, 15), 0).is_empty());
    }
}
