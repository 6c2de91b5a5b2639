use crate::scoring::performance::LoanPerformanceMetrics;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// First-loan floor for members with no completed history.
const FIRST_LOAN_FLOOR: Decimal = dec!(50_000);

/// Ceiling on any limit relative to the savings balance.
const SAVINGS_CAP_MULTIPLE: Decimal = dec!(3);

/// Score-band multiplier applied to the largest completed loan.
///
/// Bands are disjoint and listed highest-first; a score exactly on a
/// boundary belongs to the higher band. Scores arrive pre-clamped to
/// [300, 850], so the bands are total.
fn score_multiplier(credit_score: u32) -> Decimal {
    match credit_score {
        800..=850 => dec!(2.2),
        740..=799 => dec!(1.8),
        670..=739 => dec!(1.5),
        580..=669 => dec!(1.2),
        500..=579 => dec!(1.0),
        _ => dec!(0.7),
    }
}

/// Maximum recommended new loan amount.
///
/// With no completed loans the member qualifies for a starter limit of
/// `max(50,000, savings * 0.5)`. Otherwise the limit is the largest
/// successfully completed principal scaled by the score-band multiplier,
/// capped at three times the savings balance. The caller rounds for display.
pub fn max_borrowing_amount(
    credit_score: u32,
    performances: &[LoanPerformanceMetrics],
    savings_balance: Decimal,
) -> Decimal {
    if performances.is_empty() {
        return FIRST_LOAN_FLOOR.max(savings_balance * dec!(0.5));
    }

    let largest_completed = performances
        .iter()
        .map(|p| p.loan_amount)
        .max()
        .unwrap_or(Decimal::ZERO);

    let base_amount = largest_completed * score_multiplier(credit_score);
    let savings_cap = savings_balance * SAVINGS_CAP_MULTIPLE;

    base_amount.min(savings_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loan::LoanId;
    use chrono::{TimeZone, Utc};

    fn metrics(amount: Decimal) -> LoanPerformanceMetrics {
        LoanPerformanceMetrics {
            loan_id: LoanId::new("loan"),
            total_payments: 6,
            on_time_payments: 6,
            late_payments: 0,
            average_days_late: Decimal::ZERO,
            duration_months: 6,
            loan_amount: amount,
            extensions_used: 0,
            performance_score: dec!(100),
            completed_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_multiplier_bands() {
        assert_eq!(score_multiplier(850), dec!(2.2));
        assert_eq!(score_multiplier(800), dec!(2.2));
        assert_eq!(score_multiplier(799), dec!(1.8));
        assert_eq!(score_multiplier(740), dec!(1.8));
        assert_eq!(score_multiplier(739), dec!(1.5));
        assert_eq!(score_multiplier(670), dec!(1.5));
        assert_eq!(score_multiplier(669), dec!(1.2));
        assert_eq!(score_multiplier(580), dec!(1.2));
        assert_eq!(score_multiplier(579), dec!(1.0));
        assert_eq!(score_multiplier(500), dec!(1.0));
        assert_eq!(score_multiplier(499), dec!(0.7));
        assert_eq!(score_multiplier(300), dec!(0.7));
    }

    #[test]
    fn test_no_history_floor() {
        assert_eq!(max_borrowing_amount(700, &[], dec!(0)), dec!(50_000));
        assert_eq!(max_borrowing_amount(700, &[], dec!(60_000)), dec!(50_000));
    }

    #[test]
    fn test_no_history_savings_half_beats_floor() {
        assert_eq!(max_borrowing_amount(700, &[], dec!(200_000)), dec!(100_000));
    }

    #[test]
    fn test_multiplier_applied_to_largest_loan() {
        let perf = vec![metrics(dec!(100_000)), metrics(dec!(200_000))];
        // Score 850 → 2.2 × 200,000 = 440,000; savings cap 3 × 1M holds off.
        assert_eq!(
            max_borrowing_amount(850, &perf, dec!(1_000_000)),
            dec!(440_000)
        );
    }

    #[test]
    fn test_savings_cap_binds() {
        let perf = vec![metrics(dec!(200_000))];
        // 2.2 × 200,000 = 440,000 but savings cap is 3 × 100,000.
        assert_eq!(
            max_borrowing_amount(850, &perf, dec!(100_000)),
            dec!(300_000)
        );
    }

    #[test]
    fn test_low_score_discounts_history() {
        let perf = vec![metrics(dec!(100_000))];
        assert_eq!(
            max_borrowing_amount(400, &perf, dec!(1_000_000)),
            dec!(70_000)
        );
    }
}
