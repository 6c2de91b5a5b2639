use crate::core::history::MemberHistory;
use crate::core::result::{CreditScoreResult, FactorScores};
use crate::scoring::factors::{
    financial_stability_score, loan_experience_score, payment_history_score,
    platform_tenure_score,
};
use crate::scoring::limit::max_borrowing_amount;
use crate::scoring::performance::LoanPerformanceMetrics;
use crate::scoring::recommend::recommendations;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Lower bound of the final credit score.
pub const MIN_SCORE: u32 = 300;
/// Upper bound of the final credit score.
pub const MAX_SCORE: u32 = 850;

/// Factor weights. They sum to 1.0; the composite is nominally 0-100.
const WEIGHT_PAYMENT_HISTORY: Decimal = dec!(0.5);
const WEIGHT_LOAN_EXPERIENCE: Decimal = dec!(0.25);
const WEIGHT_PLATFORM_TENURE: Decimal = dec!(0.15);
const WEIGHT_FINANCIAL_STABILITY: Decimal = dec!(0.1);

/// Scale and offset mapping the 0-100 composite onto the 300-850 range.
/// Each factor caps near 100, so the pre-clamp maximum is 1150; top
/// performers saturate at 850.
const SCORE_SCALE: Decimal = dec!(8.5);
const SCORE_OFFSET: Decimal = dec!(300);

/// Round to a whole unit, ties away from zero.
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn round_to_u32(value: Decimal) -> u32 {
    round_whole(value).to_u32().unwrap_or(0)
}

/// The credit scoring engine.
///
/// Stateless and pure: every invocation is independent and side-effect
/// free, so concurrent calls for different members need no coordination.
///
/// # Examples
///
/// ```
/// use credit_engine::core::history::MemberHistory;
/// use credit_engine::core::member::{MemberId, MemberProfile};
/// use credit_engine::scoring::engine::CreditScoringEngine;
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let profile = MemberProfile::new(MemberId::new("m"), Utc::now(), dec!(80_000));
/// let history = MemberHistory::new(profile, vec![], vec![]);
/// let result = CreditScoringEngine::score(&history);
/// assert!(result.credit_score() >= 300 && result.credit_score() <= 850);
/// ```
pub struct CreditScoringEngine;

impl CreditScoringEngine {
    /// Score one member's history.
    ///
    /// # Algorithm
    ///
    /// 1. Partition loans into completed and active.
    /// 2. Evaluate repayment performance for every completed loan.
    /// 3. Compute the four factor scores.
    /// 4. Composite = `300 + 8.5 * (0.5*PH + 0.25*LE + 0.15*PT + 0.1*FS)`,
    ///    rounded and clamped to [300, 850].
    /// 5. Derive grade, risk tier, borrowing limit, and recommendations.
    pub fn score(history: &MemberHistory) -> CreditScoreResult {
        let profile = history.profile();

        let performances: Vec<LoanPerformanceMetrics> = history
            .completed_loans()
            .into_iter()
            .map(|loan| LoanPerformanceMetrics::evaluate(loan, history.repayments()))
            .collect();

        let payment_history = payment_history_score(&performances);
        let loan_experience = loan_experience_score(&performances);
        let platform_tenure = platform_tenure_score(profile, history.as_of());
        let financial_stability =
            financial_stability_score(profile, history.outstanding_debt());

        debug!(
            "member {}: factors PH={} LE={} PT={} FS={}",
            profile.member_id(),
            payment_history,
            loan_experience,
            platform_tenure,
            financial_stability
        );

        let composite = payment_history * WEIGHT_PAYMENT_HISTORY
            + loan_experience * WEIGHT_LOAN_EXPERIENCE
            + platform_tenure * WEIGHT_PLATFORM_TENURE
            + financial_stability * WEIGHT_FINANCIAL_STABILITY;

        let credit_score =
            round_to_u32(SCORE_OFFSET + SCORE_SCALE * composite).clamp(MIN_SCORE, MAX_SCORE);

        let limit = max_borrowing_amount(credit_score, &performances, profile.savings_balance());
        let advice = recommendations(credit_score, &performances, profile);

        debug!(
            "member {}: score={} limit={}",
            profile.member_id(),
            credit_score,
            limit
        );

        CreditScoreResult::new(
            profile.member_id().clone(),
            credit_score,
            round_whole(limit),
            FactorScores {
                payment_history: round_to_u32(payment_history),
                loan_experience: round_to_u32(loan_experience),
                platform_tenure: round_to_u32(platform_tenure),
                financial_stability: round_to_u32(financial_stability),
            },
            advice,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loan::{LoanId, LoanRecord, LoanStatus};
    use crate::core::member::{MemberId, MemberProfile};
    use crate::core::repayment::{RepaymentRecord, RepaymentStatus};
    use crate::core::result::{CreditGrade, RiskTier};
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_round_whole_ties_away_from_zero() {
        assert_eq!(round_whole(dec!(929.5)), dec!(930));
        assert_eq!(round_whole(dec!(929.49)), dec!(929));
        assert_eq!(round_whole(dec!(930.5)), dec!(931));
    }

    #[test]
    fn test_new_member_with_no_history() {
        // Ten months of tenure, 20k savings, nothing else:
        // PT = 28, FS = 40, composite = 0.15*28 + 0.1*40 = 8.2,
        // score = round(300 + 8.5*8.2) = round(369.7) = 370.
        let profile = MemberProfile::new(MemberId::new("m-1"), ts(2024, 5, 15), dec!(20_000));
        let history =
            MemberHistory::new(profile, vec![], vec![]).with_as_of(ts(2025, 3, 15));
        let result = CreditScoringEngine::score(&history);

        assert_eq!(result.credit_score(), 370);
        assert_eq!(result.credit_grade(), CreditGrade::F);
        assert_eq!(result.risk_tier(), RiskTier::HighRisk);
        assert_eq!(result.factors().payment_history, 0);
        assert_eq!(result.factors().loan_experience, 0);
        assert_eq!(result.factors().platform_tenure, 28);
        assert_eq!(result.factors().financial_stability, 40);
        assert_eq!(result.max_borrowing_amount(), dec!(50_000));
    }

    #[test]
    fn test_single_imperfect_loan_mid_grade() {
        // One 2-month loan of 50k: first payment 2 days late (on time),
        // second 3 days late. Performance = 50 - 6 = 44.
        // PH = 44, LE = 4 + 5 + 15 = 24, PT = 67.2 (24 months),
        // FS = 60 (30k savings, no debt).
        // composite = 22 + 6 + 10.08 + 6 = 44.08 → round(674.68) = 675 → B.
        let profile = MemberProfile::new(MemberId::new("m-1"), ts(2023, 3, 18), dec!(30_000));
        let loan = LoanRecord::new(
            LoanId::new("l-1"),
            MemberId::new("m-1"),
            ts(2024, 1, 15),
            LoanStatus::Completed,
            dec!(50_000),
            2,
        );
        let repayments = vec![
            RepaymentRecord::new(
                "r-1",
                LoanId::new("l-1"),
                dec!(26_000),
                ts(2024, 2, 17),
                RepaymentStatus::Approved,
            ),
            RepaymentRecord::new(
                "r-2",
                LoanId::new("l-1"),
                dec!(26_000),
                ts(2024, 3, 18),
                RepaymentStatus::Approved,
            ),
        ];
        let history = MemberHistory::new(profile, vec![loan], repayments)
            .with_as_of(ts(2025, 3, 18));
        let result = CreditScoringEngine::score(&history);

        assert_eq!(result.credit_score(), 675);
        assert_eq!(result.credit_grade(), CreditGrade::B);
        assert_eq!(result.risk_tier(), RiskTier::Good);
        assert_eq!(result.factors().payment_history, 44);
        assert_eq!(result.factors().loan_experience, 24);
        assert_eq!(result.factors().platform_tenure, 67);
        assert_eq!(result.factors().financial_stability, 60);
        // Band 670-739 → 1.5 × 50,000 = 75,000; cap 90,000 holds off.
        assert_eq!(result.max_borrowing_amount(), dec!(75_000));
        // Consistency (avg 44 < 70) then savings (30k < 50k).
        assert_eq!(result.recommendations().len(), 2);
    }

    #[test]
    fn test_orphan_and_unapproved_records_excluded() {
        let profile = MemberProfile::new(MemberId::new("m-1"), ts(2023, 1, 1), dec!(50_000));
        let loan = LoanRecord::new(
            LoanId::new("l-1"),
            MemberId::new("m-1"),
            ts(2024, 1, 15),
            LoanStatus::Completed,
            dec!(50_000),
            1,
        );
        let repayments = vec![
            RepaymentRecord::new(
                "r-1",
                LoanId::new("l-1"),
                dec!(52_000),
                ts(2024, 2, 15),
                RepaymentStatus::Approved,
            ),
            // Orphan: contributes nothing.
            RepaymentRecord::new(
                "r-2",
                LoanId::new("no-such-loan"),
                dec!(1_000),
                ts(2024, 2, 20),
                RepaymentStatus::Approved,
            ),
            // Rejected: contributes nothing.
            RepaymentRecord::new(
                "r-3",
                LoanId::new("l-1"),
                dec!(1_000),
                ts(2024, 2, 20),
                RepaymentStatus::Rejected,
            ),
        ];
        let with_noise = MemberHistory::new(profile.clone(), vec![loan.clone()], repayments)
            .with_as_of(ts(2025, 1, 1));
        let clean = MemberHistory::new(
            profile,
            vec![loan],
            vec![RepaymentRecord::new(
                "r-1",
                LoanId::new("l-1"),
                dec!(52_000),
                ts(2024, 2, 15),
                RepaymentStatus::Approved,
            )],
        )
        .with_as_of(ts(2025, 1, 1));

        let a = CreditScoringEngine::score(&with_noise);
        let b = CreditScoringEngine::score(&clean);
        assert_eq!(a.credit_score(), b.credit_score());
        assert_eq!(a.max_borrowing_amount(), b.max_borrowing_amount());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let profile = MemberProfile::new(MemberId::new("m-1"), ts(2023, 1, 1), dec!(40_000));
        let history =
            MemberHistory::new(profile, vec![], vec![]).with_as_of(ts(2025, 1, 1));
        let a = CreditScoringEngine::score(&history);
        let b = CreditScoringEngine::score(&history);
        assert_eq!(a.credit_score(), b.credit_score());
        assert_eq!(a.recommendations(), b.recommendations());
    }
}
