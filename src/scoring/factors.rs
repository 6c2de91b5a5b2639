use crate::core::member::MemberProfile;
use crate::schedule::calendar::months_between;
use crate::scoring::performance::LoanPerformanceMetrics;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Recency weights for payment history: most recent loan first, then a
/// residual split evenly among anything older than the third loan.
const WEIGHT_MOST_RECENT: Decimal = dec!(0.5);
const WEIGHT_SECOND_RECENT: Decimal = dec!(0.3);
const WEIGHT_THIRD_RECENT: Decimal = dec!(0.2);
const WEIGHT_OLDER_POOL: Decimal = dec!(0.1);

/// Weighted payment-history score across all completed loans, in [0, 100].
///
/// The most recent loan carries weight 0.5, the second 0.3, the third 0.2,
/// and all older loans split a residual 0.1 evenly. The result normalizes
/// by the sum of applied weights, so the formula is stable with fewer than
/// three loans. Returns 0 with no completed loans.
pub fn payment_history_score(performances: &[LoanPerformanceMetrics]) -> Decimal {
    if performances.is_empty() {
        return Decimal::ZERO;
    }

    let mut sorted: Vec<&LoanPerformanceMetrics> = performances.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.completed_at));

    let older_count = sorted.len().saturating_sub(3);
    let mut weighted_score = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;

    for (index, performance) in sorted.iter().enumerate() {
        let weight = match index {
            0 => WEIGHT_MOST_RECENT,
            1 => WEIGHT_SECOND_RECENT,
            2 => WEIGHT_THIRD_RECENT,
            _ => WEIGHT_OLDER_POOL / Decimal::from(older_count as u64),
        };
        weighted_score += performance.performance_score * weight;
        total_weight += weight;
    }

    if total_weight > Decimal::ZERO {
        weighted_score / total_weight
    } else {
        Decimal::ZERO
    }
}

/// Loan experience score in [0, 100]: three capped sub-terms.
///
/// Duration (2 points per borrowed month, max 60), diversity (5 points per
/// completed loan, max 25), and scale (largest principal relative to a
/// 50,000 reference, max 15). Returns 0 with no completed loans.
pub fn loan_experience_score(performances: &[LoanPerformanceMetrics]) -> Decimal {
    if performances.is_empty() {
        return Decimal::ZERO;
    }

    let total_months: u32 = performances.iter().map(|p| p.duration_months).sum();
    let largest_amount = performances
        .iter()
        .map(|p| p.loan_amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    let loan_count = performances.len() as u64;

    let duration_score = (Decimal::from(total_months) * dec!(2)).min(dec!(60));
    let diversity_score = (Decimal::from(loan_count) * dec!(5)).min(dec!(25));
    let scale_score = (largest_amount / dec!(50_000) * dec!(15)).min(dec!(15));

    duration_score + diversity_score + scale_score
}

/// Platform tenure score in [0, 100]: 2.8 points per month since account
/// creation, measured against the evaluation instant.
pub fn platform_tenure_score(profile: &MemberProfile, as_of: DateTime<Utc>) -> Decimal {
    let tenure_months = months_between(profile.created_at(), as_of);
    (Decimal::from(tenure_months) * dec!(2.8)).min(dec!(100))
}

/// Financial stability score in [0, 60]: a savings-size reward capped at 60
/// minus a debt-to-savings penalty capped at 40, floored at zero.
///
/// A zero savings balance scores zero outright; the debt ratio is only
/// computed against a positive balance.
pub fn financial_stability_score(profile: &MemberProfile, outstanding_debt: Decimal) -> Decimal {
    let savings = profile.savings_balance();
    if savings == Decimal::ZERO {
        return Decimal::ZERO;
    }

    let debt_to_savings = outstanding_debt / savings;
    let savings_score = (savings / dec!(10_000) * dec!(20)).min(dec!(60));
    let debt_penalty = (debt_to_savings * dec!(30)).min(dec!(40));

    (savings_score - debt_penalty).max(Decimal::ZERO)
}
