use crate::core::member::MemberProfile;
use crate::scoring::performance::LoanPerformanceMetrics;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MSG_PAY_ON_TIME: &str =
    "Focus on making all future payments on time to improve credit score";
const MSG_SMALLER_LOANS: &str = "Consider smaller loan amounts to build payment history";
const MSG_CONSISTENCY: &str = "Improve payment consistency to unlock higher borrowing limits";
const MSG_GROW_SAVINGS: &str = "Increase savings balance to improve borrowing capacity";
const MSG_PREMIUM: &str = "Excellent credit profile - eligible for premium loan products";

/// Advisory messages derived from the credit profile.
///
/// Conditions are evaluated independently in a fixed order, each appending
/// zero or more messages; none are mutually exclusive, so two calls with
/// identical input always produce the same ordered list.
pub fn recommendations(
    credit_score: u32,
    performances: &[LoanPerformanceMetrics],
    profile: &MemberProfile,
) -> Vec<String> {
    let mut messages = Vec::new();

    if credit_score < 600 {
        messages.push(MSG_PAY_ON_TIME.to_string());
        messages.push(MSG_SMALLER_LOANS.to_string());
    }

    if !performances.is_empty() {
        let total: Decimal = performances.iter().map(|p| p.performance_score).sum();
        let average = total / Decimal::from(performances.len() as u64);
        if average < dec!(70) {
            messages.push(MSG_CONSISTENCY.to_string());
        }
    }

    if profile.savings_balance() < dec!(50_000) {
        messages.push(MSG_GROW_SAVINGS.to_string());
    }

    if credit_score >= 750 {
        messages.push(MSG_PREMIUM.to_string());
    }

    messages
}
