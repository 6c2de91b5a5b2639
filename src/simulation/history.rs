//! Random member-history generation.
//!
//! Produces plausible loan books with configurable repayment discipline,
//! used by the CLI `generate` command, stress tests, and benchmarks.

use crate::core::history::MemberHistory;
use crate::core::loan::{LoanId, LoanRecord, LoanStatus};
use crate::core::member::{MemberId, MemberProfile};
use crate::core::repayment::{RepaymentRecord, RepaymentStatus};
use crate::schedule::calendar::generate_due_dates;
use chrono::{Days, Months, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Configuration for generating a random member history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Number of completed loans in the book.
    pub completed_loans: usize,
    /// Number of currently active loans.
    pub active_loans: usize,
    /// Maximum repayment duration per loan, in months.
    pub max_duration_months: u32,
    /// Minimum loan principal.
    pub min_amount: Decimal,
    /// Maximum loan principal.
    pub max_amount: Decimal,
    /// Maximum lateness per repayment, in days (0 = always on time).
    pub max_days_late: u32,
    /// Maximum extensions per loan.
    pub max_extensions: u32,
    /// Member tenure in months.
    pub tenure_months: u32,
    /// Maximum savings balance.
    pub max_savings: Decimal,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            completed_loans: 3,
            active_loans: 1,
            max_duration_months: 12,
            min_amount: Decimal::from(10_000),
            max_amount: Decimal::from(500_000),
            max_days_late: 10,
            max_extensions: 2,
            tenure_months: 36,
            max_savings: Decimal::from(200_000),
        }
    }
}

fn random_amount(rng: &mut impl Rng, min: Decimal, max: Decimal) -> Decimal {
    let min_f64: f64 = min.to_string().parse().unwrap_or(10_000.0);
    let max_f64: f64 = max.to_string().parse().unwrap_or(500_000.0);
    let amount = rng.gen_range(min_f64..max_f64);
    Decimal::from_f64_retain(amount)
        .unwrap_or(Decimal::from(10_000))
        .round_dp(2)
}

/// Generate a random member history for testing.
///
/// Completed loans get a full repayment schedule with per-payment lateness
/// drawn from `0..=max_days_late`; active loans carry a random outstanding
/// balance. The history is evaluated as of the wall clock.
pub fn generate_random_history(config: &HistoryConfig) -> MemberHistory {
    let mut rng = rand::thread_rng();
    let as_of = Utc::now();
    let member_id = MemberId::new(format!("member-{}", Uuid::new_v4()));

    let created_at = as_of
        .checked_sub_months(Months::new(config.tenure_months))
        .unwrap_or(as_of);
    let savings = random_amount(&mut rng, Decimal::ZERO, config.max_savings.max(Decimal::ONE));
    let profile = MemberProfile::new(member_id.clone(), created_at, savings);

    let mut loans = Vec::new();
    let mut repayments = Vec::new();

    for _ in 0..config.completed_loans {
        let duration = rng.gen_range(1..=config.max_duration_months.max(1));
        // Disburse far enough back that the whole schedule is in the past.
        let offset = duration + rng.gen_range(1..=12);
        let disbursed = as_of
            .checked_sub_months(Months::new(offset))
            .unwrap_or(created_at);
        let amount = random_amount(&mut rng, config.min_amount, config.max_amount);

        let loan = LoanRecord::new(
            LoanId::new(Uuid::new_v4().to_string()),
            member_id.clone(),
            disbursed,
            LoanStatus::Completed,
            amount,
            duration,
        )
        .with_extensions(rng.gen_range(0..=config.max_extensions));

        let installment = (amount / Decimal::from(duration)).round_dp(2);
        for due in generate_due_dates(disbursed, duration) {
            let late_by = rng.gen_range(0..=config.max_days_late as u64);
            let paid = due
                .checked_add_days(Days::new(late_by))
                .unwrap_or(due);
            repayments.push(RepaymentRecord::new(
                Uuid::new_v4().to_string(),
                loan.loan_id().clone(),
                installment.max(Decimal::ONE),
                paid,
                RepaymentStatus::Approved,
            ));
        }
        loans.push(loan);
    }

    for _ in 0..config.active_loans {
        let duration = rng.gen_range(1..=config.max_duration_months.max(1));
        let disbursed = as_of
            .checked_sub_months(Months::new(rng.gen_range(0..=duration)))
            .unwrap_or(created_at);
        let amount = random_amount(&mut rng, config.min_amount, config.max_amount);
        let balance = random_amount(&mut rng, Decimal::ONE, amount);

        loans.push(
            LoanRecord::new(
                LoanId::new(Uuid::new_v4().to_string()),
                member_id.clone(),
                disbursed,
                LoanStatus::Approved,
                amount,
                duration,
            )
            .with_balance(balance),
        );
    }

    MemberHistory::new(profile, loans, repayments)
}
