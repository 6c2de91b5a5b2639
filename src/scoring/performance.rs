use crate::core::loan::{LoanId, LoanRecord};
use crate::core::repayment::{RepaymentRecord, RepaymentStatus};
use crate::schedule::calendar::{days_late, generate_due_dates};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Days after a due date before a payment is classified late.
pub const GRACE_PERIOD_DAYS: u32 = 2;

/// Penalty ceiling applied for average lateness.
const MAX_LATENESS_PENALTY: Decimal = dec!(40);

/// Penalty per extension granted on the loan.
const EXTENSION_PENALTY: Decimal = dec!(10);

/// How reliably one closed loan was repaid on schedule.
///
/// Derived fresh on every scoring call and never persisted. The
/// `performance_score` is bounded to [0, 100] by construction: the on-time
/// rate contributes at most 100, penalties only subtract, and the result
/// floors at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPerformanceMetrics {
    pub loan_id: LoanId,
    /// Repayments matched against the due-date schedule.
    pub total_payments: u32,
    pub on_time_payments: u32,
    pub late_payments: u32,
    /// Mean lateness in days across late payments only.
    pub average_days_late: Decimal,
    pub duration_months: u32,
    pub loan_amount: Decimal,
    pub extensions_used: u32,
    /// Bounded [0, 100] repayment reliability score.
    pub performance_score: Decimal,
    /// Recency anchor for payment-history weighting. Loan records carry no
    /// close date, so the disbursement date stands in.
    pub completed_at: DateTime<Utc>,
}

impl LoanPerformanceMetrics {
    /// Evaluate one completed loan against the full repayment set.
    ///
    /// # Algorithm
    ///
    /// 1. Select approved repayments of this loan, sorted by date paid.
    /// 2. Generate the monthly due-date schedule for the original duration.
    /// 3. Pair the i-th repayment with the i-th due date; repayments beyond
    ///    the schedule are ignored.
    /// 4. A payment within the 2-day grace window is on time; otherwise it
    ///    is late and its lateness feeds the running total.
    /// 5. Score = `max(0, on_time_rate * 100 - min(avg_late * 2, 40)
    ///    - extensions * 10)`.
    pub fn evaluate(loan: &LoanRecord, repayments: &[RepaymentRecord]) -> Self {
        let mut loan_repayments: Vec<&RepaymentRecord> = repayments
            .iter()
            .filter(|r| r.loan_id() == loan.loan_id() && r.status() == RepaymentStatus::Approved)
            .collect();
        loan_repayments.sort_by_key(|r| r.date_paid());

        let due_dates = generate_due_dates(loan.created_at(), loan.original_repayment_duration());

        let mut on_time_payments = 0u32;
        let mut late_payments = 0u32;
        let mut total_days_late = 0u32;

        for (payment, due) in loan_repayments.iter().zip(due_dates.iter()) {
            let late_by = days_late(*due, payment.date_paid());
            if late_by <= GRACE_PERIOD_DAYS {
                on_time_payments += 1;
            } else {
                late_payments += 1;
                total_days_late += late_by;
            }
        }

        let total_payments = on_time_payments + late_payments;
        let average_days_late = if late_payments > 0 {
            Decimal::from(total_days_late) / Decimal::from(late_payments)
        } else {
            Decimal::ZERO
        };

        let on_time_rate = if total_payments > 0 {
            Decimal::from(on_time_payments) / Decimal::from(total_payments)
        } else {
            Decimal::ZERO
        };
        let lateness_penalty = (average_days_late * dec!(2)).min(MAX_LATENESS_PENALTY);
        let extension_penalty = Decimal::from(loan.extended_by()) * EXTENSION_PENALTY;
        let performance_score =
            (on_time_rate * dec!(100) - lateness_penalty - extension_penalty).max(Decimal::ZERO);

        Self {
            loan_id: loan.loan_id().clone(),
            total_payments,
            on_time_payments,
            late_payments,
            average_days_late,
            duration_months: loan.original_repayment_duration(),
            loan_amount: loan.loan_amount(),
            extensions_used: loan.extended_by(),
            performance_score,
            completed_at: loan.created_at(),
        }
    }
}
