use crate::core::loan::LoanId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval status of a repayment.
///
/// Only `Approved` repayments count toward loan performance. Pending and
/// rejected repayments are carried through from the hosting application
/// but contribute nothing to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for RepaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepaymentStatus::Pending => write!(f, "pending"),
            RepaymentStatus::Approved => write!(f, "approved"),
            RepaymentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// One repayment made against a loan.
///
/// Repayments reference their loan by id and are otherwise independent
/// records (many-to-one toward [`LoanRecord`](crate::core::loan::LoanRecord)).
/// A repayment referencing an unknown loan is simply ignored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentRecord {
    /// Unique identifier for this repayment.
    repayment_id: String,
    /// The loan this repayment was made against.
    loan_id: LoanId,
    /// Amount paid. Must be positive.
    amount: Decimal,
    /// When the payment was made.
    date_paid: DateTime<Utc>,
    /// Approval status.
    status: RepaymentStatus,
}

impl RepaymentRecord {
    /// Create a new repayment record.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive.
    pub fn new(
        repayment_id: impl Into<String>,
        loan_id: LoanId,
        amount: Decimal,
        date_paid: DateTime<Utc>,
        status: RepaymentStatus,
    ) -> Self {
        assert!(
            amount > Decimal::ZERO,
            "Repayment amount must be positive, got {}",
            amount
        );
        Self {
            repayment_id: repayment_id.into(),
            loan_id,
            amount,
            date_paid,
            status,
        }
    }

    pub fn repayment_id(&self) -> &str {
        &self.repayment_id
    }

    pub fn loan_id(&self) -> &LoanId {
        &self.loan_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date_paid(&self) -> DateTime<Utc> {
        self.date_paid
    }

    pub fn status(&self) -> RepaymentStatus {
        self.status
    }
}
