use crate::core::member::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(String);

impl LoanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LoanId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Lifecycle status of a loan.
///
/// Only `Completed` loans feed performance analysis; only `Approved`
/// (currently outstanding) loans feed debt calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Currently active with an outstanding balance.
    Approved,
    /// Fully repaid and closed.
    Completed,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::Approved => write!(f, "approved"),
            LoanStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One loan issued to a member.
///
/// Loans are immutable snapshots for the duration of a scoring call.
/// The disbursement date (`created_at`) anchors the expected repayment
/// schedule: one due date per month, on the same day of month.
///
/// # Examples
///
/// ```
/// use credit_engine::core::loan::{LoanId, LoanRecord, LoanStatus};
/// use credit_engine::core::member::MemberId;
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let loan = LoanRecord::new(
///     LoanId::new("loan-1"),
///     MemberId::new("member-0042"),
///     Utc::now(),
///     LoanStatus::Completed,
///     dec!(100_000),
///     6,
/// );
/// assert_eq!(loan.original_repayment_duration(), 6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Unique identifier for this loan.
    loan_id: LoanId,
    /// The borrowing member.
    member_id: MemberId,
    /// Disbursement timestamp. Due dates are generated from this anchor.
    created_at: DateTime<Utc>,
    /// Lifecycle status.
    status: LoanStatus,
    /// Annual interest rate as a fraction (e.g. 0.05 for 5%).
    interest_rate: Decimal,
    /// Outstanding balance. Zero for completed loans.
    loan_balance: Decimal,
    /// Originally agreed repayment duration in months. Must be >= 1.
    original_repayment_duration: u32,
    /// Number of extensions granted on top of the original duration.
    extended_by: u32,
    /// Original principal amount.
    loan_amount: Decimal,
}

impl LoanRecord {
    /// Create a new loan record.
    ///
    /// Interest rate and outstanding balance default to zero; use the
    /// `with_` builders to set them.
    ///
    /// # Panics
    ///
    /// Panics if `loan_amount` is not positive or `duration_months` is zero.
    pub fn new(
        loan_id: LoanId,
        member_id: MemberId,
        created_at: DateTime<Utc>,
        status: LoanStatus,
        loan_amount: Decimal,
        duration_months: u32,
    ) -> Self {
        assert!(
            loan_amount > Decimal::ZERO,
            "Loan amount must be positive, got {}",
            loan_amount
        );
        assert!(
            duration_months >= 1,
            "Repayment duration must be at least one month"
        );
        Self {
            loan_id,
            member_id,
            created_at,
            status,
            interest_rate: Decimal::ZERO,
            loan_balance: Decimal::ZERO,
            original_repayment_duration: duration_months,
            extended_by: 0,
            loan_amount,
        }
    }

    /// Set the annual interest rate.
    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    /// Set the outstanding balance.
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.loan_balance = balance;
        self
    }

    /// Set the number of extensions granted.
    pub fn with_extensions(mut self, extensions: u32) -> Self {
        self.extended_by = extensions;
        self
    }

    // --- Accessors ---

    pub fn loan_id(&self) -> &LoanId {
        &self.loan_id
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> LoanStatus {
        self.status
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn loan_balance(&self) -> Decimal {
        self.loan_balance
    }

    pub fn original_repayment_duration(&self) -> u32 {
        self.original_repayment_duration
    }

    pub fn extended_by(&self) -> u32 {
        self.extended_by
    }

    pub fn loan_amount(&self) -> Decimal {
        self.loan_amount
    }
}
