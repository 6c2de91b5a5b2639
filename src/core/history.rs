use crate::core::loan::{LoanId, LoanRecord, LoanStatus};
use crate::core::member::{MemberId, MemberProfile};
use crate::core::repayment::RepaymentRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors reported by strict input validation.
///
/// The engine itself never raises these: malformed records are silently
/// excluded from the relevant aggregates per the scoring contract. Callers
/// wanting stricter guarantees run [`MemberHistory::validate`] before scoring.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("loan {loan_id} belongs to member {owner}, not {member}")]
    ForeignLoan {
        loan_id: LoanId,
        owner: MemberId,
        member: MemberId,
    },
    #[error("loan {loan_id} has a negative outstanding balance of {balance}")]
    NegativeBalance { loan_id: LoanId, balance: Decimal },
    #[error("repayment {repayment_id} references unknown loan {loan_id}")]
    OrphanRepayment {
        repayment_id: String,
        loan_id: LoanId,
    },
    #[error("repayment {repayment_id} was made before loan {loan_id} was disbursed")]
    PaymentBeforeDisbursement {
        repayment_id: String,
        loan_id: LoanId,
    },
}

/// The complete input bundle for one scoring call: a member's savings
/// profile, their loans, and all repayments made against those loans.
///
/// Collections carry no ordering constraints; the engine sorts internally
/// where needed. The bundle also fixes the evaluation clock: `as_of` is the
/// instant tenure is measured against, so the same history scored with the
/// same `as_of` always produces the same result.
///
/// # Examples
///
/// ```
/// use credit_engine::core::history::MemberHistory;
/// use credit_engine::core::member::{MemberId, MemberProfile};
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let profile = MemberProfile::new(MemberId::new("m"), Utc::now(), dec!(50_000));
/// let history = MemberHistory::new(profile, vec![], vec![]);
/// assert!(history.completed_loans().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberHistory {
    profile: MemberProfile,
    loans: Vec<LoanRecord>,
    repayments: Vec<RepaymentRecord>,
    /// Evaluation instant for tenure. Defaults to the wall clock.
    #[serde(default = "Utc::now")]
    as_of: DateTime<Utc>,
}

impl MemberHistory {
    /// Create a new history bundle evaluated as of now.
    pub fn new(
        profile: MemberProfile,
        loans: Vec<LoanRecord>,
        repayments: Vec<RepaymentRecord>,
    ) -> Self {
        Self {
            profile,
            loans,
            repayments,
            as_of: Utc::now(),
        }
    }

    /// Pin the evaluation instant (for tests, replays, and backdated scoring).
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn loans(&self) -> &[LoanRecord] {
        &self.loans
    }

    pub fn repayments(&self) -> &[RepaymentRecord] {
        &self.repayments
    }

    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Loans that were fully repaid and closed.
    pub fn completed_loans(&self) -> Vec<&LoanRecord> {
        self.loans
            .iter()
            .filter(|l| l.status() == LoanStatus::Completed)
            .collect()
    }

    /// Loans currently outstanding.
    pub fn active_loans(&self) -> Vec<&LoanRecord> {
        self.loans
            .iter()
            .filter(|l| l.status() == LoanStatus::Approved)
            .collect()
    }

    /// Total outstanding balance across active loans.
    pub fn outstanding_debt(&self) -> Decimal {
        self.active_loans().iter().map(|l| l.loan_balance()).sum()
    }

    /// Strict validation for callers that refuse malformed data.
    ///
    /// Checks that every loan belongs to the profiled member, balances are
    /// non-negative, every repayment references a known loan, and no payment
    /// predates its loan's disbursement. Returns the first violation found.
    pub fn validate(&self) -> Result<(), HistoryError> {
        for loan in &self.loans {
            if loan.member_id() != self.profile.member_id() {
                return Err(HistoryError::ForeignLoan {
                    loan_id: loan.loan_id().clone(),
                    owner: loan.member_id().clone(),
                    member: self.profile.member_id().clone(),
                });
            }
            if loan.loan_balance() < Decimal::ZERO {
                return Err(HistoryError::NegativeBalance {
                    loan_id: loan.loan_id().clone(),
                    balance: loan.loan_balance(),
                });
            }
        }

        let known: HashSet<&LoanId> = self.loans.iter().map(|l| l.loan_id()).collect();
        for rep in &self.repayments {
            if !known.contains(rep.loan_id()) {
                return Err(HistoryError::OrphanRepayment {
                    repayment_id: rep.repayment_id().to_string(),
                    loan_id: rep.loan_id().clone(),
                });
            }
            let disbursed = self
                .loans
                .iter()
                .find(|l| l.loan_id() == rep.loan_id())
                .map(|l| l.created_at());
            if let Some(disbursed) = disbursed {
                if rep.date_paid() < disbursed {
                    return Err(HistoryError::PaymentBeforeDisbursement {
                        repayment_id: rep.repayment_id().to_string(),
                        loan_id: rep.loan_id().clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
