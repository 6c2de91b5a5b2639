//! # credit-engine
//!
//! Deterministic credit scoring and borrowing limit engine for
//! savings-backed lending.
//!
//! Given a member's savings profile plus their historical loans and
//! repayments, the engine computes a credit score in [300, 850], a letter
//! grade, a risk tier, a maximum borrowing amount, and advisory
//! recommendations. It is a pure computation over in-memory records: no
//! I/O, no persistence, no shared state between calls.
//!
//! ## Architecture
//!
//! - **core** — Foundational records: members, loans, repayments, the
//!   scoring input bundle, and the result record
//! - **schedule** — Pure date arithmetic and due-date schedule generation
//! - **scoring** — Per-loan performance evaluation, factor scorers,
//!   aggregation, borrowing limits, recommendations
//! - **simulation** — Random history generation for tests and benchmarks

pub mod core;
pub mod schedule;
pub mod scoring;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::history::MemberHistory;
    pub use crate::core::loan::{LoanId, LoanRecord, LoanStatus};
    pub use crate::core::member::{MemberId, MemberProfile};
    pub use crate::core::repayment::{RepaymentRecord, RepaymentStatus};
    pub use crate::core::result::{CreditGrade, CreditScoreResult, FactorScores, RiskTier};
    pub use crate::scoring::engine::CreditScoringEngine;
}
