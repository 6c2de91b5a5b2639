//! Foundational value records: members, loans, repayments, the scoring
//! input bundle, and the result record.

pub mod history;
pub mod loan;
pub mod member;
pub mod repayment;
pub mod result;
