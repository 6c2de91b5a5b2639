//! The scoring pipeline: per-loan performance evaluation, the four factor
//! scorers, score aggregation, borrowing limits, and recommendations.

pub mod engine;
pub mod factors;
pub mod limit;
pub mod performance;
pub mod recommend;
