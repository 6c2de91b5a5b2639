//! Random member-history generation for stress testing and benchmarks.

pub mod history;
