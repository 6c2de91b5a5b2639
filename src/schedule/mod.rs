//! Pure date arithmetic: day and month deltas plus due-date schedule
//! generation. No dependencies on the rest of the engine.

pub mod calendar;
