//! Score a member with no loan history: the starter limit applies and
//! the recommendations explain how to build a profile.
//!
//! Run with: `cargo run --example thin_file`

use chrono::{TimeZone, Utc};
use credit_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let profile = MemberProfile::new(
        MemberId::new("member-new"),
        Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
        dec!(35_000),
    );

    let history = MemberHistory::new(profile, vec![], vec![]);
    let result = CreditScoringEngine::score(&history);

    println!("{}", result);
    println!(
        "A thin file still qualifies for a starter limit of {}.",
        result.max_borrowing_amount()
    );
}
