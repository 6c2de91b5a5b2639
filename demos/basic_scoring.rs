//! Score a small hand-built member history and print the report.
//!
//! Run with: `cargo run --example basic_scoring`

use chrono::{TimeZone, Utc};
use credit_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let member = MemberId::new("member-0042");
    let profile = MemberProfile::new(
        member.clone(),
        Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap(),
        dec!(150_000),
    );

    // One completed 6-month loan, repaid on schedule every month.
    let loan = LoanRecord::new(
        LoanId::new("loan-1"),
        member,
        Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
        LoanStatus::Completed,
        dec!(100_000),
        6,
    )
    .with_interest_rate(dec!(0.05));

    let repayments: Vec<RepaymentRecord> = (1..=6u32)
        .map(|i| {
            RepaymentRecord::new(
                format!("rep-{}", i),
                LoanId::new("loan-1"),
                dec!(17_500),
                Utc.with_ymd_and_hms(2023, 2 + i, 1, 0, 0, 0).unwrap(),
                RepaymentStatus::Approved,
            )
        })
        .collect();

    let history = MemberHistory::new(profile, vec![loan], repayments);
    let result = CreditScoringEngine::score(&history);

    println!("{}", result);
}
