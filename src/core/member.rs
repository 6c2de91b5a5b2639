use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a member of the lending platform.
///
/// Identifiers are opaque strings supplied by the hosting application
/// (typically a database primary key or UUID).
///
/// # Examples
///
/// ```
/// use credit_engine::core::member::MemberId;
///
/// let a = MemberId::new("member-0042");
/// let b = MemberId::new("member-0043");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Create a new member identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this member ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A member's savings profile at the moment of evaluation.
///
/// This is a read-only snapshot owned by the caller. The engine never
/// mutates it and keeps no copy across invocations.
///
/// # Examples
///
/// ```
/// use credit_engine::core::member::{MemberId, MemberProfile};
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let profile = MemberProfile::new(
///     MemberId::new("member-0042"),
///     Utc::now(),
///     dec!(150_000),
/// );
/// assert_eq!(profile.savings_balance(), dec!(150_000));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    /// The member this profile belongs to.
    member_id: MemberId,
    /// When the member's account was created.
    created_at: DateTime<Utc>,
    /// Current savings balance. Must be non-negative.
    savings_balance: Decimal,
}

impl MemberProfile {
    /// Create a new member profile snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `savings_balance` is negative.
    pub fn new(member_id: MemberId, created_at: DateTime<Utc>, savings_balance: Decimal) -> Self {
        assert!(
            savings_balance >= Decimal::ZERO,
            "Savings balance must be non-negative, got {}",
            savings_balance
        );
        Self {
            member_id,
            created_at,
            savings_balance,
        }
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn savings_balance(&self) -> Decimal {
        self.savings_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_member_id_equality() {
        let a = MemberId::new("member-1");
        let b = MemberId::new("member-1");
        let c = MemberId::new("member-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_member_id_display() {
        let id = MemberId::new("member-0042");
        assert_eq!(format!("{}", id), "member-0042");
    }

    #[test]
    fn test_profile_creation() {
        let profile = MemberProfile::new(MemberId::new("m"), Utc::now(), dec!(1000));
        assert_eq!(profile.member_id().as_str(), "m");
        assert_eq!(profile.savings_balance(), dec!(1000));
    }

    #[test]
    fn test_zero_savings_allowed() {
        let profile = MemberProfile::new(MemberId::new("m"), Utc::now(), Decimal::ZERO);
        assert_eq!(profile.savings_balance(), Decimal::ZERO);
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn test_negative_savings_rejected() {
        MemberProfile::new(MemberId::new("m"), Utc::now(), dec!(-1));
    }
}
