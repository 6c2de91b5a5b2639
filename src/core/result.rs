use crate::core::member::MemberId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from the numeric credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl fmt::Display for CreditGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CreditGrade::APlus => "A+",
            CreditGrade::A => "A",
            CreditGrade::BPlus => "B+",
            CreditGrade::B => "B",
            CreditGrade::CPlus => "C+",
            CreditGrade::C => "C",
            CreditGrade::D => "D",
            CreditGrade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// Human-facing risk tier derived from the numeric credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTier::Excellent => "Excellent",
            RiskTier::VeryGood => "Very Good",
            RiskTier::Good => "Good",
            RiskTier::Fair => "Fair",
            RiskTier::Poor => "Poor",
            RiskTier::HighRisk => "High Risk",
        };
        write!(f, "{}", s)
    }
}

/// Ordered grade/risk threshold table, evaluated top-down, first match wins.
const GRADE_THRESHOLDS: [(u32, CreditGrade, RiskTier); 7] = [
    (800, CreditGrade::APlus, RiskTier::Excellent),
    (780, CreditGrade::A, RiskTier::Excellent),
    (740, CreditGrade::BPlus, RiskTier::VeryGood),
    (670, CreditGrade::B, RiskTier::Good),
    (620, CreditGrade::CPlus, RiskTier::Fair),
    (580, CreditGrade::C, RiskTier::Fair),
    (500, CreditGrade::D, RiskTier::Poor),
];

/// Map a final credit score onto its letter grade and risk tier.
///
/// Scores below every threshold fall through to `F` / `High Risk`.
///
/// # Examples
///
/// ```
/// use credit_engine::core::result::{grade_and_risk, CreditGrade, RiskTier};
///
/// assert_eq!(grade_and_risk(800), (CreditGrade::APlus, RiskTier::Excellent));
/// assert_eq!(grade_and_risk(799), (CreditGrade::A, RiskTier::Excellent));
/// ```
pub fn grade_and_risk(score: u32) -> (CreditGrade, RiskTier) {
    for (min, grade, risk) in GRADE_THRESHOLDS {
        if score >= min {
            return (grade, risk);
        }
    }
    (CreditGrade::F, RiskTier::HighRisk)
}

/// The four rounded factor sub-scores behind a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub payment_history: u32,
    pub loan_experience: u32,
    pub platform_tenure: u32,
    pub financial_stability: u32,
}

/// The complete output of one scoring call.
///
/// Produced fresh on every invocation; the engine retains nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoreResult {
    member_id: MemberId,
    /// Final score, clamped to [300, 850].
    credit_score: u32,
    credit_grade: CreditGrade,
    risk_tier: RiskTier,
    /// Maximum recommended new loan amount, rounded to whole units.
    max_borrowing_amount: Decimal,
    factors: FactorScores,
    /// Advisory messages in generation order. May be empty.
    recommendations: Vec<String>,
}

impl CreditScoreResult {
    pub(crate) fn new(
        member_id: MemberId,
        credit_score: u32,
        max_borrowing_amount: Decimal,
        factors: FactorScores,
        recommendations: Vec<String>,
    ) -> Self {
        let (credit_grade, risk_tier) = grade_and_risk(credit_score);
        Self {
            member_id,
            credit_score,
            credit_grade,
            risk_tier,
            max_borrowing_amount,
            factors,
            recommendations,
        }
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn credit_score(&self) -> u32 {
        self.credit_score
    }

    pub fn credit_grade(&self) -> CreditGrade {
        self.credit_grade
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    pub fn max_borrowing_amount(&self) -> Decimal {
        self.max_borrowing_amount
    }

    pub fn factors(&self) -> &FactorScores {
        &self.factors
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

impl fmt::Display for CreditScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Credit Score Report ===")?;
        writeln!(f, "Member:          {}", self.member_id)?;
        writeln!(f, "Score:           {}", self.credit_score)?;
        writeln!(f, "Grade:           {}", self.credit_grade)?;
        writeln!(f, "Risk Tier:       {}", self.risk_tier)?;
        writeln!(f, "Max Borrowing:   {}", self.max_borrowing_amount)?;
        writeln!(f, "\n--- Factors ---")?;
        writeln!(f, "  Payment History:     {}", self.factors.payment_history)?;
        writeln!(f, "  Loan Experience:     {}", self.factors.loan_experience)?;
        writeln!(f, "  Platform Tenure:     {}", self.factors.platform_tenure)?;
        writeln!(
            f,
            "  Financial Stability: {}",
            self.factors.financial_stability
        )?;
        if !self.recommendations.is_empty() {
            writeln!(f, "\n--- Recommendations ---")?;
            for rec in &self.recommendations {
                writeln!(f, "  - {}", rec)?;
            }
        }
        Ok(())
    }
}
