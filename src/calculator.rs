use serde::{Deserialize, Serialize};

/// One loan as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub monthly_payment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub current_payment: f64,
    pub new_payment: f64,
    pub monthly_savings: f64,
}

/// Display classification of a savings figure. Zero and NaN are non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsTone {
    Positive,
    NonPositive,
}

impl SavingsTone {
    pub fn classify(savings: f64) -> Self {
        if savings > 0.0 {
            SavingsTone::Positive
        } else {
            SavingsTone::NonPositive
        }
    }
}

impl LoanScenario {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Annual percentage rate converted to a monthly fraction.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Number of monthly periods. Fractional years are truncated before
    /// scaling, so 15.9 years is 180 months.
    pub fn periods(&self) -> f64 {
        self.term_years.trunc() * 12.0
    }

    pub fn payment(&self) -> PaymentResult {
        PaymentResult {
            monthly_payment: compute_monthly_payment(*self),
        }
    }
}

/// Fixed monthly payment under standard amortization.
///
/// A zero rate is not special-cased: the denominator becomes `1 - 1 = 0`
/// and the result is NaN. NaN inputs yield NaN.
pub fn compute_monthly_payment(scenario: LoanScenario) -> f64 {
    let r = scenario.periodic_rate();
    let n = scenario.periods();
    (scenario.principal * r) / (1.0 - (1.0 + r).powf(-n))
}

pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> f64 {
    compute_monthly_payment(LoanScenario::new(principal, annual_rate_percent, term_years))
}

/// Payments for both loans and their plain difference. No attempt is made to
/// normalise terms or balances between the two.
pub fn compute_savings(current: LoanScenario, refinanced: LoanScenario) -> SavingsResult {
    let current_payment = compute_monthly_payment(current);
    let new_payment = compute_monthly_payment(refinanced);

    SavingsResult {
        current_payment,
        new_payment,
        monthly_savings: current_payment - new_payment,
    }
}

impl SavingsResult {
    pub fn tone(&self) -> SavingsTone {
        SavingsTone::classify(self.monthly_savings)
    }
}
