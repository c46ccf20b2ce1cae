use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::calculator::{LoanScenario, SavingsResult, SavingsTone};
use crate::errors::Result;
use crate::format::format_currency;
use crate::input::RefinanceForm;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanReport {
    pub loan_amount: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub monthly_payment: f64,
    pub monthly_payment_display: String,
}

impl LoanReport {
    fn new(scenario: LoanScenario, monthly_payment: f64) -> Self {
        Self {
            loan_amount: scenario.principal,
            annual_rate_percent: scenario.annual_rate_percent,
            term_years: scenario.term_years,
            monthly_payment,
            monthly_payment_display: format_currency(Some(monthly_payment)),
        }
    }
}

/// Snapshot of one calculation. Non-finite numbers serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinanceReport {
    pub inputs: RefinanceForm,
    pub current: LoanReport,
    pub refinanced: LoanReport,
    pub monthly_savings: f64,
    pub monthly_savings_display: String,
    pub savings_tone: SavingsTone,
}

impl RefinanceReport {
    pub fn new(form: &RefinanceForm, result: &SavingsResult) -> Self {
        Self {
            inputs: form.clone(),
            current: LoanReport::new(form.current_scenario(), result.current_payment),
            refinanced: LoanReport::new(form.refinanced_scenario(), result.new_payment),
            monthly_savings: result.monthly_savings,
            monthly_savings_display: format_currency(Some(result.monthly_savings)),
            savings_tone: result.tone(),
        }
    }

    pub fn from_form(form: &RefinanceForm) -> Self {
        Self::new(form, &form.calculate())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl fmt::Display for RefinanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Payment & Savings Overview")?;
        writeln!(f, "Current Monthly Payment: ${}", self.current.monthly_payment_display)?;
        writeln!(f, "New Monthly Payment: ${}", self.refinanced.monthly_payment_display)?;
        let tone = match self.savings_tone {
            SavingsTone::Positive => "positive",
            SavingsTone::NonPositive => "non-positive",
        };
        write!(
            f,
            "Projected Monthly Savings: ${} ({tone})",
            self.monthly_savings_display
        )
    }
}
