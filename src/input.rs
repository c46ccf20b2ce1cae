use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::calculator::{compute_savings, LoanScenario, SavingsResult};

static DECIMAL_PREFIX: OnceLock<Regex> = OnceLock::new();
static WHOLE_PREFIX: OnceLock<Regex> = OnceLock::new();
static HEX_PREFIX: OnceLock<Regex> = OnceLock::new();
static STRICT_DECIMAL: OnceLock<Regex> = OnceLock::new();
static INFINITY: OnceLock<Regex> = OnceLock::new();

fn decimal_prefix() -> &'static Regex {
    DECIMAL_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("decimal prefix pattern")
    })
}

fn whole_prefix() -> &'static Regex {
    WHOLE_PREFIX.get_or_init(|| Regex::new(r"^[+-]?[0-9]+").expect("whole prefix pattern"))
}

fn hex_prefix() -> &'static Regex {
    HEX_PREFIX.get_or_init(|| {
        Regex::new(r"^([+-]?)0[xX]([0-9a-fA-F]*)").expect("hex prefix pattern")
    })
}

fn strict_decimal() -> &'static Regex {
    STRICT_DECIMAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("strict decimal pattern")
    })
}

fn infinity() -> &'static Regex {
    INFINITY.get_or_init(|| Regex::new(r"^([+-]?)Infinity").expect("infinity pattern"))
}

fn signed_infinity(text: &str) -> Option<f64> {
    infinity().captures(text).map(|caps| {
        if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

/// Parse the longest leading decimal number in `text`, ignoring leading
/// whitespace and any trailing garbage. `"4.5%"` is 4.5; `"abc"` and `""` are NaN.
pub fn parse_decimal(text: &str) -> f64 {
    let text = text.trim_start();
    if let Some(inf) = signed_infinity(text) {
        return inf;
    }
    decimal_prefix()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse the leading whole number in `text`. `"15.9"` is 15; `".5"` is NaN.
/// A `0x` prefix reads hex digits, so `"0x1E"` is 30.
pub fn parse_whole(text: &str) -> f64 {
    let text = text.trim_start();
    if let Some(caps) = hex_prefix().captures(text) {
        if caps[2].is_empty() {
            return f64::NAN;
        }
        let magnitude = caps[2]
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0.0, |acc, d| acc * 16.0 + f64::from(d));
        return if &caps[1] == "-" { -magnitude } else { magnitude };
    }
    whole_prefix()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Whole-string numeric conversion: surrounding whitespace is allowed, anything
/// else that is not part of the number makes the result NaN. Blank text is 0.
pub fn parse_strict(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    if strict_decimal().is_match(text) {
        return text.parse::<f64>().unwrap_or(f64::NAN);
    }
    match signed_infinity(text) {
        Some(inf) if text.trim_start_matches(['+', '-']) == "Infinity" => inf,
        _ => f64::NAN,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CurrentLoanAmount,
    CurrentInterestRate,
    RemainingTerm,
    NewLoanAmount,
    NewInterestRate,
    NewLoanTerm,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::CurrentLoanAmount,
        FormField::CurrentInterestRate,
        FormField::RemainingTerm,
        FormField::NewLoanAmount,
        FormField::NewInterestRate,
        FormField::NewLoanTerm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CurrentLoanAmount => "Current Loan Amount ($)",
            FormField::CurrentInterestRate => "Current Interest Rate (%)",
            FormField::RemainingTerm => "Remaining Term (years)",
            FormField::NewLoanAmount => "New Loan Amount ($)",
            FormField::NewInterestRate => "New Interest Rate (%)",
            FormField::NewLoanTerm => "New Loan Term (years)",
        }
    }

    pub fn index(&self) -> usize {
        FormField::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Option<FormField> {
        FormField::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<FormField> {
        self.index().checked_sub(1).map(|i| FormField::ALL[i])
    }

    fn is_rate(&self) -> bool {
        matches!(
            self,
            FormField::CurrentInterestRate | FormField::NewInterestRate
        )
    }

    /// Characters the terminal form lets through for this field.
    pub fn accepts(&self, c: char) -> bool {
        c.is_ascii_digit() || c == '.' || (c == '-' && self.is_rate())
    }
}

/// The six raw text inputs, kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinanceForm {
    pub current_loan_amount: String,
    pub current_interest_rate: String,
    pub remaining_term: String,
    pub new_loan_amount: String,
    pub new_interest_rate: String,
    pub new_loan_term: String,
}

impl RefinanceForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::CurrentLoanAmount => &self.current_loan_amount,
            FormField::CurrentInterestRate => &self.current_interest_rate,
            FormField::RemainingTerm => &self.remaining_term,
            FormField::NewLoanAmount => &self.new_loan_amount,
            FormField::NewInterestRate => &self.new_interest_rate,
            FormField::NewLoanTerm => &self.new_loan_term,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::CurrentLoanAmount => &mut self.current_loan_amount,
            FormField::CurrentInterestRate => &mut self.current_interest_rate,
            FormField::RemainingTerm => &mut self.remaining_term,
            FormField::NewLoanAmount => &mut self.new_loan_amount,
            FormField::NewInterestRate => &mut self.new_interest_rate,
            FormField::NewLoanTerm => &mut self.new_loan_term,
        }
    }

    pub fn current_scenario(&self) -> LoanScenario {
        LoanScenario::new(
            parse_decimal(&self.current_loan_amount),
            parse_decimal(&self.current_interest_rate),
            parse_whole(&self.remaining_term),
        )
    }

    pub fn refinanced_scenario(&self) -> LoanScenario {
        LoanScenario::new(
            parse_decimal(&self.new_loan_amount),
            parse_decimal(&self.new_interest_rate),
            parse_whole(&self.new_loan_term),
        )
    }

    pub fn calculate(&self) -> SavingsResult {
        compute_savings(self.current_scenario(), self.refinanced_scenario())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(parse_decimal("4.5"), 4.5);
        assert_eq!(parse_decimal("  4.5%"), 4.5);
        assert_eq!(parse_decimal("200000abc"), 200_000.0);
        assert_eq!(parse_decimal(".25"), 0.25);
        assert_eq!(parse_decimal("-3"), -3.0);
        assert_eq!(parse_decimal("1e3"), 1000.0);
        assert_eq!(parse_decimal("1e"), 1.0);
        assert_eq!(parse_decimal("1.2.3"), 1.2);
        assert_eq!(parse_decimal("Infinity"), f64::INFINITY);
        assert!(parse_decimal("").is_nan());
        assert!(parse_decimal("abc").is_nan());
        assert!(parse_decimal(".").is_nan());
    }

    #[test]
    fn test_parse_whole_truncates() {
        assert_eq!(parse_whole("30"), 30.0);
        assert_eq!(parse_whole("15.9"), 15.0);
        assert_eq!(parse_whole(" 7 years"), 7.0);
        assert_eq!(parse_whole("1e3"), 1.0);
        assert!(parse_whole(".5").is_nan());
        assert_eq!(parse_whole("0x1E"), 30.0);
        assert_eq!(parse_whole("-0x10"), -16.0);
        assert_eq!(parse_whole("0x1Eg"), 30.0);
        assert!(parse_whole("0xg").is_nan());
        assert!(parse_whole("").is_nan());
    }

    #[test]
    fn test_parse_strict_rejects_trailing_text() {
        assert_eq!(parse_strict(" 1234.5 "), 1234.5);
        assert_eq!(parse_strict(""), 0.0);
        assert_eq!(parse_strict("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_strict("100k").is_nan());
        assert!(parse_strict("inf").is_nan());
        assert!(parse_strict("Infinityx").is_nan());
    }

    #[test]
    fn test_field_navigation() {
        assert_eq!(FormField::CurrentLoanAmount.previous(), None);
        assert_eq!(
            FormField::CurrentLoanAmount.next(),
            Some(FormField::CurrentInterestRate)
        );
        assert_eq!(FormField::NewLoanTerm.next(), None);
        assert_eq!(FormField::NewLoanTerm.index(), 5);
    }

    #[test]
    fn test_field_accepts() {
        assert!(FormField::NewInterestRate.accepts('-'));
        assert!(!FormField::NewLoanAmount.accepts('-'));
        assert!(FormField::RemainingTerm.accepts('.'));
        assert!(!FormField::RemainingTerm.accepts('x'));
    }

    #[test]
    fn test_form_calculate() {
        let form = RefinanceForm {
            current_loan_amount: "200000".into(),
            current_interest_rate: "6".into(),
            remaining_term: "25".into(),
            new_loan_amount: "200000".into(),
            new_interest_rate: "4".into(),
            new_loan_term: "25".into(),
        };
        let result = form.calculate();
        assert!(result.monthly_savings > 0.0);
    }

    #[test]
    fn test_empty_form_is_nan() {
        let result = RefinanceForm::default().calculate();
        assert!(result.current_payment.is_nan());
        assert!(result.new_payment.is_nan());
        assert!(result.monthly_savings.is_nan());
    }
}
