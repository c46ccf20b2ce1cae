pub mod app;
pub mod calculator;
pub mod config;
pub mod errors;
pub mod format;
pub mod input;
pub mod logger;
pub mod report;
pub mod ui;

pub use calculator::{
    compute_monthly_payment, compute_savings, monthly_payment, LoanScenario, PaymentResult,
    SavingsResult, SavingsTone,
};
pub use config::Config;
pub use errors::{RefinanceError, Result};
pub use format::{format_currency, format_currency_text};
pub use input::{parse_decimal, parse_whole, FormField, RefinanceForm};
pub use report::RefinanceReport;
