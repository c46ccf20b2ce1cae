use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

use crate::calculator::{SavingsResult, SavingsTone};
use crate::errors::{RefinanceError, Result};
use crate::format::format_currency;
use crate::input::{FormField, RefinanceForm};
use crate::report::RefinanceReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    CalculateButton,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Field(field) => field.next().map_or(Focus::CalculateButton, Focus::Field),
            Focus::CalculateButton => Focus::Field(FormField::CurrentLoanAmount),
        }
    }

    fn previous(self) -> Focus {
        match self {
            Focus::Field(field) => field.previous().map_or(Focus::CalculateButton, Focus::Field),
            Focus::CalculateButton => Focus::Field(FormField::NewLoanTerm),
        }
    }
}

pub struct App {
    pub focus: Focus,
    pub form: RefinanceForm,
    /// Last calculation. Stays on screen while fields are edited.
    pub result: Option<SavingsResult>,
    pub status: Option<String>,
    export_path: PathBuf,
}

impl App {
    pub fn new(export_path: PathBuf) -> Self {
        Self {
            focus: Focus::Field(FormField::CurrentLoanAmount),
            form: RefinanceForm::default(),
            result: None,
            status: None,
            export_path,
        }
    }

    pub fn with_form(mut self, form: RefinanceForm) -> Self {
        self.form = form;
        self
    }

    pub fn calculate(&mut self) {
        let result = self.form.calculate();
        tracing::info!(
            current_payment = result.current_payment,
            new_payment = result.new_payment,
            monthly_savings = result.monthly_savings,
            "calculated refinance savings"
        );
        self.status = Some(format!(
            "Projected monthly savings: ${}",
            format_currency(Some(result.monthly_savings))
        ));
        self.result = Some(result);
    }

    /// `None` until the first calculation.
    pub fn savings_tone(&self) -> Option<SavingsTone> {
        self.result.map(|r| r.tone())
    }

    pub fn export(&self) -> Result<PathBuf> {
        let result = self.result.as_ref().ok_or(RefinanceError::NothingToExport)?;
        RefinanceReport::new(&self.form, result).export(&self.export_path)?;
        Ok(self.export_path.clone())
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        // A status message lasts until the next key; calculate and export set a fresh one.
        self.status = None;

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => match self.focus {
                Focus::Field(_) => self.focus = self.focus.next(),
                Focus::CalculateButton => self.calculate(),
            },
            KeyCode::Char('c') => self.calculate(),
            KeyCode::Char('e') => match self.export() {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "exported refinance summary");
                    self.status = Some(format!("Exported to {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("export failed: {}", e);
                    self.status = Some(format!("Export failed: {}", e));
                }
            },
            KeyCode::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.form.field_mut(field).pop();
                }
            }
            KeyCode::Char(c) => {
                if let Focus::Field(field) = self.focus {
                    if field.accepts(c) {
                        self.form.field_mut(field).push(c);
                    }
                }
            }
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn filled_app() -> App {
        let mut app = App::new(PathBuf::from("unused.json"));
        for value in ["200000", "6", "25", "200000", "4", "25"] {
            type_text(&mut app, value);
            press(&mut app, KeyCode::Enter);
        }
        app
    }

    #[test]
    fn test_typing_moves_through_fields() {
        let app = filled_app();
        assert_eq!(app.form.current_loan_amount, "200000");
        assert_eq!(app.form.new_interest_rate, "4");
        assert_eq!(app.focus, Focus::CalculateButton);
        assert!(app.result.is_none());
        assert_eq!(app.savings_tone(), None);
    }

    #[test]
    fn test_calculate_button() {
        let mut app = filled_app();
        assert!(!press(&mut app, KeyCode::Enter));
        let result = app.result.unwrap();
        assert!(result.monthly_savings > 0.0);
        assert_eq!(app.savings_tone(), Some(SavingsTone::Positive));
    }

    #[test]
    fn test_editing_keeps_last_result() {
        let mut app = filled_app();
        press(&mut app, KeyCode::Char('c'));
        let before = app.result;
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.current_loan_amount, "20000");
        assert_eq!(app.result, before);
    }

    #[test]
    fn test_rejected_characters() {
        let mut app = App::new(PathBuf::from("unused.json"));
        type_text(&mut app, "1-2x3");
        assert_eq!(app.form.current_loan_amount, "123");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "-1.5");
        assert_eq!(app.form.current_interest_rate, "-1.5");
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::new(PathBuf::from("unused.json"));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::CalculateButton);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Field(FormField::CurrentLoanAmount));
    }

    #[test]
    fn test_export_requires_result() {
        let mut app = App::new(PathBuf::from("unused.json"));
        assert!(matches!(app.export(), Err(RefinanceError::NothingToExport)));
        press(&mut app, KeyCode::Char('e'));
        assert!(app.status.unwrap().starts_with("Export failed"));
    }

    #[test]
    fn test_status_cleared_by_next_key() {
        let mut app = filled_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.status.is_some());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.status, None);
        assert!(app.result.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(PathBuf::from("unused.json"));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
